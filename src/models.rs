//! Frontend Models
//!
//! Task records and the wire shape of the remote seed source.

use serde::{Deserialize, Serialize};

/// One to-do item as held in memory and persisted to local storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Owner reported by the seed source; absent for locally added tasks
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    pub id: u64,
    pub title: String,
    pub completed: bool,
    #[serde(default)]
    pub starred: bool,
}

impl Task {
    /// Create a fresh, incomplete, unstarred task
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            user_id: None,
            id,
            title: title.into(),
            completed: false,
            starred: false,
        }
    }
}

/// Item returned by the remote demo API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteTodo {
    #[serde(rename = "userId", default)]
    pub user_id: Option<u32>,
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Pending/completed counts derived from the current list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_json_shape() {
        let mut task = Task::new(42, "Buy milk");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":42,"title":"Buy milk","completed":false,"starred":false}"#);

        task.user_id = Some(3);
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.starts_with(r#"{"userId":3,"id":42"#));
    }

    #[test]
    fn test_task_without_starred_field() {
        let task: Task = serde_json::from_str(r#"{"id":1,"title":"a","completed":true}"#).unwrap();
        assert!(task.completed);
        assert!(!task.starred);
        assert_eq!(task.user_id, None);
    }

    #[test]
    fn test_remote_todo_ignores_unknown_fields() {
        let raw = r#"{"userId":1,"id":7,"title":"delectus aut autem","completed":false,"extra":0}"#;
        let todo: RemoteTodo = serde_json::from_str(raw).unwrap();
        assert_eq!(todo.user_id, Some(1));
        assert_eq!(todo.id, 7);
        assert_eq!(todo.title, "delectus aut autem");
    }
}
