//! Remote Task Source
//!
//! One-shot GET of the seed list from the demo API.

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::error::LoadError;
use crate::models::{RemoteTodo, Task};

/// Where the seed list comes from when nothing is persisted yet
#[async_trait(?Send)]
pub trait TaskSource {
    async fn fetch_seed(&self) -> Result<Vec<RemoteTodo>, LoadError>;
}

/// HTTP source backed by `gloo-net`
#[derive(Debug, Clone)]
pub struct HttpTaskSource {
    url: String,
}

impl HttpTaskSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl TaskSource for HttpTaskSource {
    async fn fetch_seed(&self) -> Result<Vec<RemoteTodo>, LoadError> {
        log::debug!("GET {}", self.url);
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(LoadError::Status(response.status()));
        }
        response
            .json::<Vec<RemoteTodo>>()
            .await
            .map_err(|e| LoadError::Decode(e.to_string()))
    }
}

/// Map raw seed items to tasks: every third item (by fetch order) starts
/// completed, none starred.
pub fn seed_tasks(raw: Vec<RemoteTodo>) -> Vec<Task> {
    raw.into_iter()
        .enumerate()
        .map(|(index, todo)| Task {
            user_id: todo.user_id,
            id: todo.id,
            title: todo.title,
            completed: index % 3 == 0,
            starred: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(id: u64) -> RemoteTodo {
        RemoteTodo {
            user_id: Some(1),
            id,
            title: format!("Todo {}", id),
            // Remote flag must be ignored
            completed: true,
        }
    }

    #[test]
    fn test_seed_marks_every_third_completed() {
        let tasks = seed_tasks((1..=7).map(remote).collect());
        assert_eq!(tasks.len(), 7);
        let completed: Vec<usize> = tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.completed)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(completed, vec![0, 3, 6]);
        assert!(tasks.iter().all(|t| !t.starred));
    }

    #[test]
    fn test_seed_keeps_identity_and_order() {
        let tasks = seed_tasks(vec![remote(5), remote(2)]);
        assert_eq!(tasks[0].id, 5);
        assert_eq!(tasks[0].title, "Todo 5");
        assert_eq!(tasks[0].user_id, Some(1));
        assert_eq!(tasks[1].id, 2);
        assert!(!tasks[1].completed);
    }

    #[test]
    fn test_seed_empty() {
        assert!(seed_tasks(Vec::new()).is_empty());
    }
}
