//! Task List
//!
//! The in-memory list of tasks mirrored to a persisted slot. Every mutation
//! rewrites the whole slot before returning.

use std::collections::HashSet;

use crate::error::LoadError;
use crate::models::{Task, TaskSummary};
use crate::source::{seed_tasks, TaskSource};
use crate::storage::KeyValueStorage;

#[derive(Debug, Clone)]
pub struct TaskList<S> {
    tasks: Vec<Task>,
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> TaskList<S> {
    /// Empty list bound to `key`, without touching storage
    pub fn empty(storage: S, key: impl Into<String>) -> Self {
        Self {
            tasks: Vec::new(),
            storage,
            key: key.into(),
        }
    }

    /// Open the list persisted under `key`.
    ///
    /// A missing or unreadable slot yields an empty list.
    pub fn open(storage: S, key: impl Into<String>) -> Self {
        let mut list = Self::empty(storage, key);
        if let Some(raw) = list.storage.get(&list.key) {
            match serde_json::from_str::<Vec<Task>>(&raw) {
                Ok(tasks) => list.tasks = tasks,
                Err(e) => log::warn!("ignoring unreadable task list in '{}': {}", list.key, e),
            }
        }
        list
    }

    #[cfg(test)]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn pending(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| !t.completed)
    }

    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed)
    }

    pub fn summary(&self) -> TaskSummary {
        let completed = self.completed().count();
        TaskSummary {
            total: self.tasks.len(),
            pending: self.tasks.len() - completed,
            completed,
        }
    }

    /// Replace the whole list (seed load) and persist it
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.persist();
    }

    /// Append a task titled `title`; blank titles are ignored.
    ///
    /// Returns the new id. `now_ms` is the clock reading the id derives from.
    pub fn add(&mut self, title: &str, now_ms: u64) -> Option<u64> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let id = self.next_id(now_ms);
        self.tasks.push(Task::new(id, title));
        log::debug!("added task {}", id);
        self.persist();
        Some(id)
    }

    /// Returns whether a task matched
    pub fn toggle_completed(&mut self, id: u64) -> bool {
        self.update(id, |task| task.completed = !task.completed)
    }

    /// Returns whether a task matched
    pub fn toggle_starred(&mut self, id: u64) -> bool {
        self.update(id, |task| task.starred = !task.starred)
    }

    /// Returns whether a task was removed
    pub fn remove(&mut self, id: u64) -> bool {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        log::debug!("removed task {}", id);
        self.persist();
        true
    }

    fn update(&mut self, id: u64, f: impl FnOnce(&mut Task)) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        f(task);
        log::debug!("updated task {}", id);
        self.persist();
        true
    }

    /// Time-derived id, bumped past existing ids on collision.
    ///
    /// Once an id at `u64::MAX` is present, takes the first unused id at or
    /// above `now_ms`, wrapping to zero.
    fn next_id(&self, now_ms: u64) -> u64 {
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if max >= now_ms => match max.checked_add(1) {
                Some(id) => id,
                None => self.first_unused_id(now_ms),
            },
            _ => now_ms,
        }
    }

    fn first_unused_id(&self, from: u64) -> u64 {
        let used: HashSet<u64> = self.tasks.iter().map(|t| t.id).collect();
        (from..=u64::MAX)
            .chain(0..from)
            .find(|id| !used.contains(id))
            .unwrap_or(from)
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.tasks) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("failed to serialize task list: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &raw) {
            log::error!("failed to persist task list: {}", e);
        }
    }
}

/// Startup load: a non-empty persisted list wins; otherwise fetch the seed
/// from `source`, map it and persist it.
pub async fn load<S, R>(storage: S, key: &str, source: &R) -> Result<TaskList<S>, LoadError>
where
    S: KeyValueStorage,
    R: TaskSource + ?Sized,
{
    let mut list = TaskList::open(storage, key);
    if !list.is_empty() {
        log::info!("restored {} tasks from '{}'", list.len(), key);
        return Ok(list);
    }
    let raw = source.fetch_seed().await?;
    log::info!("seeded {} tasks from remote source", raw.len());
    list.replace_all(seed_tasks(raw));
    Ok(list)
}
