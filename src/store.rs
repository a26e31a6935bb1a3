//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::AppConfig;
use crate::storage::BrowserStorage;
use crate::task_list::TaskList;

/// Task list plus the status of the startup load
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Tasks, mirrored to localStorage on every mutation
    pub tasks: TaskList<BrowserStorage>,
    /// Startup fetch in flight
    pub loading: bool,
    /// Message from a failed startup load
    pub error: Option<String>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            tasks: TaskList::empty(BrowserStorage, config.tasks_key.clone()),
            loading: false,
            error: None,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a task titled `title`, id derived from the current time.
///
/// Returns whether a task was added.
pub fn store_add_task(store: &AppStore, title: &str) -> bool {
    let now_ms = js_sys::Date::now() as u64;
    store.tasks().write().add(title, now_ms).is_some()
}

/// Flip the completed flag of a task by ID
pub fn store_toggle_completed(store: &AppStore, task_id: u64) {
    store.tasks().write().toggle_completed(task_id);
}

/// Flip the starred flag of a task by ID
pub fn store_toggle_starred(store: &AppStore, task_id: u64) {
    store.tasks().write().toggle_starred(task_id);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: u64) {
    store.tasks().write().remove(task_id);
}
