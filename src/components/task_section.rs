//! Task Section Component
//!
//! Heading plus the pending or completed slice of the list.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::models::Task;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskSection(
    title: &'static str,
    empty_text: &'static str,
    /// Show completed tasks instead of pending ones
    completed: bool,
) -> impl IntoView {
    let store = use_app_store();

    // Recomputed from the list on every change
    let tasks = move || {
        let list = store.tasks().read();
        let visible: Vec<Task> = if completed {
            list.completed().cloned().collect()
        } else {
            list.pending().cloned().collect()
        };
        visible
    };

    view! {
        <h4 class="mt-4">{title}</h4>
        <ul class="list-group">
            <Show
                when=move || !tasks().is_empty()
                fallback=move || view! { <p class="text-muted">{empty_text}</p> }
            >
                <For
                    each=tasks
                    key=|task| (task.id, task.completed, task.starred)
                    children=move |task| view! { <TaskRow task=task /> }
                />
            </Show>
        </ul>
    }
}
