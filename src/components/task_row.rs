//! Task Row Component

use leptos::prelude::*;

use crate::models::Task;
use crate::store::{store_remove_task, store_toggle_completed, store_toggle_starred, use_app_store};

/// One task with its completed checkbox, star and delete buttons
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_app_store();
    let id = task.id;

    let row_class = if task.completed {
        "list-group-item d-flex justify-content-between align-items-center flex-wrap bg-light"
    } else {
        "list-group-item d-flex justify-content-between align-items-center flex-wrap"
    };
    let title_style = if task.completed { "text-decoration: line-through;" } else { "" };

    view! {
        <li class=row_class style="padding: 10px; border-radius: 8px;">
            <div class="d-flex align-items-center w-100">
                <input
                    type="checkbox"
                    class="me-2"
                    prop:checked=task.completed
                    on:change=move |_| store_toggle_completed(&store, id)
                />
                <span class="flex-grow-1" style=title_style>{task.title}</span>
            </div>
            <div class="d-flex align-items-center justify-content-end w-100">
                <button class="btn text-success me-2" on:click=move |_| store_toggle_starred(&store, id)>
                    {if task.starred { "★" } else { "☆" }}
                </button>
                <button class="btn text-danger" on:click=move |_| store_remove_task(&store, id)>
                    "🗑"
                </button>
            </div>
        </li>
    }
}
