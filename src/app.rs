//! DoIt Frontend App
//!
//! Navbar above the task panel (sidebar + task sections).

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{Navbar, Sidebar, TaskComposer, TaskSection};
use crate::config::{use_config, AppConfig};
use crate::context::ComposerContext;
use crate::source::HttpTaskSource;
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields};
use crate::task_list;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::default());

    view! {
        <div>
            <Navbar />
            <TodoApp />
        </div>
    }
}

/// Task panel; owns the store and runs the startup load
#[component]
pub fn TodoApp() -> impl IntoView {
    let config = use_config();
    let store = Store::new(AppState::new(&config));
    provide_context(store);
    provide_context(ComposerContext::new());

    // Persisted list wins; the remote seed is fetched only when it is empty
    store.loading().set(true);
    let key = config.tasks_key.clone();
    let source = HttpTaskSource::new(config.seed_url());
    spawn_local(async move {
        match task_list::load(BrowserStorage, &key, &source).await {
            Ok(list) => store.tasks().set(list),
            Err(e) => {
                log::error!("initial task load failed: {}", e);
                store.error().set(Some(e.to_string()));
            }
        }
        store.loading().set(false);
    });

    view! {
        <div class="container-fluid mt-4">
            <div class="row">
                <Sidebar />

                <main class="col-12 col-md-9">
                    <TaskComposer />

                    {move || store.error().get().map(|message| view! {
                        <div class="alert alert-danger">{message}</div>
                    })}

                    <Show when=move || store.loading().get()>
                        <div class="text-center">"Loading tasks..."</div>
                    </Show>

                    <TaskSection title="Pending Tasks" empty_text="No pending tasks." completed=false />
                    <TaskSection title="Completed Tasks" empty_text="No completed tasks." completed=true />
                </main>
            </div>
        </div>
    }
}
