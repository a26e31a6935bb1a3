//! Task Composer Component
//!
//! "Add A Task" card with the draft input and the ADD TASK button.

use leptos::html;
use leptos::prelude::*;

use crate::context::ComposerContext;
use crate::store::{store_add_task, use_app_store};

#[component]
pub fn TaskComposer() -> impl IntoView {
    let store = use_app_store();
    let composer = expect_context::<ComposerContext>();
    let input_ref = NodeRef::<html::Input>::new();

    // Focus the input whenever it gets mounted
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let add_task = move |_| {
        let title = composer.draft.get_untracked();
        if store_add_task(&store, &title) {
            composer.reset();
        }
    };

    view! {
        <div class="card shadow-sm border-0">
            <div class="card-body bg-success bg-opacity-10 position-relative" style="min-height: 180px;">
                <div class="text-muted fw-bold" style="cursor: pointer; padding-left: 20px; padding-top: 10px;">
                    <Show
                        when=move || composer.editing.get()
                        fallback=move || view! {
                            <h5 style="margin-bottom: 0px;">"Add A Task"</h5>
                        }
                    >
                        <input
                            type="text"
                            class="form-control border-0 bg-transparent fw-bold"
                            placeholder="Type a new task..."
                            style="width: 200px;"
                            node_ref=input_ref
                            prop:value=move || composer.draft.get()
                            on:input=move |ev| composer.draft.set(event_target_value(&ev))
                            on:blur=move |_| composer.stop_editing()
                        />
                    </Show>
                </div>

                <div class="position-absolute" style="left: 20px; bottom: 15px;">
                    <span class="text-secondary me-3">"🔔"</span>
                    <span class="text-secondary me-3">"🔁"</span>
                    <span class="text-secondary">"📅"</span>
                </div>

                <button
                    class="btn bg-success bg-opacity-10 px-4 text-success fw-bold"
                    style="position: absolute; right: 20px; bottom: 10px;"
                    on:click=add_task
                >
                    "ADD TASK"
                </button>
            </div>
        </div>
    }
}
