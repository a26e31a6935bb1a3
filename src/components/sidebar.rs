//! Sidebar Component
//!
//! Profile, static list menu, "Add list" and the Today Tasks chart card.

use leptos::prelude::*;

use crate::components::ProgressChart;
use crate::context::ComposerContext;
use crate::store::{use_app_store, AppStateStoreFields};

const PROFILE_URL: &str = "https://media.istockphoto.com/id/1413766112/photo/successful-mature-businessman-looking-at-camera-with-confidence.jpg?s=612x612&w=0&k=20&c=NJSugBzNuZqb7DJ8ZgLfYKb3qPr2EJMvKZ21Sj5Sfq4=";

/// Menu entries: (glyph, label, highlighted)
const MENU: &[(&str, &str, bool)] = &[
    ("☑", "All Tasks", false),
    ("📅", "Today", true),
    ("★", "Important", false),
    ("☰", "Planned", false),
    ("👤", "Assigned to me", false),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();
    let composer = expect_context::<ComposerContext>();

    view! {
        <aside class="col-12 col-md-3 bg-light p-3 shadow-sm rounded mb-4 mb-md-0">
            <div class="text-center">
                <img
                    src=PROFILE_URL
                    alt="Profile"
                    class="rounded-circle mb-2"
                    style="width: 100px; height: 100px;"
                />
                <h5 class="text-success">"Hey, ABCD"</h5>
            </div>

            <ul class="list-unstyled mt-3">
                {MENU.iter().map(|(glyph, label, active)| {
                    let class = match (*active, *label == "All Tasks") {
                        (true, _) => "p-2 d-flex align-items-center bg-success text-white rounded",
                        (false, true) => "p-2 d-flex align-items-center text-success fw-bold",
                        (false, false) => "p-2 d-flex align-items-center text-success",
                    };
                    view! {
                        <li class=class>
                            <span class="me-2">{*glyph}</span>
                            {*label}
                        </li>
                    }
                }).collect_view()}
            </ul>

            <div
                class="p-3 mt-3 border rounded text-success fw-bold d-flex align-items-center"
                style="cursor: pointer;"
                on:click=move |_| composer.start_editing()
            >
                <span class="me-2">"＋"</span>
                "Add list"
            </div>

            <div class="card shadow-sm border-0 mb-4">
                <div class="card-body">
                    <h5>
                        "Today Tasks "
                        <span class="text-muted">{move || format!("( {} )", store.tasks().read().len())}</span>
                    </h5>
                    <ProgressChart />
                </div>
            </div>
        </aside>
    }
}
