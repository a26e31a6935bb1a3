//! Mobile Menu Component
//!
//! Fixed side panel with static entries; not bound to task data.

use leptos::prelude::*;

const MENU_STYLE: &str = "z-index: 1050; width: 300px; height: calc(100vh - 40px); \
    background-color: #EEF6EF; top: 20px; right: 20px; border-radius: 8px; overflow-y: auto;";

/// Static menu entries: (glyph, label)
const MENU_ENTRIES: &[(&str, &str)] = &[
    ("🛒", "Buy groceries"),
    ("＋", "Add step"),
    ("🔔", "Set Reminder"),
];

#[component]
pub fn MobileMenu(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let (show_calendar, set_show_calendar) = signal(false);

    view! {
        <div class="mobile-menu-overlay position-fixed" style=MENU_STYLE>
            <div class="p-3">
                <ul class="list-group">
                    {MENU_ENTRIES.iter().map(|(glyph, label)| view! {
                        <li class="list-group-item d-flex align-items-center mb-2">
                            <span class="me-2">{*glyph}</span>
                            {*label}
                        </li>
                    }).collect_view()}
                    <li class="list-group-item d-flex flex-column align-items-start mb-2">
                        <div
                            class="d-flex align-items-center"
                            style="cursor: pointer;"
                            on:click=move |_| set_show_calendar.update(|shown| *shown = !*shown)
                        >
                            <span class="me-2">"📅"</span>
                            "Add Due, Date"
                        </div>
                        <Show when=move || show_calendar.get()>
                            <input type="date" class="form-control mt-2" />
                        </Show>
                    </li>
                    <li class="list-group-item d-flex align-items-center mb-2">
                        <span class="me-2">"🔁"</span>
                        "Repeat"
                    </li>
                </ul>
                <hr />
                <div class="d-flex justify-content-between">
                    <button class="btn btn-light" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                    <button class="btn btn-danger">"🗑"</button>
                </div>
            </div>
        </div>
    }
}
