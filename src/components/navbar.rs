//! Navbar Component
//!
//! Brand, theme toggle and the mobile menu toggle.

use leptos::prelude::*;

use crate::components::MobileMenu;
use crate::config::use_config;
use crate::storage::BrowserStorage;
use crate::theme::{apply_theme, load_theme, save_theme};

const LOGO_URL: &str = "https://static.vecteezy.com/system/resources/thumbnails/024/382/921/small_2x/gradient-green-check-mark-icon-symbol-logo-in-a-circle-tick-symbol-green-color-transparent-free-png.png";

/// Top navigation bar with a persisted dark/light toggle
#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_config();

    let initial = load_theme(&BrowserStorage, &config.theme_key);
    apply_theme(initial);

    let (theme, set_theme) = signal(initial);
    let (menu_open, set_menu_open) = signal(false);

    let theme_key = config.theme_key;
    let toggle_theme = move |_| {
        let next = theme.get_untracked().toggled();
        log::debug!("theme -> {}", next.as_str());
        apply_theme(next);
        save_theme(&BrowserStorage, &theme_key, next);
        set_theme.set(next);
    };

    view! {
        <nav class=move || format!("navbar navbar-expand-lg {} shadow", theme.get().navbar_classes())>
            <div class="container-fluid">
                <a class="navbar-brand d-flex align-items-center" href="/">
                    <div class="p-2 rounded">
                        <img src=LOGO_URL alt="logo" width="40" height="30" />
                    </div>
                    <span class="ms-2 text-success fw-bold fs-5">"DoIt"</span>
                </a>

                <button
                    class="navbar-toggler p-2 rounded border-0"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() {
                        view! { <span class="fs-3 text-danger">"✕"</span> }.into_any()
                    } else {
                        view! { <span class="fs-3 text-success">"☰"</span> }.into_any()
                    }}
                </button>

                <div class=move || if menu_open.get() { "collapse navbar-collapse show" } else { "collapse navbar-collapse" }>
                    <div class="ms-auto d-flex align-items-center gap-3">
                        <span class="nav-glyph">"🔍"</span>
                        <span class="nav-glyph">"▦"</span>
                        <button class="btn btn-outline-secondary" on:click=toggle_theme>
                            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                        </button>
                    </div>
                </div>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <MobileMenu on_close=Callback::new(move |_| set_menu_open.set(false)) />
        </Show>
    }
}
