//! Composer Context
//!
//! Task composer state shared via Leptos Context API: the sidebar's
//! "Add list" entry opens the composer in the main panel.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ComposerContext {
    /// Whether the composer shows its text input - read
    pub editing: ReadSignal<bool>,
    /// Whether the composer shows its text input - write
    set_editing: WriteSignal<bool>,
    /// Text typed so far; kept when the input loses focus
    pub draft: RwSignal<String>,
}

impl ComposerContext {
    pub fn new() -> Self {
        let (editing, set_editing) = signal(false);
        Self {
            editing,
            set_editing,
            draft: RwSignal::new(String::new()),
        }
    }

    pub fn start_editing(&self) {
        self.set_editing.set(true);
    }

    pub fn stop_editing(&self) {
        self.set_editing.set(false);
    }

    /// Clear the draft and close the input after a successful add
    pub fn reset(&self) {
        self.draft.set(String::new());
        self.set_editing.set(false);
    }
}
