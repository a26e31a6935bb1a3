//! DoIt Frontend Entry Point

mod models;
mod config;
mod error;
mod storage;
mod source;
mod task_list;
mod theme;
mod chart;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Only fails when a logger is already installed
    console_log::init_with_level(log::Level::Debug).ok();
    log::info!("starting DoIt frontend");
    mount_to_body(App);
}
