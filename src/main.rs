//! Field Atlas Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod csrf;
mod editor;
mod error;
mod gallery;
mod geojson;
mod models;
mod notification;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

/// Panic message plus the lines logged just before it
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        let recent = rolling_logger::recent_lines();
        web_sys::console::error_1(&format!("Last {} log lines:\n{}", recent.len(), recent.join("\n")).into());
    }));
}

fn main() {
    install_panic_hook();
    if let Err(e) = rolling_logger::init_logger("FieldAtlas", LevelFilter::Info, rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("[App] Starting");
    mount_to_body(App);
}
