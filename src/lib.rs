// ============================================================================
// PACKAGE ADMIN - FRONTEND (YEW + WASM)
// ============================================================================
// - Views: function components, rendering only
// - Hooks: view state + callbacks
// - Services: HTTP calls and the session flag
// - Models: backend types, status derivation, form validation
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;
pub mod views;

use wasm_bindgen::prelude::*;

use crate::components::App;
use crate::config::CONFIG;

/// Installs the panic hook and logger, then mounts the app on `<body>`
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }
    log::info!("🚀 Package admin starting (backend: {})", CONFIG.server_url);

    yew::Renderer::<App>::new().render();
}
