//! # client
//!
//! Leptos + WASM frontend for the Ford strategy dashboard.
//!
//! Renders pre-authored business-strategy analysis for Ford's three business
//! units (Blue, Model e, Pro) as cards, charts, and a guided narrative
//! timeline. All numeric series are compiled-in constants or static JSON
//! documents fetched from the companion `server` crate; nothing is computed
//! or persisted.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. Mounts the application onto `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
