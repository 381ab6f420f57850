//! # mindguard
//!
//! Leptos + WASM client for the MindGuard daily wellness check-in.
//!
//! The crate owns the interactive half of the check-in page: discrete 1-5
//! sliders with pointer and keyboard input, emoji labels, validation, the
//! submission round trip to the scoring service, and rendering of the
//! burnout-risk result. Scoring itself lives behind `POST /api/submit`.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs console logging and hydrates the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::logging::log!("mindguard client starting");
    leptos::mount::hydrate_body(app::App);
}
