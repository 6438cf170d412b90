//! # interview-ui
//!
//! Leptos + WASM frontend widgets for the interview dashboard: the card
//! context menu with its delete confirmation, and the logout button.
//!
//! This crate contains pages, components, application state, the action
//! flows behind each widget, and the REST helpers those flows call. The
//! `ssr` feature adds the Axum host binary in `main.rs`.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
