//! # catalog-client
//!
//! Leptos + WASM frontend for the product catalog. Lists products from a REST
//! collaborator and creates, edits, and deletes them through a single form.
//!
//! The [`controller`] module holds the action flow; `pages` and `components`
//! bind it to the DOM. Built with `hydrate` for the browser and `ssr` for the
//! page host.

pub mod app;
pub mod components;
pub mod controller;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
