//! # cms-client
//!
//! Leptos + WASM front end for the blog content-management system.
//!
//! This crate holds the client-side route table and navigation guard, the
//! authentication session store, and the thin HTTP layer the store talks to.
//! Routing and session logic are plain Rust and run natively in tests; the
//! browser glue (`gloo-net` requests, `localStorage`) is gated behind the
//! `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod router;
pub mod session;

/// WASM entry point: install browser logging and hydrate the server-rendered
/// shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
