//! LearnR - landing page
//!
//! The LearnR marketing site, server-rendered with Leptos and hydrated in
//! WebAssembly. Scroll, reveal, counter, typing and hover effects live in
//! `core` as plain state machines driven by an injectable scheduler, and are
//! bound to the DOM by `ui::behaviors` after hydration.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::logging::log!("LearnR - Study Less. Learn More. Actually Remember It.");
    leptos::mount::hydrate_body(App);
}
