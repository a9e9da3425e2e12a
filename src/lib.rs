//! Smartjects - project matching front-end
//!
//! Marketing and account pages for the Smartjects platform, built with
//! Leptos and WebAssembly. The only stateful piece is the client-side
//! session store in [`core::session`].

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
