//! SwapDeck - Leptos swap widget frontend
//!
//! Client-side currency swap form with a live conversion preview.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod hooks;
mod pages;
mod services;
mod state;
mod swap;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("SwapDeck starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
