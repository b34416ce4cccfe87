//! Heartmap Page
//!
//! Shared places shown as heart markers on a Kakao map, built with Leptos
//! (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It loads its settings from the Heartmap host, keeps the
//! location list in a reactive signal and mirrors it onto the map through
//! the core `MapSynchronizer`.

use leptos::*;

mod api;
mod app;
mod components;
mod map;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
