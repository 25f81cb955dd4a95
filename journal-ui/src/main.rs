//! Journal Viewer
//!
//! Single-page journal viewer built with Leptos (WASM).
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. Clicking an entry, the
//! settings icon or the header title pushes a navigation through the
//! `journal` history tracker, which updates `window.history`; back/forward
//! restores the view from the URL hash.

use leptos::*;

mod app;
mod components;
mod history;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
