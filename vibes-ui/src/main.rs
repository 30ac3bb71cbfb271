//! Garfield Vibes
//!
//! Y2K/vaporwave tribute page built with Leptos (WASM).
//!
//! # Sections
//!
//! - Header with navigation and the light/dark toggle
//! - Hero banner
//! - Meme gallery with lightbox
//! - Random comic viewer
//! - Footer with a wisdom quote
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All content and state transitions come from the
//! `garfield-vibes` crate; this crate only renders them. Build with
//! `trunk build --release`; the server serves `dist/`.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
