//! App Root Component
//!
//! Root layout: theme provider, fixed header, then the four sections.

use leptos::*;

use crate::components::{ComicViewer, Footer, Header, Hero, MemeGallery};
use crate::state::theme::provide_theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Theme is the only state shared across sections
    provide_theme();

    view! {
        <div class="font-comic antialiased">
            <Header />

            <main class="min-h-screen bg-black">
                <Hero />
                <MemeGallery />
                <ComicViewer />
                <Footer />
            </main>
        </div>
    }
}
