//! Header Component
//!
//! Fixed top bar: logo, in-page navigation and the theme toggle.

use leptos::*;

use garfield_vibes::content::NAV_LINKS;

use crate::state::use_theme;

#[component]
pub fn Header() -> impl IntoView {
    let theme_ctx = use_theme();
    let theme = theme_ctx.theme();

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md bg-light-bg/80 dark:bg-dark-bg/80 border-b border-garfield-pink/30">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 sm:h-20">
                    // Logo
                    <div class="flex items-center gap-2 sm:gap-3">
                        <span class="text-3xl sm:text-4xl animate-wiggle">"🐱"</span>
                        <h1 class="text-xl sm:text-2xl md:text-3xl font-bold glow-text rainbow-text">
                            "Garfield Vibes"
                        </h1>
                    </div>

                    // Navigation
                    <nav class="hidden md:flex items-center gap-6">
                        {NAV_LINKS.iter().map(|link| view! {
                            <a
                                href=link.href
                                class="text-lg font-semibold text-garfield-purple dark:text-garfield-pink hover:text-garfield-orange transition-colors"
                            >
                                {link.name}
                            </a>
                        }).collect_view()}
                    </nav>

                    // Theme toggle
                    <button
                        class="w-14 h-14 sm:w-16 sm:h-16 rounded-full bg-gradient-vaporwave p-[2px] hover:scale-110 transition-transform"
                        title=move || format!("Switch to {} mode", theme.get().toggle())
                        on:click=move |_| theme_ctx.toggle()
                    >
                        <div class="w-full h-full rounded-full bg-light-card dark:bg-dark-card flex items-center justify-center">
                            <span class="text-2xl sm:text-3xl">{move || theme.get().icon()}</span>
                        </div>
                    </button>
                </div>
            </div>
        </header>
    }
}
