//! Hero Component
//!
//! Full-height banner with floating emoji and the two call-to-action links.

use leptos::*;

/// Emoji scattered over the banner with their position classes
const FLOATING: [(&str, &str); 6] = [
    ("🐱", "top-1/4 left-1/4"),
    ("🍝", "top-1/3 right-1/4"),
    ("💤", "bottom-1/4 left-1/3"),
    ("🧡", "bottom-1/3 right-1/3"),
    ("☕", "top-1/2 left-[16%]"),
    ("📺", "top-2/3 right-[16%]"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20">
            <div class="absolute inset-0 animated-bg opacity-30 dark:opacity-20" />
            <div class="absolute inset-0 retro-grid" />

            {FLOATING.iter().enumerate().map(|(i, &(emoji, position))| view! {
                <FloatingEmoji emoji=emoji position=position delay_ms=i * 500 />
            }).collect_view()}

            <div class="relative z-10 text-center px-4 max-w-5xl mx-auto">
                <h1 class="text-5xl sm:text-7xl md:text-8xl lg:text-9xl font-bold mb-6">
                    <span class="glow-text rainbow-text">"GARFIELD"</span>
                </h1>

                <p class="text-2xl sm:text-3xl md:text-4xl font-bold text-garfield-purple dark:text-garfield-pink mb-4">
                    "✨ VIBES ✨"
                </p>

                <p class="text-lg sm:text-xl text-garfield-purple/70 dark:text-garfield-pink/70 max-w-2xl mx-auto mb-8">
                    "Your daily dose of lasagna-loving, Monday-hating, existential cat energy. Maximum aesthetic. Zero effort."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a
                        href="#memes"
                        class="px-8 py-4 rounded-full bg-gradient-vaporwave text-white font-bold text-lg shadow-neon-orange hover:shadow-neon-pink transition-shadow"
                    >
                        "Browse Memes 🖼️"
                    </a>
                    <a
                        href="#comics"
                        class="px-8 py-4 rounded-full border-2 border-garfield-pink text-garfield-pink font-bold text-lg hover:bg-garfield-pink hover:text-white transition-all"
                    >
                        "Read Comics 📰"
                    </a>
                </div>

                <div class="absolute bottom-10 left-1/2 -translate-x-1/2 animate-bounce">
                    <span class="text-3xl">"👇"</span>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FloatingEmoji(emoji: &'static str, position: &'static str, delay_ms: usize) -> impl IntoView {
    view! {
        <span
            class=format!("absolute text-4xl sm:text-5xl md:text-6xl opacity-60 pointer-events-none animate-float {}", position)
            style=format!("animation-delay: {}ms", delay_ms)
        >
            {emoji}
        </span>
    }
}
