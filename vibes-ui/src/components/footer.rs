//! Footer Component
//!
//! Wisdom quote with a refresh button, about blurb, quick links, and the
//! bottom bar with the current year.

use chrono::{Datelike, Local};
use leptos::*;
use web_sys::console;

use garfield_vibes::content::{WisdomBoard, NAV_LINKS};

use crate::state::BrowserRandom;

#[component]
pub fn Footer() -> impl IntoView {
    let board = create_rw_signal(WisdomBoard::new());

    let refresh = move || {
        board.update(|b| {
            if let Err(e) = b.refresh(&mut BrowserRandom) {
                console::error_1(&format!("No wisdom today: {}", e).into());
            }
        });
    };

    // First quote is drawn after mount
    create_effect(move |_| refresh());

    view! {
        <footer id="about" class="relative bg-gradient-to-t from-black via-garfield-purple/20 to-transparent pt-16 pb-8">
            <div class="absolute inset-0 retro-grid opacity-20 pointer-events-none" />

            <div class="container mx-auto px-4 relative z-10">
                <div class="text-center mb-12">
                    <h3 class="text-2xl font-bold text-garfield-pink mb-4 font-comic">
                        "🐱 Garfield's Wisdom 🐱"
                    </h3>
                    <blockquote class="text-xl md:text-2xl italic text-garfield-orange font-comic max-w-2xl mx-auto">
                        "\u{201c}" {move || board.with(|b| b.display())} "\u{201d}"
                    </blockquote>
                    <button
                        class="mt-4 px-4 py-2 bg-garfield-orange/20 border border-garfield-orange rounded-full text-garfield-orange hover:bg-garfield-orange hover:text-black transition-colors font-comic"
                        on:click=move |_| refresh()
                    >
                        "✨ More Wisdom ✨"
                    </button>
                </div>

                <div class="grid md:grid-cols-3 gap-8 mb-12">
                    <div class="text-center md:text-left">
                        <h4 class="text-xl font-bold text-garfield-cyan mb-3 font-comic">"About"</h4>
                        <p class="text-gray-400 leading-relaxed">
                            "A Y2K/vaporwave tribute to the world's most relatable cat. Celebrating laziness, lasagna, and the eternal hatred of Mondays since 1978."
                        </p>
                    </div>

                    <div class="text-center">
                        <h4 class="text-xl font-bold text-garfield-cyan mb-3 font-comic">"Quick Links"</h4>
                        <ul class="space-y-2">
                            {NAV_LINKS.iter().map(|link| view! {
                                <li>
                                    <a href=link.href class="text-gray-400 hover:text-garfield-pink transition-colors">
                                        {link.name}
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </div>

                    <div class="text-center md:text-right">
                        <h4 class="text-xl font-bold text-garfield-cyan mb-3 font-comic">"Vibes Only"</h4>
                        <div class="text-3xl space-x-2">
                            {["🍝", "😴", "🐱", "💜", "✨"].into_iter().map(|emoji| view! {
                                <span class="hover:animate-bounce inline-block cursor-pointer">{emoji}</span>
                            }).collect_view()}
                        </div>
                        <p class="text-gray-500 text-sm mt-3">"No Mondays allowed"</p>
                    </div>
                </div>

                <div class="border-t border-garfield-purple/30 pt-6 text-center">
                    <p class="text-gray-500 text-sm font-comic">{bottom_line(Local::now().year())}</p>
                    <p class="text-gray-600 text-xs mt-2">"Garfield © Paws, Inc. This is a fan tribute site."</p>
                </div>
            </div>
        </footer>
    }
}

fn bottom_line(year: i32) -> String {
    format!("Made with 🧡 and lots of lasagna • {}", year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_line_includes_year() {
        assert_eq!(
            bottom_line(2026),
            "Made with 🧡 and lots of lasagna • 2026"
        );
    }
}
