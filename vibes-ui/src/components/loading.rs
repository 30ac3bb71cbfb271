//! Loading Component
//!
//! Spinner and skeleton states for the comic viewer.

use leptos::*;

/// Inline spinner for buttons
#[component]
pub fn Spinner(#[prop(default = "🎰")] glyph: &'static str) -> impl IntoView {
    view! {
        <span class="inline-block animate-spin">{glyph}</span>
    }
}

/// Placeholder shown in the comic frame while a strip is drawn
#[component]
pub fn ComicSkeleton() -> impl IntoView {
    view! {
        <div class="bg-light-card dark:bg-dark-card rounded-3xl p-6 animate-pulse">
            <div class="h-6 bg-garfield-pink/20 rounded w-1/3 mb-4" />
            <div class="aspect-[3/1] bg-garfield-pink/20 rounded-xl" />
        </div>
    }
}
