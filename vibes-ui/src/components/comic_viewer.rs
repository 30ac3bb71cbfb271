//! Comic Viewer Component
//!
//! "Get Random Comic" button, the current strip, and the fun facts row.

use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use leptos::*;

use garfield_vibes::content::{Comic, ComicArchive, ComicDisplay, ComicViewer as ViewerState, FUN_FACTS};

use super::loading::{ComicSkeleton, Spinner};
use crate::state::BrowserRandom;

const COPYRIGHT: &str = "© Paws, Inc. • Jim Davis";

#[component]
pub fn ComicViewer() -> impl IntoView {
    let viewer = create_rw_signal(ViewerState::new());
    let archive = store_value(ComicArchive::default());

    let fetch_comic = move |_| {
        if viewer.with_untracked(|v| v.is_loading()) {
            return;
        }
        viewer.update(|v| v.begin());

        spawn_local(async move {
            // Let the loading state paint before drawing
            TimeoutFuture::new(0).await;

            let today = Local::now().date_naive();
            let result = archive
                .get_value()
                .fetch_random(&mut BrowserRandom, today)
                .await;
            viewer.update(|v| v.finish(result));
        });
    };

    let is_loading = move || viewer.with(|v| v.is_loading());

    view! {
        <section id="comics" class="py-16 sm:py-24 relative overflow-hidden">
            <div class="absolute inset-0 retro-grid opacity-50" />
            <div class="absolute top-20 left-10 text-6xl opacity-20 animate-spin-slow">"🐱"</div>
            <div class="absolute bottom-20 right-10 text-6xl opacity-20 animate-spin-slow">"🍝"</div>

            <div class="relative max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-4xl sm:text-5xl md:text-6xl font-bold glow-text mb-4">
                        <span class="rainbow-text">"Random Comic"</span>" 📰"
                    </h2>
                    <p class="text-lg text-garfield-purple/70 dark:text-garfield-pink/70 max-w-2xl mx-auto mb-8">
                        "Spin the wheel of Garfield destiny! Every click reveals a classic strip from the archives (1978 - present)."
                    </p>

                    <button
                        class="relative px-8 py-4 rounded-full bg-gradient-vaporwave text-white font-bold text-lg shadow-neon-pink disabled:opacity-50"
                        disabled=is_loading
                        on:click=fetch_comic
                    >
                        <span class="relative flex items-center gap-2">
                            {move || if is_loading() {
                                view! { <Spinner />" Loading..." }.into_view()
                            } else {
                                view! { <span class="text-xl">"🎲"</span>" Get Random Comic" }.into_view()
                            }}
                        </span>
                    </button>
                </div>

                {move || viewer.with(|v| match v.display() {
                    ComicDisplay::Loading => view! { <ComicSkeleton /> }.into_view(),
                    ComicDisplay::Failed(message) => view! {
                        <div class="text-center py-8">
                            <p class="text-red-500 dark:text-red-400 text-lg">"😿 " {message.to_string()}</p>
                        </div>
                    }.into_view(),
                    ComicDisplay::Showing(comic) => view! { <ComicCard comic=comic.clone() /> }.into_view(),
                    ComicDisplay::Empty => view! {
                        <div class="text-center py-16">
                            <div class="text-8xl mb-6 animate-pulse">"🐱"</div>
                            <p class="text-xl text-garfield-purple/60 dark:text-garfield-pink/60">
                                "Click the button above to discover a random Garfield comic!"
                            </p>
                        </div>
                    }.into_view(),
                })}

                <div class="mt-16 grid grid-cols-1 sm:grid-cols-3 gap-6">
                    {FUN_FACTS.iter().map(|fact| view! {
                        <div class="text-center p-6 rounded-2xl bg-light-card/50 dark:bg-dark-card/50 backdrop-blur-sm border border-garfield-pink/20">
                            <span class="text-4xl mb-2 block">{fact.emoji}</span>
                            <p class="text-3xl font-bold text-garfield-orange mb-1">{fact.stat}</p>
                            <p class="text-garfield-purple/70 dark:text-garfield-pink/70">{fact.label}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}

/// The drawn strip with its date badge and credit line
#[component]
fn ComicCard(comic: Comic) -> impl IntoView {
    let long_date = comic.long_date();

    view! {
        <div class="gradient-border card-glow">
            <div class="bg-light-card dark:bg-dark-card overflow-hidden">
                <div class="p-4 sm:p-6 border-b border-garfield-pink/20">
                    <div class="flex items-center justify-between flex-wrap gap-2">
                        <h3 class="text-xl sm:text-2xl font-bold text-garfield-orange">{comic.title.clone()}</h3>
                        <span class="px-3 py-1 rounded-full bg-garfield-purple/20 text-garfield-purple dark:text-garfield-lavender text-sm">
                            "📅 " {long_date}
                        </span>
                    </div>
                </div>

                <div class="relative aspect-[3/1] bg-white">
                    <img src=comic.image_url.clone() alt=comic.title.clone() class="w-full h-full object-cover" />
                </div>

                <div class="p-4 sm:p-6 flex items-center justify-between flex-wrap gap-4">
                    <div class="flex items-center gap-4 text-2xl">
                        <span title="Love it!">"💖"</span>
                        <span title="Share">"🔗"</span>
                        <span title="Save">"💾"</span>
                    </div>
                    <p class="text-sm text-garfield-purple/60 dark:text-garfield-pink/60">{COPYRIGHT}</p>
                </div>
            </div>
        </div>
    }
}
