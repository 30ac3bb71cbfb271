//! Meme Gallery Component
//!
//! Grid of meme cards. Clicking a card opens it in a lightbox; clicking the
//! backdrop or the close button closes it.

use leptos::*;
use web_sys::console;

use garfield_vibes::content::{card_accent, Gallery, Meme};

#[component]
pub fn MemeGallery() -> impl IntoView {
    let gallery = create_rw_signal(Gallery::new());

    let open = move |id: u32| {
        gallery.update(|g| {
            if let Err(e) = g.open(id) {
                console::error_1(&format!("Cannot open meme: {}", e).into());
            }
        });
    };
    let close = Callback::new(move |_| gallery.update(|g| g.close()));

    view! {
        <section id="memes" class="py-16 sm:py-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-4xl sm:text-5xl md:text-6xl font-bold glow-text mb-4">
                        <span class="rainbow-text">"Meme Gallery"</span>" 🖼️"
                    </h2>
                    <p class="text-lg text-garfield-purple/70 dark:text-garfield-pink/70 max-w-2xl mx-auto">
                        "The finest collection of Garfield energy on the internet. Curated for maximum vibes and minimal effort."
                    </p>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                    {gallery.with_untracked(|g| g.memes()).iter().enumerate().map(|(index, meme)| {
                        let id = meme.id;
                        view! {
                            <div on:click=move |_| open(id)>
                                <MemeCard meme=meme index=index />
                            </div>
                        }
                    }).collect_view()}
                </div>

                {move || gallery.with(|g| g.selected()).map(|meme| view! {
                    <Lightbox meme=meme on_close=close />
                })}
            </div>
        </section>
    }
}

/// Single gallery card
#[component]
fn MemeCard(meme: &'static Meme, index: usize) -> impl IntoView {
    let (loaded, set_loaded) = create_signal(false);

    view! {
        <div class="group relative cursor-pointer hover:scale-105 transition-transform">
            <div class="gradient-border card-glow">
                <div class="bg-light-card dark:bg-dark-card overflow-hidden">
                    <div class="relative aspect-square overflow-hidden">
                        <Show when=move || !loaded.get()>
                            <div class="absolute inset-0 shimmer bg-garfield-lavender/20" />
                        </Show>
                        <img
                            src=meme.url
                            alt=meme.title
                            loading="lazy"
                            class=move || format!(
                                "w-full h-full object-cover transition-all duration-500 group-hover:scale-110 {}",
                                if loaded.get() { "opacity-100" } else { "opacity-0" }
                            )
                            on:load=move |_| set_loaded.set(true)
                        />
                        <div class="absolute inset-0 bg-gradient-to-t from-dark-bg/90 via-dark-bg/50 to-transparent flex items-end p-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                            <p class="text-white text-sm font-medium">{meme.caption}</p>
                        </div>
                    </div>

                    <div class="p-4">
                        <h3 class="text-lg font-bold text-garfield-purple dark:text-garfield-pink truncate">
                            {meme.title}
                        </h3>
                        <div class="flex items-center gap-2 mt-2">
                            <span class="text-xs px-2 py-1 rounded-full bg-garfield-orange/20 text-garfield-orange">"#garfield"</span>
                            <span class="text-xs px-2 py-1 rounded-full bg-garfield-pink/20 text-garfield-pink">"#vibes"</span>
                        </div>
                    </div>
                </div>
            </div>

            <span class="absolute -top-3 -right-3 text-2xl animate-float">{card_accent(index)}</span>
        </div>
    }
}

/// Enlarged view of the selected meme
#[component]
fn Lightbox(meme: &'static Meme, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-dark-bg/90 backdrop-blur-md"
            on:click=move |_| on_close.call(())
        >
            // Clicks inside the panel must not reach the backdrop
            <div
                class="relative max-w-2xl w-full gradient-border"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="bg-light-card dark:bg-dark-card overflow-hidden">
                    <div class="relative aspect-square">
                        <img src=meme.url alt=meme.title class="w-full h-full object-cover" />
                    </div>
                    <div class="p-6">
                        <h3 class="text-2xl font-bold text-garfield-orange mb-2">{meme.title}</h3>
                        <p class="text-garfield-purple dark:text-garfield-pink">{meme.caption}</p>
                    </div>
                </div>
                <button
                    class="absolute -top-4 -right-4 w-10 h-10 rounded-full bg-garfield-pink text-white flex items-center justify-center text-xl font-bold hover:bg-garfield-hotpink transition-colors"
                    title="Close"
                    on:click=move |_| on_close.call(())
                >
                    "×"
                </button>
            </div>
        </div>
    }
}
