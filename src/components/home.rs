use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::featured_books::FeaturedBooks;

/// Landing page: hero plus the featured-books grid.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-10">
            <section class="py-12 md:py-20 text-center">
                <h1 class="text-4xl md:text-5xl font-bold tracking-tight">
                    "Your Personal " <span class="text-purple-600">"Virtual Library"</span>
                </h1>
                <p class="mt-4 max-w-2xl mx-auto text-lg text-stone-500">
                    "Build your virtual bookshelf, organize your collection, and track your reading journey all in one place."
                </p>
                <div class="mt-8 flex justify-center gap-3">
                    <A
                        href="/search"
                        attr:class="px-6 py-3 rounded-md font-medium bg-gradient-to-r from-purple-600 to-pink-600 text-white hover:from-purple-700 hover:to-pink-700"
                    >
                        "Start Exploring"
                    </A>
                    <A
                        href="/library"
                        attr:class="px-6 py-3 rounded-md font-medium border border-stone-300 text-stone-700 hover:bg-stone-50"
                    >
                        "My Library"
                    </A>
                </div>
            </section>

            <section>
                <h2 class="text-2xl font-bold tracking-tight">"Featured Books"</h2>
                <FeaturedBooks />
            </section>
        </div>
    }
}
