use leptos::prelude::*;
use leptos_router::components::A;
use phosphor_leptos::{Icon, BOOK_OPEN};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full border-t border-stone-200 bg-white">
            <div class="container mx-auto px-4 flex flex-col items-center justify-between gap-4 py-10 md:h-24 md:flex-row md:py-0">
                <div class="flex items-center gap-2">
                    <span class="text-purple-600">
                        <Icon icon=BOOK_OPEN size="24px" />
                    </span>
                    <p class="text-center text-sm leading-loose md:text-left">
                        "© 2023 BookNook. All rights reserved."
                    </p>
                </div>
                <div class="flex gap-4">
                    <A href="/terms" attr:class="text-sm text-stone-500 underline underline-offset-4">
                        "Terms"
                    </A>
                    <A href="/privacy" attr:class="text-sm text-stone-500 underline underline-offset-4">
                        "Privacy"
                    </A>
                    <A href="/about" attr:class="text-sm text-stone-500 underline underline-offset-4">
                        "About"
                    </A>
                </div>
            </div>
        </footer>
    }
}
