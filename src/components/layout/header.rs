use leptos::prelude::*;
use leptos_router::components::A;
use phosphor_leptos::{Icon, BOOK_OPEN};

use crate::components::design_system::{Avatar, Button, ButtonVariant};
use crate::services::session::use_session_state;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/search", "Search"),
    ("/library", "My Library"),
    ("/discussions", "Discussions"),
    ("/blog", "Blog"),
    ("/reading-challenges", "Challenges"),
    ("/recommendations", "For You"),
];

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session_state();

    view! {
        <header class="sticky top-0 z-30 w-full border-b border-stone-200 bg-white/95 backdrop-blur">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between gap-4">
                <A href="/" attr:class="flex items-center gap-2 font-bold text-lg">
                    <span class="text-purple-600">
                        <Icon icon=BOOK_OPEN size="24px" />
                    </span>
                    "BookNook"
                </A>

                <nav class="hidden md:flex items-center gap-1">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <A
                                    href=*href
                                    attr:class="px-3 py-2 rounded-md text-sm font-medium text-stone-600 hover:text-stone-900 hover:bg-stone-100"
                                >
                                    {*label}
                                </A>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="flex items-center gap-3">
                    {move || {
                        match session.current_user() {
                            Some(user) => {
                                view! {
                                    <div class="flex items-center gap-2">
                                        <Avatar name=user.name.clone() image=user.image.clone() />
                                        <span class="hidden sm:inline text-sm text-stone-600">
                                            {user.name.clone()}
                                        </span>
                                        <Button
                                            variant=ButtonVariant::Ghost
                                            on_click=move |_| session.sign_out()
                                        >
                                            "Sign Out"
                                        </Button>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <A
                                        href="/sign-in"
                                        attr:class="px-4 py-2 rounded-md text-sm font-medium bg-purple-600 text-white hover:bg-purple-700"
                                    >
                                        "Sign In"
                                    </A>
                                }
                                    .into_any()
                            }
                        }
                    }}
                </div>
            </div>
        </header>
    }
}
