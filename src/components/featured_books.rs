use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use phosphor_leptos::{Icon, BOOK_BOOKMARK};

use crate::actions;
use crate::components::design_system::{Card, Skeleton};
use crate::data;
use crate::models::{AddBookParams, BookSummary};
use crate::services::notification_service::{show_error, show_success};
use crate::services::session::use_session_state;

/// Featured grid on the landing page. Simulates a 1 s fetch with
/// skeleton placeholders, then offers hover add-to-library.
#[component]
pub fn FeaturedBooks() -> impl IntoView {
    let books = RwSignal::new(Vec::<BookSummary>::new());
    let loading = RwSignal::new(true);
    let session = use_session_state();

    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(1000).await;
            books.set(data::featured_books());
            loading.set(false);
        });
    });

    let add_to_library = move |book: BookSummary| {
        let user = session.current_user();
        if user.is_none() {
            show_error(
                "Sign in required",
                Some("Please sign in to add books to your library"),
            );
            return;
        }

        spawn_local(async move {
            let params = AddBookParams {
                book_id: book.id.clone(),
                title: book.title.clone(),
                author: book.author.clone(),
                cover_url: book.cover_url.clone(),
                genre: book.genre.clone(),
                tags: vec!["non-purchased".to_string()],
                custom_category: None,
            };
            match actions::add_book_to_library(user.as_ref(), params).await {
                Ok(()) => show_success(
                    "Book added",
                    Some(&format!("{} has been added to your library", book.title)),
                ),
                Err(e) => {
                    log::error!("add_book_to_library failed: {e}");
                    show_error("Error", Some("Failed to add book to library"));
                }
            }
        });
    };

    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-6 mt-8">
            <Show
                when=move || !loading.get()
                fallback=|| {
                    (0..4)
                        .map(|_| {
                            view! {
                                <Card>
                                    <Skeleton class="h-64 w-full rounded-none" />
                                    <div class="p-4 space-y-2">
                                        <Skeleton class="h-4 w-3/4" />
                                        <Skeleton class="h-4 w-1/2" />
                                    </div>
                                </Card>
                            }
                        })
                        .collect_view()
                }
            >
                <For each=move || books.get() key=|book| book.id.clone() let:book>
                    {
                        let book_for_add = book.clone();
                        view! {
                            <Card class="group">
                                <div class="relative">
                                        <img
                                            src=book.cover_url.clone()
                                            alt=book.title.clone()
                                            class="h-64 w-full object-cover transition-transform duration-300 group-hover:scale-105"
                                        />
                                        <div class="absolute inset-0 bg-gradient-to-t from-black/70 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-end">
                                            <div class="p-4 w-full">
                                                <button
                                                    class="w-full inline-flex items-center justify-center gap-2 py-2 rounded-md text-sm font-medium bg-gradient-to-r from-purple-600 to-pink-600 text-white hover:from-purple-700 hover:to-pink-700"
                                                    on:click=move |_| add_to_library(book_for_add.clone())
                                                >
                                                    <Icon icon=BOOK_BOOKMARK size="16px" />
                                                    "Add to Library"
                                                </button>
                                            </div>
                                        </div>
                                    </div>
                                <div class="p-4">
                                    <h3 class="font-semibold line-clamp-1">{book.title.clone()}</h3>
                                    <p class="text-sm text-stone-500">{book.author.clone()}</p>
                                </div>
                            </Card>
                        }
                    }
                </For>
            </Show>
        </div>
    }
}
