use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use phosphor_leptos::{Icon, BOOK, BOOK_BOOKMARK};

use crate::actions;
use crate::components::design_system::{Button, Card, Input};
use crate::models::{AddBookParams, BookSummary};
use crate::services::notification_service::{show_error, show_success};
use crate::services::session::use_session_state;

/// Search page: query the stub catalog and add results to the library.
#[component]
pub fn BookSearch() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let books = RwSignal::new(Vec::<BookSummary>::new());
    let loading = RwSignal::new(false);
    let session = use_session_state();

    let run_search = move || {
        let q = query.get();
        if q.trim().is_empty() {
            return;
        }

        loading.set(true);
        spawn_local(async move {
            match actions::search_books(&q).await {
                Ok(results) => books.set(results),
                Err(e) => {
                    log::error!("search_books failed: {e}");
                    show_error("Error", Some("Failed to search books"));
                }
            }
            loading.set(false);
        });
    };

    let on_keydown = Callback::new(move |e: ev::KeyboardEvent| {
        if e.key() == "Enter" {
            run_search();
        }
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
        <div class="container mx-auto px-4 py-10">
            <div>
                <h1 class="text-3xl font-bold tracking-tight">"Search Books"</h1>
                <p class="text-stone-500">"Find books and add them to your library"</p>
            </div>

            <div class="mt-6 space-y-6">
                <div class="flex gap-2">
                    <div class="max-w-md flex-1">
                        <Input
                            value=query
                            placeholder="Search by title, author, or ISBN..."
                            on_keydown=on_keydown
                        />
                    </div>
                    <Button on_click=move |_| run_search() loading=Signal::derive(move || loading.get())>
                        {move || if loading.get() { "Searching..." } else { "Search" }}
                    </Button>
                </div>

                <Show
                    when=move || !books.get().is_empty() || loading.get()
                    fallback=|| {
                        view! {
                            <div class="flex flex-col items-center justify-center py-12 text-center">
                                <span class="text-stone-400 mb-4">
                                    <Icon icon=BOOK size="48px" />
                                </span>
                                <h3 class="text-lg font-medium">"No books found"</h3>
                                <p class="text-stone-500 mt-1">
                                    "Try searching for a book title, author, or ISBN"
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
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
                                            <p class="text-xs text-stone-400 mt-1">{book.genre.clone()}</p>
                                        </div>
                                    </Card>
                                }
                            }
                        </For>
                    </div>
                </Show>
            </div>
        </div>
    }
}
