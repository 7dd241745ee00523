use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, BOOK_BOOKMARK};

use crate::actions;
use crate::components::design_system::Card;
use crate::data;
use crate::models::{AddBookParams, BookSummary};
use crate::services::notification_service::{show_error, show_success};
use crate::services::session::use_session_state;

const EXPLORE_CATEGORIES: &[&str] = &[
    "Fiction",
    "Non-Fiction",
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Biography",
    "Self-Help",
    "History",
];

#[component]
pub fn Recommendations() -> impl IntoView {
    let session = use_session_state();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.current_user().is_none() {
            navigate("/sign-in", Default::default());
        }
    });

    let books = session
        .current_user()
        .map(|user| data::recommended_books(&user.id))
        .unwrap_or_default();

    let add_to_library = move |book: BookSummary| {
        let user = session.current_user();
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
                <h1 class="text-3xl font-bold tracking-tight">"Recommended for You"</h1>
                <p class="text-stone-500">
                    "Books we think you'll enjoy based on your reading history"
                </p>
            </div>

            <div class="mt-8 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                {books
                    .into_iter()
                    .map(|book| {
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
                    })
                    .collect_view()}
            </div>

            <div class="mt-12">
                <h2 class="text-2xl font-bold tracking-tight mb-6">"Explore More Categories"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                    {EXPLORE_CATEGORIES
                        .iter()
                        .map(|category| {
                            let href = format!("/search?category={}", category.to_lowercase());
                            view! {
                                <A href=href attr:class="block">
                                    <div class="bg-stone-100 rounded-lg p-6 text-center hover:bg-stone-200 transition-colors">
                                        <h3 class="font-medium">{*category}</h3>
                                    </div>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
