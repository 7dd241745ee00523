//! Library page: genre tabs over the user's book collection, with the
//! tag/search filter view and the optimistic mutation handlers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, BOOK_OPEN, FUNNEL, PLUS, TAG, TRASH};

use crate::actions::{self, TagAction};
use crate::components::design_system::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, Dropdown, DropdownItem, Input, Modal,
    TabList, TabPanel,
};
use crate::data;
use crate::models::Book;
use crate::services::library_filter::{self, FilterState, GenreTab, AVAILABLE_TAGS};
use crate::services::notification_service::{show_error, show_success};
use crate::services::session::use_session_state;

/// Tags offered in the top-bar filter dropdown.
const FILTER_MENU_TAGS: &[&str] = &["purchased", "non-purchased", "reading", "completed", "wishlist"];

#[component]
pub fn Library() -> impl IntoView {
    let session = use_session_state();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.current_user().is_none() {
            navigate("/sign-in", Default::default());
        }
    });

    // The page is only reachable signed-in, so the library loads once at
    // construction; each tab view keeps its own optimistic copy.
    let books = session
        .current_user()
        .map(|user| data::user_library(&user.id))
        .unwrap_or_default();

    let active_tab = RwSignal::new(GenreTab::All.as_str().to_string());
    let tabs: Vec<(String, String)> = GenreTab::all_tabs()
        .iter()
        .map(|tab| (tab.as_str().to_string(), tab.label().to_string()))
        .collect();

    view! {
        <div class="container mx-auto px-4 py-10">
            <div>
                <h1 class="text-3xl font-bold tracking-tight">"My Library"</h1>
                <p class="text-stone-500">"Manage and organize your book collection"</p>
            </div>

            <div class="mt-6">
                <TabList tabs=tabs active=active_tab class="mb-4" />
                {GenreTab::all_tabs()
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        let books = books.clone();
                        view! {
                            <TabPanel value=tab.as_str() active=active_tab>
                                <LibraryView tab=tab books=books.clone() />
                            </TabPanel>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// The filterable book grid for one genre tab.
///
/// Holds its own copy of the book list: mutations apply to it
/// immediately and are never rolled back when the remote call fails
/// (failures surface as toasts only). Filter state is transient - it
/// dies with the view on tab switch or navigation.
#[component]
fn LibraryView(tab: GenreTab, books: Vec<Book>) -> impl IntoView {
    let local_books = RwSignal::new(books);
    let tag_filter = RwSignal::new(Option::<String>::None);
    let search_query = RwSignal::new(String::new());
    let new_category = RwSignal::new(String::new());
    let open_category_dialog = RwSignal::new(false);
    let session = use_session_state();

    let displayed = Memo::new(move |_| {
        let state = FilterState {
            tab,
            tag_filter: tag_filter.get(),
            search_query: search_query.get(),
        };
        library_filter::filter(&local_books.get(), &state)
    });

    let toggle_tag_filter = move |tag: String| {
        tag_filter.update(|current| *current = library_filter::toggle_tag(current.take(), &tag));
    };

    let handle_add_tag = move |book_id: String, tag: String| {
        local_books.update(|list| {
            if let Some(book) = list.iter_mut().find(|b| b.id == book_id) {
                book.add_tag(&tag);
            }
        });

        let user = session.current_user();
        spawn_local(async move {
            match actions::update_book_tags(user.as_ref(), &book_id, &tag, TagAction::Add).await {
                Ok(()) => show_success("Tag added", Some(&format!("Added \"{tag}\" tag to book"))),
                Err(e) => {
                    log::error!("update_book_tags failed: {e}");
                    show_error("Error", Some("Failed to add tag"));
                }
            }
        });
    };

    let handle_remove_tag = move |book_id: String, tag: String| {
        local_books.update(|list| {
            if let Some(book) = list.iter_mut().find(|b| b.id == book_id) {
                book.remove_tag(&tag);
            }
        });

        let user = session.current_user();
        spawn_local(async move {
            match actions::update_book_tags(user.as_ref(), &book_id, &tag, TagAction::Remove).await
            {
                Ok(()) => {
                    show_success("Tag removed", Some(&format!("Removed \"{tag}\" tag from book")))
                }
                Err(e) => {
                    log::error!("update_book_tags failed: {e}");
                    show_error("Error", Some("Failed to remove tag"));
                }
            }
        });
    };

    let handle_remove_book = move |book_id: String| {
        local_books.update(|list| list.retain(|b| b.id != book_id));

        let user = session.current_user();
        spawn_local(async move {
            match actions::remove_book_from_library(user.as_ref(), &book_id).await {
                Ok(()) => show_success(
                    "Book removed",
                    Some("Book has been removed from your library"),
                ),
                Err(e) => {
                    log::error!("remove_book_from_library failed: {e}");
                    show_error("Error", Some("Failed to remove book"));
                }
            }
        });
    };

    let handle_create_category = move |_| {
        let name = new_category.get();
        if name.trim().is_empty() {
            show_error("Error", Some("Category name cannot be empty"));
            return;
        }

        let user = session.current_user();
        spawn_local(async move {
            match actions::create_custom_category(user.as_ref(), &name).await {
                Ok(()) => {
                    show_success("Category created", Some(&format!("Created \"{name}\" category")));
                    new_category.set(String::new());
                    open_category_dialog.set(false);
                }
                Err(e) => {
                    log::error!("create_custom_category failed: {e}");
                    show_error("Error", Some("Failed to create category"));
                }
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
                <div class="flex items-center gap-2">
                    <div class="max-w-sm flex-1">
                        <Input value=search_query placeholder="Search books..." />
                    </div>
                    <Dropdown trigger=|| {
                        view! { <Icon icon=FUNNEL size="16px" /> }.into_any()
                    }>
                        <DropdownItem on_select=Callback::new(move |_| tag_filter.set(None))>
                            "All Tags"
                        </DropdownItem>
                        {FILTER_MENU_TAGS
                            .iter()
                            .map(|tag| {
                                let tag = tag.to_string();
                                let label = capitalize(&tag);
                                view! {
                                    <DropdownItem on_select=Callback::new(move |_| {
                                        toggle_tag_filter(tag.clone())
                                    })>{label}</DropdownItem>
                                }
                            })
                            .collect_view()}
                    </Dropdown>
                </div>

                {(tab == GenreTab::Custom)
                    .then(|| {
                        view! {
                            <Button on_click=move |_| open_category_dialog.set(true)>
                                <Icon icon=PLUS size="16px" />
                                "New Category"
                            </Button>
                        }
                    })}
            </div>

            <Modal
                open=open_category_dialog
                title="Create New Category"
                description="Add a custom category to organize your books"
            >
                <div class="grid gap-2 py-2">
                    <label class="text-sm font-medium" for="category-name">
                        "Category Name"
                    </label>
                    <Input
                        value=new_category
                        placeholder="e.g., Favorites, Summer Reading"
                    />
                </div>
                <div class="flex justify-end mt-4">
                    <Button on_click=handle_create_category>"Create Category"</Button>
                </div>
            </Modal>

            <Show when=move || tag_filter.get().is_some()>
                <div class="flex items-center gap-2">
                    <span class="text-sm text-stone-500">"Filtered by:"</span>
                    <Badge class="capitalize">
                        {move || tag_filter.get().unwrap_or_default()}
                    </Badge>
                    <Button variant=ButtonVariant::Ghost on_click=move |_| tag_filter.set(None)>
                        "Clear"
                    </Button>
                </div>
            </Show>

            <Show
                when=move || !displayed.get().is_empty()
                fallback=move || {
                    view! {
                        <div class="flex flex-col items-center justify-center py-12 text-center">
                            <span class="text-stone-400 mb-4">
                                <Icon icon=BOOK_OPEN size="48px" />
                            </span>
                            <h3 class="text-lg font-medium">"No books found"</h3>
                            <p class="text-stone-500 mt-1">
                                {if tab != GenreTab::All {
                                    "Try changing your filter or add books to this category"
                                } else {
                                    "Add books to your library from the search page"
                                }}
                            </p>
                        </div>
                    }
                }
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-6">
                    // Composite key: a tag mutation must re-render the card
                    <For
                        each=move || displayed.get()
                        key=|book| (book.id.clone(), book.tags.join(","))
                        let:book
                    >
                        <LibraryBookCard
                            book=book
                            on_add_tag=Callback::new(move |(id, tag)| handle_add_tag(id, tag))
                            on_remove_tag=Callback::new(move |(id, tag)| handle_remove_tag(id, tag))
                            on_remove_book=Callback::new(handle_remove_book)
                        />
                    </For>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn LibraryBookCard(
    book: Book,
    #[prop(into)] on_add_tag: Callback<(String, String)>,
    #[prop(into)] on_remove_tag: Callback<(String, String)>,
    #[prop(into)] on_remove_book: Callback<String>,
) -> impl IntoView {
    let book_id = book.id.clone();
    let book_tags = book.tags.clone();

    view! {
        <Card class="flex flex-col">
            <div class="relative aspect-[2/3] overflow-hidden">
                <img
                    src=book.cover_url.clone()
                    alt=book.title.clone()
                    class="object-cover w-full h-full"
                />
            </div>
            <div class="p-4 flex-grow">
                <h3 class="font-semibold line-clamp-1">{book.title.clone()}</h3>
                <p class="text-sm text-stone-500">{book.author.clone()}</p>
                <div class="mt-2 flex flex-wrap gap-1">
                    {book
                        .tags
                        .clone()
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <Badge variant=BadgeVariant::Outline class="capitalize text-xs">
                                    {tag}
                                </Badge>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="p-4 pt-0 flex justify-between items-center">
                <Dropdown trigger=|| {
                    view! {
                        <Icon icon=TAG size="16px" />
                        " Tags"
                    }
                        .into_any()
                }>
                    {AVAILABLE_TAGS
                        .iter()
                        .map(|tag| {
                            let tag = tag.to_string();
                            let has_tag = book_tags.iter().any(|t| t == &tag);
                            let label = if has_tag {
                                format!("Remove {tag}")
                            } else {
                                format!("Add {tag}")
                            };
                            let id = book_id.clone();
                            view! {
                                <DropdownItem on_select=Callback::new(move |_| {
                                    if has_tag {
                                        on_remove_tag.run((id.clone(), tag.clone()));
                                    } else {
                                        on_add_tag.run((id.clone(), tag.clone()));
                                    }
                                })>{label}</DropdownItem>
                            }
                        })
                        .collect_view()}
                </Dropdown>
                {
                    let id = book.id.clone();
                    view! {
                        <Button
                            variant=ButtonVariant::Ghost
                            on_click=move |_| on_remove_book.run(id.clone())
                        >
                            <Icon icon=TRASH size="16px" />
                            "Remove"
                        </Button>
                    }
                }
            </div>
        </Card>
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
