//! Discussion Groups
//!
//! # Components
//! - `Discussions` - group list with the create-discussion modal
//! - `DiscussionDetail` - single group: chat/about tabs + member roster
//! - `ChatInterface` - the polled chat feed

mod chat_interface;
mod detail;

pub use chat_interface::ChatInterface;
pub use detail::DiscussionDetail;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, BOOK_OPEN, CHAT_CIRCLE, PLUS, USERS};

use crate::actions;
use crate::components::design_system::{
    Badge, BadgeVariant, Button, Card, CardBody, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, Modal, Select, SelectOption, Textarea,
};
use crate::data;
use crate::models::NewDiscussion;
use crate::services::notification_service::{show_error, show_success};
use crate::services::session::use_session_state;

#[component]
pub fn Discussions() -> impl IntoView {
    let session = use_session_state();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.current_user().is_none() {
            navigate("/sign-in", Default::default());
        }
    });

    let groups = data::discussion_groups();
    let open_create_dialog = RwSignal::new(false);

    // Presentational search/sort row, matching the source page
    let search = RwSignal::new(String::new());
    let sort_by = RwSignal::new("all".to_string());

    view! {
        <div class="container mx-auto px-4 py-10">
            <div class="flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
                <div>
                    <h1 class="text-3xl font-bold tracking-tight">"Book Discussions"</h1>
                    <p class="text-stone-500">
                        "Join conversations about your favorite books with other readers"
                    </p>
                </div>
                <Button on_click=move |_| open_create_dialog.set(true)>
                    <Icon icon=PLUS size="16px" />
                    "Create Discussion"
                </Button>
            </div>

            <CreateDiscussionModal open=open_create_dialog />

            <div class="mt-6">
                <div class="flex items-center gap-2 mb-4">
                    <div class="max-w-sm flex-1">
                        <Input value=search placeholder="Search discussions..." />
                    </div>
                    <Select
                        value=sort_by
                        options=vec![
                            SelectOption::new("all", "All Discussions"),
                            SelectOption::new("my-discussions", "My Discussions"),
                            SelectOption::new("active", "Most Active"),
                            SelectOption::new("recent", "Recently Created"),
                        ]
                    />
                </div>

                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {groups
                        .into_iter()
                        .map(|group| {
                            let href = format!("/discussions/{}", group.id);
                            view! {
                                <A href=href attr:class="block h-full">
                                    <Card class="h-full transition-shadow hover:shadow-md">
                                        <CardHeader>
                                            <div class="flex justify-between items-start gap-2">
                                                <CardTitle class="line-clamp-1">
                                                    {group.title.clone()}
                                                </CardTitle>
                                                {group
                                                    .is_private
                                                    .then(|| {
                                                        view! {
                                                            <Badge variant=BadgeVariant::Outline>"Private"</Badge>
                                                        }
                                                    })}
                                            </div>
                                            <CardDescription class="line-clamp-2 mt-1">
                                                {group.description.clone()}
                                            </CardDescription>
                                        </CardHeader>
                                        <CardBody>
                                            <div class="flex items-center gap-1 text-sm text-stone-500">
                                                <Icon icon=BOOK_OPEN size="16px" />
                                                <span class="line-clamp-1">{group.book.clone()}</span>
                                            </div>
                                        </CardBody>
                                        <CardFooter class="flex justify-between">
                                            <div class="flex items-center gap-1 text-sm text-stone-500">
                                                <Icon icon=USERS size="16px" />
                                                <span>{format!("{} members", group.member_count)}</span>
                                            </div>
                                            <div class="flex items-center gap-1 text-sm text-stone-500">
                                                <Icon icon=CHAT_CIRCLE size="16px" />
                                                <span>{format!("{} messages", group.message_count)}</span>
                                            </div>
                                        </CardFooter>
                                    </Card>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn CreateDiscussionModal(#[prop(into)] open: RwSignal<bool>) -> impl IntoView {
    let session = use_session_state();
    let title = RwSignal::new(String::new());
    let book = RwSignal::new("midnight-library".to_string());
    let description = RwSignal::new(String::new());
    let visibility = RwSignal::new("public".to_string());

    let handle_create = move |_| {
        let name = title.get();
        if name.trim().is_empty() {
            show_error("Error", Some("Discussion title cannot be empty"));
            return;
        }

        let user = session.current_user();
        let payload = NewDiscussion {
            title: name,
            description: description.get(),
            book: book.get(),
            is_private: visibility.get() == "private",
        };
        spawn_local(async move {
            match actions::create_discussion(user.as_ref(), payload).await {
                Ok(_id) => {
                    show_success("Discussion created", Some("Other readers can now join in"));
                    title.set(String::new());
                    description.set(String::new());
                    open.set(false);
                }
                Err(e) => {
                    log::error!("create_discussion failed: {e}");
                    show_error("Error", Some("Failed to create discussion"));
                }
            }
        });
    };

    view! {
        <Modal
            open=open
            title="Create a New Discussion"
            description="Start a conversation about a book with other readers"
        >
            <div class="grid gap-4 py-2">
                <div class="grid gap-2">
                    <label class="text-sm font-medium">"Discussion Title"</label>
                    <Input value=title placeholder="Enter a title for your discussion" />
                </div>
                <div class="grid gap-2">
                    <label class="text-sm font-medium">"Book"</label>
                    <Select
                        value=book
                        options=vec![
                            SelectOption::new("midnight-library", "The Midnight Library"),
                            SelectOption::new("atomic-habits", "Atomic Habits"),
                            SelectOption::new("project-hail-mary", "Project Hail Mary"),
                            SelectOption::new("addie-larue", "The Invisible Life of Addie LaRue"),
                            SelectOption::new("other", "Other (specify below)"),
                        ]
                        class="w-full"
                    />
                </div>
                <div class="grid gap-2">
                    <label class="text-sm font-medium">"Description"</label>
                    <Textarea
                        value=description
                        placeholder="What would you like to discuss about this book?"
                        rows=3
                    />
                </div>
                <div class="grid gap-2">
                    <label class="text-sm font-medium">"Visibility"</label>
                    <Select
                        value=visibility
                        options=vec![
                            SelectOption::new("public", "Public (Anyone can join)"),
                            SelectOption::new("private", "Private (Invitation only)"),
                        ]
                        class="w-full"
                    />
                </div>
                <div class="flex justify-end">
                    <Button on_click=handle_create>"Create Discussion"</Button>
                </div>
            </div>
        </Modal>
    }
}
