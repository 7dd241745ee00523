use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;
use phosphor_leptos::{Icon, ARROW_LEFT, CALENDAR_BLANK, HEART, SHARE_NETWORK};

use crate::actions;
use crate::components::blog::BlogCommentForm;
use crate::components::design_system::{
    Avatar, Badge, BadgeVariant, Button, ButtonVariant, Markdown,
};
use crate::data;
use crate::models::BlogComment;
use crate::services::notification_service::{show_error, show_info};
use crate::services::session::use_session_state;

/// Route params for the blog post page
#[derive(Params, PartialEq, Clone, Default)]
pub struct BlogPostParams {
    pub slug: Option<String>,
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params::<BlogPostParams>();
    let slug = Memo::new(move |_| params.get().ok().and_then(|p| p.slug).unwrap_or_default());

    view! {
        <div class="container mx-auto px-4 py-10">
            {move || {
                match data::blog_post_by_slug(&slug.get()) {
                    None => {
                        view! {
                            <div class="py-12 text-center text-stone-500">
                                "Post not found."
                                <A href="/blog" attr:class="block mt-2 text-purple-600 underline">
                                    "Back to the blog"
                                </A>
                            </div>
                        }
                            .into_any()
                    }
                    Some(post) => view! { <PostBody post=post /> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn PostBody(post: crate::models::BlogPostDetail) -> impl IntoView {
    let session = use_session_state();
    let comments = RwSignal::new(Vec::<BlogComment>::new());
    let likes = RwSignal::new(post.likes);

    {
        let post_id = post.id.clone();
        Effect::new(move |_| {
            let post_id = post_id.clone();
            spawn_local(async move {
                match actions::get_blog_comments(&post_id).await {
                    Ok(fetched) => comments.set(fetched),
                    Err(e) => {
                        log::error!("get_blog_comments failed: {e}");
                        show_error("Error", Some("Failed to load comments"));
                    }
                }
            });
        });
    }

    let like_post = {
        let post_id = post.id.clone();
        move |_| {
            let user = session.current_user();
            let post_id = post_id.clone();
            // Optimistic bump; no rollback if the stub call fails.
            likes.update(|n| *n += 1);
            spawn_local(async move {
                if let Err(e) = actions::like_blog_post(user.as_ref(), &post_id).await {
                    log::error!("like_blog_post failed: {e}");
                    show_error("Error", Some("Failed to like post"));
                }
            });
        }
    };

    let post_id_for_form = post.id.clone();

    view! {
        <div class="flex items-center gap-4 mb-6">
            <A href="/blog" attr:class="p-2 rounded-md text-stone-600 hover:bg-stone-100">
                <Icon icon=ARROW_LEFT size="20px" />
            </A>
            <div class="flex-1">
                <div class="flex gap-2 mb-2">
                    {post
                        .categories
                        .clone()
                        .into_iter()
                        .map(|category| view! { <Badge>{category}</Badge> })
                        .collect_view()}
                </div>
                <h1 class="text-3xl md:text-4xl font-bold tracking-tight">{post.title.clone()}</h1>
            </div>
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-4 gap-8">
            <div class="lg:col-span-3">
                <div class="aspect-video w-full overflow-hidden rounded-lg mb-6">
                    <img
                        src=post.cover_image.clone()
                        alt=post.title.clone()
                        class="h-full w-full object-cover"
                    />
                </div>

                <div class="flex items-center justify-between mb-8">
                    <div class="flex items-center gap-3">
                        <Avatar
                            name=post.author.name.clone()
                            image=post.author.image.clone()
                            size="h-10 w-10"
                        />
                        <div>
                            <div class="font-medium">{post.author.name.clone()}</div>
                            <div class="text-sm text-stone-500 flex items-center gap-1">
                                <Icon icon=CALENDAR_BLANK size="12px" />
                                {post.published_at.clone()}
                            </div>
                        </div>
                    </div>

                    <div class="flex gap-2">
                        <Button variant=ButtonVariant::Outline on_click=like_post>
                            <Icon icon=HEART size="16px" />
                            <span>{move || likes.get().to_string()}</span>
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            on_click=move |_| show_info("Share", Some("Sharing is coming soon"))
                        >
                            <Icon icon=SHARE_NETWORK size="16px" />
                            "Share"
                        </Button>
                    </div>
                </div>

                <Markdown content=post.content.clone() class="text-lg" />

                <div class="flex gap-2 mt-8">
                    {post
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <Badge variant=BadgeVariant::Outline>{format!("#{tag}")}</Badge>
                            }
                        })
                        .collect_view()}
                </div>

                <hr class="my-8 border-stone-200" />

                <div>
                    <h2 class="text-2xl font-bold mb-6">
                        {move || format!("Comments ({})", comments.get().len())}
                    </h2>

                    <BlogCommentForm post_id=post_id_for_form />

                    <div class="space-y-6 mt-8">
                        {move || {
                            comments
                                .get()
                                .into_iter()
                                .map(|comment| {
                                    view! {
                                        <div class="flex gap-4">
                                            <Avatar
                                                name=comment.user.name.clone()
                                                image=comment.user.image.clone()
                                                size="h-10 w-10"
                                            />
                                            <div class="flex-1">
                                                <div class="bg-stone-100 p-4 rounded-lg">
                                                    <div class="flex justify-between items-center mb-2">
                                                        <div class="font-medium">{comment.user.name.clone()}</div>
                                                        <div class="text-xs text-stone-500">
                                                            {comment.created_at.clone()}
                                                        </div>
                                                    </div>
                                                    <p class="text-sm">{comment.content.clone()}</p>
                                                </div>
                                                <div class="flex gap-4 mt-2 text-sm text-stone-500">
                                                    <button class="hover:text-stone-900">"Like"</button>
                                                    <button class="hover:text-stone-900">"Reply"</button>
                                                </div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>

            <div class="lg:col-span-1 space-y-6">
                <div>
                    <h3 class="font-semibold mb-3">"Related Books"</h3>
                    <div class="space-y-3">
                        {post
                            .related_books
                            .iter()
                            .map(|book| {
                                view! {
                                    <div class="flex items-center gap-3">
                                        <img
                                            src=book.cover_url.clone()
                                            alt=book.title.clone()
                                            class="h-16 w-11 object-cover rounded"
                                        />
                                        <div>
                                            <div class="text-sm font-medium line-clamp-1">
                                                {book.title.clone()}
                                            </div>
                                            <div class="text-xs text-stone-500">{book.author.clone()}</div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
