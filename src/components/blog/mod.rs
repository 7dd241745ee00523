//! Blog
//!
//! # Components
//! - `Blog` - post list with featured categories
//! - `BlogPostPage` - full post with markdown body and comments
//! - `BlogCreate` - authoring page wrapping the markdown editor
//! - `BlogEditor` - toolbar-driven markdown textarea
//! - `BlogCommentForm` - session-gated comment box

mod comment_form;
mod create;
mod editor;
mod post;

pub use comment_form::BlogCommentForm;
pub use create::BlogCreate;
pub use editor::BlogEditor;
pub use post::BlogPostPage;

use leptos::prelude::*;
use leptos_router::components::A;
use phosphor_leptos::{Icon, BOOK_OPEN, CALENDAR_BLANK, CHAT_CIRCLE, PLUS};

use crate::components::design_system::{
    Avatar, Badge, Card, CardBody, CardDescription, CardFooter, CardHeader, CardTitle, Input,
    Select, SelectOption,
};
use crate::data;

const FEATURED_CATEGORIES: &[(&str, u32)] = &[
    ("Book Reviews", 42),
    ("Reading Tips", 28),
    ("Author Spotlights", 16),
    ("Literary Analysis", 23),
];

#[component]
pub fn Blog() -> impl IntoView {
    let posts = data::blog_posts();

    // Presentational search/category row, matching the source page
    let search = RwSignal::new(String::new());
    let category = RwSignal::new("all".to_string());

    view! {
        <div class="container mx-auto px-4 py-10">
            <div class="flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
                <div>
                    <h1 class="text-3xl font-bold tracking-tight">"Book Blog"</h1>
                    <p class="text-stone-500">
                        "Discover book reviews, reading tips, and literary discussions"
                    </p>
                </div>
                <A
                    href="/blog/create"
                    attr:class="inline-flex items-center gap-2 px-4 py-2 rounded-md text-sm font-medium bg-purple-600 text-white hover:bg-purple-700"
                >
                    <Icon icon=PLUS size="16px" />
                    "Write a Post"
                </A>
            </div>

            <div class="mt-6">
                <div class="flex flex-col md:flex-row gap-4 mb-8">
                    <div class="flex-1">
                        <Input value=search placeholder="Search blog posts..." />
                    </div>
                    <Select
                        value=category
                        options=vec![
                            SelectOption::new("all", "All Categories"),
                            SelectOption::new("reviews", "Book Reviews"),
                            SelectOption::new("recommendations", "Recommendations"),
                            SelectOption::new("reading-tips", "Reading Tips"),
                            SelectOption::new("author-spotlights", "Author Spotlights"),
                        ]
                    />
                </div>

                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {posts
                        .into_iter()
                        .map(|post| {
                            let href = format!("/blog/{}", post.slug);
                            view! {
                                <A href=href attr:class="block h-full">
                                    <Card class="h-full transition-shadow hover:shadow-md">
                                        <div class="aspect-video w-full overflow-hidden">
                                            <img
                                                src=post.cover_image.clone()
                                                alt=post.title.clone()
                                                class="h-full w-full object-cover transition-transform duration-300 hover:scale-105"
                                            />
                                        </div>
                                        <CardHeader>
                                            <div class="flex gap-2 mb-1">
                                                {post
                                                    .categories
                                                    .clone()
                                                    .into_iter()
                                                    .map(|category| {
                                                        view! {
                                                            <Badge class="text-xs">{category}</Badge>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                            <CardTitle class="line-clamp-2">{post.title.clone()}</CardTitle>
                                            <CardDescription class="line-clamp-2 mt-1">
                                                {post.excerpt.clone()}
                                            </CardDescription>
                                        </CardHeader>
                                        <CardBody>
                                            <div class="flex items-center gap-2">
                                                <Avatar
                                                    name=post.author.name.clone()
                                                    image=post.author.image.clone()
                                                    size="h-6 w-6"
                                                />
                                                <span class="text-sm text-stone-500">
                                                    {post.author.name.clone()}
                                                </span>
                                            </div>
                                        </CardBody>
                                        <CardFooter class="flex justify-between">
                                            <div class="flex items-center gap-1 text-sm text-stone-500">
                                                <Icon icon=CALENDAR_BLANK size="16px" />
                                                <span>{post.published_at.clone()}</span>
                                            </div>
                                            <div class="flex items-center gap-1 text-sm text-stone-500">
                                                <Icon icon=CHAT_CIRCLE size="16px" />
                                                <span>{format!("{} comments", post.comment_count)}</span>
                                            </div>
                                        </CardFooter>
                                    </Card>
                                </A>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-12">
                    <h2 class="text-2xl font-bold tracking-tight mb-6">"Featured Categories"</h2>
                    <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-4 gap-4">
                        {FEATURED_CATEGORIES
                            .iter()
                            .map(|(name, count)| {
                                let href = format!(
                                    "/blog/category/{}",
                                    name.to_lowercase().replace(' ', "-"),
                                );
                                view! {
                                    <A href=href attr:class="block">
                                        <div class="bg-stone-100 rounded-lg p-6 hover:bg-stone-200 transition-colors">
                                            <div class="flex justify-between items-center">
                                                <div class="flex items-center gap-2">
                                                    <Icon icon=BOOK_OPEN size="20px" />
                                                    <h3 class="font-medium">{*name}</h3>
                                                </div>
                                                <Badge>{count.to_string()}</Badge>
                                            </div>
                                        </div>
                                    </A>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
