use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, ARROW_LEFT};

use crate::actions;
use crate::components::blog::BlogEditor;
use crate::components::design_system::{
    Button, Card, CardBody, CardDescription, CardHeader, CardTitle, Input, Select, SelectOption,
    Textarea,
};
use crate::models::NewBlogPost;
use crate::services::notification_service::{show_error, show_success};
use crate::services::session::use_session_state;

#[component]
pub fn BlogCreate() -> impl IntoView {
    let session = use_session_state();
    let navigate = use_navigate();

    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if session.current_user().is_none() {
                navigate("/sign-in", Default::default());
            }
        }
    });

    let title = RwSignal::new(String::new());
    let excerpt = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let category = RwSignal::new("reviews".to_string());
    let tags = RwSignal::new(String::new());
    let visibility = RwSignal::new("public".to_string());
    let publishing = RwSignal::new(false);

    let navigate_after_publish = navigate.clone();
    let handle_publish = Callback::new(move |_: ()| {
        if title.get().trim().is_empty() {
            show_error("Error", Some("Your post needs a title"));
            return;
        }
        if content.get().trim().is_empty() {
            show_error("Error", Some("Your post needs some content"));
            return;
        }

        let user = session.current_user();
        let payload = NewBlogPost {
            title: title.get(),
            excerpt: excerpt.get(),
            content: content.get(),
            category: category.get(),
            tags: tags
                .get()
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            visibility: visibility.get(),
        };

        publishing.set(true);
        let navigate = navigate_after_publish.clone();
        spawn_local(async move {
            match actions::create_blog_post(user.as_ref(), payload).await {
                Ok(_slug) => {
                    show_success("Post published", Some("Your post is now live on the blog"));
                    navigate("/blog", Default::default());
                }
                Err(e) => {
                    log::error!("create_blog_post failed: {e}");
                    show_error("Error", Some("Failed to publish post"));
                }
            }
            publishing.set(false);
        });
    });

    view! {
        <div class="container mx-auto px-4 py-10">
            <div class="flex items-center gap-4 mb-6">
                <A href="/blog" attr:class="p-2 rounded-md text-stone-600 hover:bg-stone-100">
                    <Icon icon=ARROW_LEFT size="20px" />
                </A>
                <div class="flex-1">
                    <h1 class="text-3xl font-bold tracking-tight">"Create a Blog Post"</h1>
                    <p class="text-stone-500">
                        "Share your thoughts, reviews, and insights about books"
                    </p>
                </div>
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2">
                    <Card>
                        <CardHeader>
                            <CardTitle>"Post Content"</CardTitle>
                            <CardDescription>"Write your blog post content here"</CardDescription>
                        </CardHeader>
                        <CardBody class="space-y-6">
                            <div class="space-y-2">
                                <label class="text-sm font-medium">"Title"</label>
                                <Input
                                    value=title
                                    placeholder="Enter a compelling title for your post"
                                />
                            </div>

                            <div class="space-y-2">
                                <label class="text-sm font-medium">"Excerpt"</label>
                                <Textarea
                                    value=excerpt
                                    placeholder="Write a short summary of your post (will be displayed in previews)"
                                    rows=3
                                />
                            </div>

                            <div class="space-y-2">
                                <label class="text-sm font-medium">"Content"</label>
                                <BlogEditor content=content />
                            </div>
                        </CardBody>
                    </Card>
                </div>

                <div class="lg:col-span-1 space-y-6">
                    <Card>
                        <CardHeader>
                            <CardTitle>"Post Settings"</CardTitle>
                        </CardHeader>
                        <CardBody class="space-y-4">
                            <div class="space-y-2">
                                <label class="text-sm font-medium">"Category"</label>
                                <Select
                                    value=category
                                    options=vec![
                                        SelectOption::new("reviews", "Book Reviews"),
                                        SelectOption::new("recommendations", "Recommendations"),
                                        SelectOption::new("reading-tips", "Reading Tips"),
                                        SelectOption::new("author-spotlights", "Author Spotlights"),
                                        SelectOption::new("literary-analysis", "Literary Analysis"),
                                    ]
                                    class="w-full"
                                />
                            </div>
                            <div class="space-y-2">
                                <label class="text-sm font-medium">"Tags"</label>
                                <Input value=tags placeholder="Comma-separated, e.g. space, sci-fi" />
                            </div>
                            <div class="space-y-2">
                                <label class="text-sm font-medium">"Visibility"</label>
                                <Select
                                    value=visibility
                                    options=vec![
                                        SelectOption::new("public", "Public"),
                                        SelectOption::new("followers", "Followers Only"),
                                        SelectOption::new("private", "Private"),
                                    ]
                                    class="w-full"
                                />
                            </div>
                            <Button
                                class="w-full"
                                on_click=move |_| handle_publish.run(())
                                loading=Signal::derive(move || publishing.get())
                            >
                                "Publish Post"
                            </Button>
                        </CardBody>
                    </Card>
                </div>
            </div>
        </div>
    }
}
