use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::actions;
use crate::components::design_system::{Button, Textarea};
use crate::services::notification_service::{show_error, show_success};
use crate::services::session::use_session_state;

/// Comment box under a blog post. Prompts for sign-in without a session;
/// submitting clears the box optimistically and surfaces failures as a
/// toast only.
#[component]
pub fn BlogCommentForm(#[prop(into)] post_id: String) -> impl IntoView {
    let comment = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);
    let session = use_session_state();

    let handle_submit = Callback::new(move |_: ()| {
        let content = comment.get();
        if content.trim().is_empty() {
            return;
        }

        let Some(user) = session.current_user() else {
            show_error(
                "Sign in required",
                Some("Please sign in to comment on blog posts"),
            );
            return;
        };

        is_submitting.set(true);
        let post_id = post_id.clone();
        spawn_local(async move {
            match actions::add_comment(Some(&user), &post_id, &content).await {
                Ok(()) => {
                    comment.set(String::new());
                    show_success("Comment added", Some("Your comment has been added successfully"));
                }
                Err(e) => {
                    log::error!("add_comment failed: {e}");
                    show_error("Error", Some("Failed to add comment"));
                }
            }
            is_submitting.set(false);
        });
    });

    view! {
        <Show
            when=move || session.is_signed_in()
            fallback=|| {
                view! {
                    <div class="bg-stone-100 p-4 rounded-lg text-center">
                        <p class="text-sm text-stone-500 mb-2">"Please sign in to leave a comment"</p>
                        <A
                            href="/sign-in"
                            attr:class="inline-block px-3 py-1.5 rounded-md text-sm border border-stone-300 hover:bg-stone-50"
                        >
                            "Sign In"
                        </A>
                    </div>
                }
            }
        >
            <div class="space-y-4">
                <Textarea
                    value=comment
                    placeholder="Share your thoughts on this post..."
                    rows=4
                />
                <div class="flex justify-end">
                    <Button
                        on_click=move |_| handle_submit.run(())
                        disabled=Signal::derive(move || {
                            is_submitting.get() || comment.get().trim().is_empty()
                        })
                    >
                        {move || if is_submitting.get() { "Posting..." } else { "Post Comment" }}
                    </Button>
                </div>
            </div>
        </Show>
    }
}
