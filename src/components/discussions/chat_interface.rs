//! Discussion chat feed.
//!
//! Poll-and-replace, not push: the full message list is refetched every
//! five seconds and swapped in wholesale. Sent messages are appended
//! optimistically with a client-generated id and are never reconciled
//! against the next poll result.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, IMAGE, PAPERCLIP, PAPER_PLANE_TILT, SMILEY};
use wasm_bindgen_futures::spawn_local;

use crate::actions;
use crate::components::design_system::{Avatar, Button, Input};
use crate::models::ChatMessage;
use crate::services::chat_feed::{self, DateGroup};
use crate::services::notification_service::show_error;
use crate::services::session::use_session_state;

const POLL_INTERVAL_MS: u32 = 5000;

#[component]
pub fn ChatInterface(#[prop(into)] discussion_id: String) -> impl IntoView {
    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let new_message = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let poll_cancelled = RwSignal::new(false);
    let session = use_session_state();
    let messages_end = NodeRef::<leptos::html::Div>::new();

    // Fetch on mount, then poll until the view unmounts. Each fetch
    // replaces the whole list - there is no delta protocol and no dedup
    // against previously-fetched or optimistically-appended messages.
    {
        let discussion_id = discussion_id.clone();
        Effect::new(move |_| {
            let discussion_id = discussion_id.clone();
            spawn_local(async move {
                loop {
                    // try_-variants: the future can outlive the view by one
                    // tick, after its signals are disposed.
                    if poll_cancelled.try_get_untracked().unwrap_or(true) {
                        break;
                    }

                    let Some(user) = session.user.try_get_untracked() else {
                        break;
                    };
                    match actions::get_messages(user.as_ref(), &discussion_id).await {
                        Ok(fetched) => {
                            let _ = messages.try_set(fetched);
                        }
                        Err(e) => {
                            log::error!("get_messages failed: {e}");
                            show_error("Error", Some("Failed to load messages"));
                        }
                    }

                    TimeoutFuture::new(POLL_INTERVAL_MS).await;
                }
            });
        });
    }

    on_cleanup(move || {
        poll_cancelled.set(true);
    });

    // Keep the viewport pinned to the newest message.
    Effect::new(move |_| {
        messages.track();
        if let Some(el) = messages_end.get() {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    let send_message = Callback::new(move |_: ()| {
        let content = new_message.get();
        let Some(user) = session.current_user() else {
            return;
        };
        // Whitespace-only input is a no-op: no remote call, no append.
        let Some(local) = chat_feed::draft_local_message(&content, &user) else {
            return;
        };

        loading.set(true);
        let discussion_id = discussion_id.clone();
        spawn_local(async move {
            if let Err(e) = actions::send_message(Some(&user), &discussion_id, &content).await {
                log::error!("send_message failed: {e}");
                show_error("Error", Some("Failed to send message"));
            }
            let _ = loading.try_set(false);
        });

        // Optimistic append, not conditioned on the send result. The next
        // poll replaces the list, so this copy can disappear or a
        // successful send can show up twice.
        messages.update(|list| list.push(local));
        new_message.set(String::new());
    });

    let on_send_click = move |_: ev::MouseEvent| send_message.run(());
    let on_keydown = Callback::new(move |e: ev::KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            send_message.run(());
        }
    });

    let grouped = Memo::new(move |_| chat_feed::group_by_date(&messages.get()));
    let current_user_id =
        Memo::new(move |_| session.current_user().map(|u| u.id).unwrap_or_default());

    view! {
        <div class="flex flex-col h-[calc(80vh-200px)] border border-stone-200 rounded-lg bg-white">
            <div class="flex-1 overflow-y-auto p-4 space-y-4">
                {move || {
                    let viewer = current_user_id.get();
                    grouped
                        .get()
                        .into_iter()
                        .map(|group| render_date_group(group, &viewer))
                        .collect_view()
                }}
                <div node_ref=messages_end></div>
            </div>

            <div class="border-t border-stone-200 p-4">
                <div class="flex gap-2 items-center">
                    <button class="p-2 rounded-md text-stone-400 hover:text-stone-600">
                        <Icon icon=PAPERCLIP size="20px" />
                    </button>
                    <button class="p-2 rounded-md text-stone-400 hover:text-stone-600">
                        <Icon icon=IMAGE size="20px" />
                    </button>
                    <div class="flex-1">
                        <Input
                            value=new_message
                            placeholder="Type a message..."
                            on_keydown=on_keydown
                        />
                    </div>
                    <button class="p-2 rounded-md text-stone-400 hover:text-stone-600">
                        <Icon icon=SMILEY size="20px" />
                    </button>
                    <Button
                        on_click=on_send_click
                        disabled=Signal::derive(move || {
                            loading.get() || new_message.get().trim().is_empty()
                        })
                    >
                        <Icon icon=PAPER_PLANE_TILT size="20px" />
                    </Button>
                </div>
            </div>
        </div>
    }
}

fn render_date_group(group: DateGroup, current_user_id: &str) -> impl IntoView {
    let DateGroup { label, messages } = group;

    let bubbles = messages
        .iter()
        .enumerate()
        .map(|(index, message)| {
            let outgoing = chat_feed::is_outgoing(message, current_user_id);
            let show_sender = chat_feed::shows_sender(&messages, index);
            render_bubble(message.clone(), outgoing, show_sender)
        })
        .collect_view();

    view! {
        <div>
            <div class="flex justify-center my-4">
                <div class="bg-stone-100 px-3 py-1 rounded-full text-xs text-stone-500">{label}</div>
            </div>
            {bubbles}
        </div>
    }
}

fn render_bubble(message: ChatMessage, outgoing: bool, show_sender: bool) -> impl IntoView {
    let row_class = if outgoing {
        "flex justify-end"
    } else {
        "flex justify-start"
    };
    let inner_class = if outgoing {
        "flex flex-row-reverse max-w-[80%] gap-2"
    } else {
        "flex flex-row max-w-[80%] gap-2"
    };
    let bubble_class = if outgoing {
        "rounded-lg px-4 py-2 bg-purple-600 text-white"
    } else {
        "rounded-lg px-4 py-2 bg-stone-100"
    };

    let time = chat_feed::time_label(&message.created_at);

    view! {
        <div class=row_class>
            <div class=inner_class>
                {if show_sender {
                    view! {
                        <Avatar name=message.user.name.clone() image=message.user.image.clone() />
                    }
                        .into_any()
                } else {
                    view! { <div class="w-8"></div> }.into_any()
                }}
                <div>
                    {(show_sender && !outgoing)
                        .then(|| {
                            view! {
                                <div class="text-sm font-medium mb-1">
                                    {message.user.name.clone()}
                                </div>
                            }
                        })}
                    <div class="flex items-end gap-2">
                        <div class=bubble_class>{message.content.clone()}</div>
                        <div class="text-xs text-stone-400">{time}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
