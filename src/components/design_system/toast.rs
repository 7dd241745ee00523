use leptos::prelude::*;

use crate::services::notification_service::{
    remove_notification, use_notification_state, Notification, ToastType,
};

#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = use_notification_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 pointer-events-none">
            {move || {
                state
                    .notifications
                    .get()
                    .into_iter()
                    .map(|notification| view! { <Toast notification=notification /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn Toast(notification: Notification) -> impl IntoView {
    let id = notification.id;

    // Auto-dismiss after the notification's duration
    if let Some(duration) = notification.duration_ms {
        set_timeout(
            move || remove_notification(id),
            std::time::Duration::from_millis(duration),
        );
    }

    let accent_class = match notification.toast_type {
        ToastType::Success => "border-l-4 border-green-500",
        ToastType::Error => "border-l-4 border-red-500",
        ToastType::Info => "border-l-4 border-purple-500",
    };

    let icon = match notification.toast_type {
        ToastType::Success => view! { <span class="text-green-600">"✓"</span> },
        ToastType::Error => view! { <span class="text-red-600">"⚠"</span> },
        ToastType::Info => view! { <span class="text-purple-600">"i"</span> },
    };

    view! {
        <div
            class=format!(
                "pointer-events-auto min-w-[280px] max-w-sm p-4 rounded-md shadow-lg bg-white border border-stone-200 flex gap-3 {accent_class}"
            )
            role="alert"
        >
            <div class="flex-shrink-0">{icon}</div>
            <div class="flex-1">
                <div class="font-medium text-sm">{notification.title.clone()}</div>
                {notification
                    .message
                    .clone()
                    .map(|msg| view! { <div class="text-sm text-stone-500 mt-0.5">{msg}</div> })}
            </div>
            <button
                class="text-stone-400 hover:text-stone-600 text-sm self-start"
                on:click=move |_| remove_notification(id)
            >
                "✕"
            </button>
        </div>
    }
}
