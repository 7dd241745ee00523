use leptos::prelude::*;

/// A small spinning indicator.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="w-4 h-4 border-2 border-stone-300 border-t-purple-600 rounded-full animate-spin"></div>
    }
}

/// A pulsing placeholder block shown while content loads.
#[component]
pub fn Skeleton(#[prop(into, optional)] class: String) -> impl IntoView {
    let full_class = format!("animate-pulse bg-stone-200 rounded {class}");
    view! { <div class=full_class></div> }
}
