use leptos::ev;
use leptos::prelude::*;

use super::loading::LoadingSpinner;

/// Button variant styles
#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-purple-600 hover:bg-purple-700 text-white shadow-sm border border-transparent"
            }
            ButtonVariant::Secondary => {
                "bg-stone-100 hover:bg-stone-200 text-stone-900 border border-stone-200"
            }
            ButtonVariant::Outline => {
                "bg-transparent border border-stone-300 text-stone-700 hover:bg-stone-50"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-stone-100 text-stone-600 hover:text-stone-900 border border-transparent"
            }
            ButtonVariant::Destructive => {
                "bg-red-600 hover:bg-red-700 text-white shadow-sm border border-transparent"
            }
        }
    }
}

/// A styled button with loading and disabled states.
#[component]
pub fn Button<F>(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    /// Click handler - accepts any closure taking MouseEvent
    #[prop(optional)]
    on_click: Option<F>,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
    /// Whether to show a loading spinner in place of content
    #[prop(into, default = Signal::derive(|| false))]
    loading: Signal<bool>,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] title: String,
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "px-4 py-2 rounded-md text-sm font-medium transition-colors inline-flex items-center justify-center gap-2 focus:outline-none focus:ring-2 focus:ring-purple-500 focus:ring-offset-2";
    let variant_class = variant.class();

    let is_disabled = move || disabled.get() || loading.get();

    let state_class = move || {
        if is_disabled() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer"
        }
    };

    let full_class = move || format!("{base_class} {variant_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if !is_disabled() {
            if let Some(ref callback) = on_click {
                callback(evt);
            }
        }
    };

    view! {
        <button class=full_class on:click=handle_click disabled=is_disabled title=title>
            {move || loading.get().then(|| view! { <LoadingSpinner /> })}
            {children()}
        </button>
    }
}
