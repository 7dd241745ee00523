use leptos::ev;
use leptos::prelude::*;

/// A styled multi-line text input bound to an `RwSignal`.
#[component]
pub fn Textarea(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into, optional)] placeholder: String,
    #[prop(default = 4)] rows: u32,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
    /// Element id, for components that manipulate the selection range
    #[prop(into, optional)]
    id: Option<String>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let base_class = "w-full px-3 py-2 rounded-md bg-white text-stone-900 border border-stone-300 focus:border-purple-500 focus:ring-1 focus:ring-purple-500 outline-none transition-colors placeholder-stone-400 text-sm resize-none disabled:opacity-50 disabled:cursor-not-allowed";
    let full_class = format!("{base_class} {class}");

    let handle_input = move |evt: ev::Event| {
        value.set(event_target_value(&evt));
    };

    view! {
        <textarea
            class=full_class
            id=id
            rows=rows
            prop:value=move || value.get()
            placeholder=placeholder
            disabled=move || disabled.get()
            on:input=handle_input
        ></textarea>
    }
}
