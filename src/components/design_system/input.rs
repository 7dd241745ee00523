use leptos::ev;
use leptos::prelude::*;

/// A styled text input bound to an `RwSignal`.
#[component]
pub fn Input(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into, optional)] placeholder: String,
    /// Keydown handler (Enter-to-submit and the like)
    #[prop(into, optional)]
    on_keydown: Option<Callback<ev::KeyboardEvent>>,
    #[prop(into, default = Signal::derive(|| false))] disabled: Signal<bool>,
    #[prop(into, optional)] input_type: Option<String>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let input_type = input_type.unwrap_or_else(|| "text".to_string());

    let base_class = "w-full px-3 py-2 rounded-md bg-white text-stone-900 border border-stone-300 focus:border-purple-500 focus:ring-1 focus:ring-purple-500 outline-none transition-colors placeholder-stone-400 text-sm disabled:opacity-50 disabled:cursor-not-allowed";
    let full_class = format!("{base_class} {class}");

    let handle_input = move |evt: ev::Event| {
        value.set(event_target_value(&evt));
    };

    let handle_keydown = move |evt: ev::KeyboardEvent| {
        if let Some(ref callback) = on_keydown {
            callback.run(evt);
        }
    };

    view! {
        <input
            class=full_class
            type=input_type
            prop:value=move || value.get()
            placeholder=placeholder
            disabled=move || disabled.get()
            on:input=handle_input
            on:keydown=handle_keydown
        />
    }
}
