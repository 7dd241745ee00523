use leptos::prelude::*;

/// A horizontal progress bar. `value` is a percentage, clamped to 0-100.
#[component]
pub fn Progress(
    #[prop(into)] value: Signal<f64>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let width = move || format!("width: {}%", value.get().clamp(0.0, 100.0));
    let full_class = format!("w-full bg-stone-100 rounded-full h-2 overflow-hidden {class}");

    view! {
        <div class=full_class>
            <div
                class="bg-gradient-to-r from-purple-600 to-pink-600 h-full rounded-full transition-all"
                style=width
            ></div>
        </div>
    }
}
