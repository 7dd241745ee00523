use leptos::prelude::*;

/// A round avatar. Falls back to the first letter of the name when no
/// image url is set (placeholder urls count as images).
#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(into, optional)] image: String,
    /// Tailwind sizing classes, e.g. "h-8 w-8"
    #[prop(into, default = "h-8 w-8".to_string())]
    size: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let initial = name.chars().next().unwrap_or('U').to_uppercase().to_string();
    let title = name.clone();
    let full_class = format!(
        "{size} rounded-full bg-purple-100 text-purple-700 flex items-center justify-center overflow-hidden flex-shrink-0 font-medium {class}"
    );

    view! {
        <div class=full_class title=title>
            {if image.is_empty() {
                view! { <span>{initial}</span> }.into_any()
            } else {
                view! { <img src=image alt=name class="h-full w-full object-cover" /> }.into_any()
            }}
        </div>
    }
}
