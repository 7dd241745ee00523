use leptos::prelude::*;

#[derive(Default, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Secondary,
    Outline,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Secondary => "bg-stone-100 text-stone-700 border border-transparent",
            BadgeVariant::Outline => "bg-transparent text-stone-600 border border-stone-300",
        }
    }
}

/// A small inline label (tags, categories, privacy markers).
#[component]
pub fn Badge(
    #[prop(default = BadgeVariant::Secondary)] variant: BadgeVariant,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let full_class = format!(
        "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {} {class}",
        variant.class()
    );

    view! { <span class=full_class>{children()}</span> }
}
