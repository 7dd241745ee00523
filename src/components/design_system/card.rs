use leptos::prelude::*;

/// A bordered card container.
#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let base_class = "bg-white border border-stone-200 rounded-lg shadow-sm overflow-hidden";
    let full_class = format!("{base_class} {class}");

    view! { <div class=full_class>{children()}</div> }
}

#[component]
pub fn CardHeader(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let full_class = format!("px-4 pt-4 pb-3 {class}");
    view! { <div class=full_class>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let full_class = format!("font-semibold text-lg leading-snug {class}");
    view! { <h3 class=full_class>{children()}</h3> }
}

#[component]
pub fn CardDescription(
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let full_class = format!("text-sm text-stone-500 {class}");
    view! { <p class=full_class>{children()}</p> }
}

#[component]
pub fn CardBody(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let full_class = format!("px-4 pb-4 {class}");
    view! { <div class=full_class>{children()}</div> }
}

#[component]
pub fn CardFooter(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let full_class = format!("px-4 py-3 border-t border-stone-100 {class}");
    view! { <div class=full_class>{children()}</div> }
}
