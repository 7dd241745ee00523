use leptos::prelude::*;

/// A horizontal tab strip. The caller owns the active-value signal; each
/// `TabPanel` renders its children only while its value is active, so
/// panel-local state resets on every tab switch.
#[component]
pub fn TabList(
    /// (value, label) pairs, rendered in order
    tabs: Vec<(String, String)>,
    #[prop(into)] active: RwSignal<String>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let full_class = format!(
        "inline-flex items-center gap-1 rounded-lg bg-stone-100 p-1 {class}"
    );

    view! {
        <div class=full_class role="tablist">
            {tabs
                .into_iter()
                .map(|(value, label)| {
                    let is_active = {
                        let value = value.clone();
                        move || active.get() == value
                    };
                    let select = move |_| active.set(value.clone());
                    view! {
                        <button
                            role="tab"
                            class=move || {
                                if is_active() {
                                    "px-3 py-1.5 rounded-md text-sm font-medium bg-white text-stone-900 shadow-sm"
                                } else {
                                    "px-3 py-1.5 rounded-md text-sm font-medium text-stone-500 hover:text-stone-900"
                                }
                            }
                            on:click=select
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn TabPanel(
    #[prop(into)] value: String,
    #[prop(into)] active: RwSignal<String>,
    children: ChildrenFn,
) -> impl IntoView {
    view! { <Show when=move || active.get() == value>{children()}</Show> }
}
