use leptos::ev;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A styled native select bound to an `RwSignal`.
#[component]
pub fn Select(
    #[prop(into)] value: RwSignal<String>,
    options: Vec<SelectOption>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let base_class = "px-3 py-2 rounded-md bg-white text-stone-900 border border-stone-300 focus:border-purple-500 focus:ring-1 focus:ring-purple-500 outline-none text-sm";
    let full_class = format!("{base_class} {class}");

    let handle_change = move |evt: ev::Event| {
        value.set(event_target_value(&evt));
    };

    view! {
        <select class=full_class on:change=handle_change prop:value=move || value.get()>
            {options
                .into_iter()
                .map(|opt| {
                    let selected = {
                        let v = opt.value.clone();
                        move || value.get() == v
                    };
                    view! {
                        <option value=opt.value selected=selected>
                            {opt.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
