use leptos::prelude::*;
use phosphor_leptos::{
    Icon, IMAGE, LINK, LIST_BULLETS, LIST_NUMBERS, QUOTES, TEXT_B, TEXT_ITALIC,
};
use wasm_bindgen::JsCast;

use crate::components::design_system::Textarea;

const EDITOR_ID: &str = "blog-editor-content";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Format {
    Bold,
    Italic,
    List,
    OrderedList,
    Quote,
    Link,
    Image,
}

impl Format {
    /// (wrapped text, cursor offset to the start of the selection)
    fn wrap(&self, selected: &str) -> (String, u32) {
        match self {
            Format::Bold => (format!("**{selected}**"), 2),
            Format::Italic => (format!("*{selected}*"), 1),
            Format::List => (format!("\n- {selected}"), 3),
            Format::OrderedList => (format!("\n1. {selected}"), 4),
            Format::Quote => (format!("\n> {selected}"), 3),
            Format::Link => (format!("[{selected}](url)"), selected.len() as u32 + 3),
            Format::Image => (format!("![{selected}](url)"), selected.len() as u32 + 4),
        }
    }
}

fn clamp_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// A textarea with a Markdown formatting toolbar. The toolbar wraps the
/// current selection and restores it after the value updates.
#[component]
pub fn BlogEditor(#[prop(into)] content: RwSignal<String>) -> impl IntoView {
    let apply_format = move |format: Format| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(element) = document.get_element_by_id(EDITOR_ID) else {
            return;
        };
        let Ok(textarea) = element.dyn_into::<web_sys::HtmlTextAreaElement>() else {
            return;
        };

        let text = content.get_untracked();
        let start = clamp_boundary(
            &text,
            textarea.selection_start().ok().flatten().unwrap_or(0) as usize,
        );
        let end = clamp_boundary(
            &text,
            textarea.selection_end().ok().flatten().unwrap_or(0) as usize,
        );
        let selected = text[start..end].to_string();

        let (formatted, cursor) = format.wrap(&selected);
        let new_content = format!("{}{}{}", &text[..start], formatted, &text[end..]);
        content.set(new_content);

        // Restore focus and select the wrapped text once the DOM has the
        // new value.
        let selection_from = start as u32 + cursor;
        let selection_to = selection_from + selected.len() as u32;
        set_timeout(
            move || {
                let _ = textarea.focus();
                let _ = textarea.set_selection_range(selection_from, selection_to);
            },
            std::time::Duration::ZERO,
        );
    };

    const BUTTON_CLASS: &str = "p-1.5 rounded text-stone-600 hover:bg-stone-200 hover:text-stone-900";

    view! {
        <div class="border border-stone-300 rounded-md overflow-hidden">
            <div class="flex items-center gap-1 p-2 border-b border-stone-200 bg-stone-50">
                <button class=BUTTON_CLASS title="Bold" on:click=move |_| apply_format(Format::Bold)>
                    <Icon icon=TEXT_B size="16px" />
                </button>
                <button
                    class=BUTTON_CLASS
                    title="Italic"
                    on:click=move |_| apply_format(Format::Italic)
                >
                    <Icon icon=TEXT_ITALIC size="16px" />
                </button>
                <button
                    class=BUTTON_CLASS
                    title="Bullet List"
                    on:click=move |_| apply_format(Format::List)
                >
                    <Icon icon=LIST_BULLETS size="16px" />
                </button>
                <button
                    class=BUTTON_CLASS
                    title="Numbered List"
                    on:click=move |_| apply_format(Format::OrderedList)
                >
                    <Icon icon=LIST_NUMBERS size="16px" />
                </button>
                <button
                    class=BUTTON_CLASS
                    title="Quote"
                    on:click=move |_| apply_format(Format::Quote)
                >
                    <Icon icon=QUOTES size="16px" />
                </button>
                <button class=BUTTON_CLASS title="Link" on:click=move |_| apply_format(Format::Link)>
                    <Icon icon=LINK size="16px" />
                </button>
                <button
                    class=BUTTON_CLASS
                    title="Image"
                    on:click=move |_| apply_format(Format::Image)
                >
                    <Icon icon=IMAGE size="16px" />
                </button>
            </div>
            <Textarea
                value=content
                id=EDITOR_ID
                rows=12
                placeholder="Write your blog post content here. You can use Markdown formatting."
                class="border-0 rounded-none focus:ring-0"
            />
            <div class="p-2 border-t border-stone-200 bg-stone-50 text-xs text-stone-500">
                "Markdown supported. Use the toolbar for formatting or write Markdown directly."
            </div>
        </div>
    }
}
