use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// CSS styles for rendered markdown content
const MARKDOWN_STYLES: &str = r#"
    .markdown-content h1 { font-size: 1.5em; font-weight: bold; margin-top: 1em; margin-bottom: 0.5em; }
    .markdown-content h2 { font-size: 1.25em; font-weight: bold; margin-top: 1em; margin-bottom: 0.5em; }
    .markdown-content h3 { font-size: 1.1em; font-weight: bold; margin-top: 1em; margin-bottom: 0.5em; }
    .markdown-content p { margin-bottom: 1em; line-height: 1.7; }
    .markdown-content ul { list-style-type: disc; padding-left: 1.5em; margin-bottom: 1em; }
    .markdown-content ol { list-style-type: decimal; padding-left: 1.5em; margin-bottom: 1em; }
    .markdown-content li { margin-bottom: 0.25em; }
    .markdown-content blockquote { border-left: 4px solid #d6d3d1; padding-left: 1em; color: #78716c; font-style: italic; }
    .markdown-content a { color: #9333ea; text-decoration: underline; }
    .markdown-content strong { font-weight: 600; }
    .markdown-content em { font-style: italic; }
    .markdown-content img { border-radius: 0.5em; margin: 1em 0; max-width: 100%; }
"#;

/// Render markdown to HTML using pulldown-cmark
fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// A markdown renderer for blog content.
#[component]
pub fn Markdown(
    #[prop(into)] content: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let html_content = render_markdown(&content);
    let full_class = format!("markdown-content text-stone-800 {class}");

    view! {
        <style>{MARKDOWN_STYLES}</style>
        <div class=full_class inner_html=html_content />
    }
}
