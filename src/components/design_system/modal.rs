use leptos::prelude::*;
use phosphor_leptos::{Icon, X};

/// A centered dialog over a dimmed backdrop. Closes on backdrop click or
/// the corner button; the caller owns the `open` signal.
#[component]
pub fn Modal(
    #[prop(into)] open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into, optional)] description: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div
                class="fixed inset-0 z-40 bg-black/40 flex items-center justify-center p-4"
                on:click=move |_| open.set(false)
            >
                <div
                    class="bg-white rounded-lg shadow-xl w-full max-w-md p-6"
                    on:click=|evt| evt.stop_propagation()
                >
                    <div class="flex items-start justify-between mb-1">
                        <h2 class="text-lg font-semibold">{title.clone()}</h2>
                        <button
                            class="text-stone-400 hover:text-stone-600"
                            on:click=move |_| open.set(false)
                        >
                            <Icon icon=X size="16px" />
                        </button>
                    </div>
                    {(!description.is_empty())
                        .then(|| view! { <p class="text-sm text-stone-500 mb-4">{description.clone()}</p> })}
                    {children()}
                </div>
            </div>
        </Show>
    }
}
