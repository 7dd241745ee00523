use leptos::children::ViewFn;
use leptos::ev;
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct DropdownOpen(RwSignal<bool>);

/// A click-toggled menu anchored to its trigger. Items close the menu on
/// selection; a full-viewport backdrop closes it on outside click.
#[component]
pub fn Dropdown(
    /// Renders the trigger content inside the toggle button
    #[prop(into)]
    trigger: ViewFn,
    #[prop(into, optional)] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let open = RwSignal::new(false);
    provide_context(DropdownOpen(open));

    let toggle = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
        open.update(|o| *o = !*o);
    };

    view! {
        <div class=format!("relative inline-block {class}")>
            <button
                class="inline-flex items-center gap-1 px-2 py-1.5 rounded-md text-sm text-stone-600 hover:bg-stone-100 hover:text-stone-900"
                on:click=toggle
            >
                {trigger.run()}
            </button>
            <Show when=move || open.get()>
                <div class="fixed inset-0 z-20" on:click=move |_| open.set(false)></div>
                <div class="absolute right-0 z-30 mt-1 min-w-[10rem] rounded-md border border-stone-200 bg-white py-1 shadow-lg">
                    {children()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn DropdownItem(
    #[prop(into)] on_select: Callback<()>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let open = expect_context::<DropdownOpen>().0;

    let handle_click = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
        open.set(false);
        on_select.run(());
    };

    view! {
        <button
            class=format!(
                "block w-full text-left px-3 py-1.5 text-sm text-stone-700 hover:bg-stone-100 {class}"
            )
            on:click=handle_click
        >
            {children()}
        </button>
    }
}
