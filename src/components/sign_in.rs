use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, BOOK_OPEN};

use crate::components::design_system::{Button, Card, CardBody, Input};
use crate::services::notification_service::show_success;
use crate::services::session::use_session_state;

/// Credential form. Only the demo pair signs in; anything else shows an
/// inline error.
#[component]
pub fn SignIn() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let session = use_session_state();
    let navigate = use_navigate();

    let submit = Callback::new(move |_: ()| {
        match session.sign_in(&email.get(), &password.get()) {
            Ok(()) => {
                show_success("Welcome back", Some("You are now signed in"));
                navigate("/", Default::default());
            }
            Err(message) => error.set(Some(message)),
        }
    });

    let on_keydown = Callback::new(move |e: ev::KeyboardEvent| {
        if e.key() == "Enter" {
            submit.run(());
        }
    });

    view! {
        <div class="container mx-auto px-4 py-20 flex justify-center">
            <Card class="w-full max-w-sm">
                <CardBody class="pt-6 space-y-4">
                    <div class="flex flex-col items-center text-center mb-2">
                        <span class="text-purple-600 mb-2">
                            <Icon icon=BOOK_OPEN size="32px" />
                        </span>
                        <h1 class="text-2xl font-bold">"Sign in to BookNook"</h1>
                        <p class="text-sm text-stone-500 mt-1">
                            "Use test@example.com / password to explore the demo"
                        </p>
                    </div>

                    <div class="space-y-2">
                        <label class="text-sm font-medium">"Email"</label>
                        <Input
                            value=email
                            placeholder="you@example.com"
                            input_type="email"
                            on_keydown=on_keydown
                        />
                    </div>
                    <div class="space-y-2">
                        <label class="text-sm font-medium">"Password"</label>
                        <Input
                            value=password
                            placeholder="Your password"
                            input_type="password"
                            on_keydown=on_keydown
                        />
                    </div>

                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! { <p class="text-sm text-red-600">{message}</p> }
                            })
                    }}

                    <Button class="w-full" on_click=move |_| submit.run(())>
                        "Sign In"
                    </Button>
                </CardBody>
            </Card>
        </div>
    }
}
