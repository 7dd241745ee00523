use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, CALENDAR_BLANK, PLUS, TROPHY, USERS};

use crate::components::design_system::{
    Button, ButtonVariant, Card, CardBody, CardDescription, CardFooter, CardHeader, CardTitle,
    Input, Modal, Progress, Select, SelectOption,
};
use crate::data;
use crate::models::ChallengeKind;
use crate::services::notification_service::show_info;
use crate::services::session::use_session_state;

#[component]
pub fn ReadingChallenges() -> impl IntoView {
    let session = use_session_state();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.current_user().is_none() {
            navigate("/sign-in", Default::default());
        }
    });

    let active = data::active_challenges();
    let open = data::open_challenges();
    let open_create_dialog = RwSignal::new(false);

    view! {
        <div class="container mx-auto px-4 py-10">
            <div class="flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
                <div>
                    <h1 class="text-3xl font-bold tracking-tight">"Reading Challenges"</h1>
                    <p class="text-stone-500">
                        "Set goals, join community challenges, and track your reading progress"
                    </p>
                </div>
                <Button on_click=move |_| open_create_dialog.set(true)>
                    <Icon icon=PLUS size="16px" />
                    "Create Challenge"
                </Button>
            </div>

            <CreateChallengeModal open=open_create_dialog />

            <div class="mt-8">
                <h2 class="text-2xl font-bold tracking-tight mb-6">"Your Active Challenges"</h2>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {active
                        .into_iter()
                        .map(|challenge| {
                            let pct = (challenge.progress as f64 / challenge.total as f64) * 100.0;
                            let card_class = if challenge.completed { "border-green-500" } else { "" };
                            view! {
                                <Card class=card_class>
                                    <CardHeader>
                                        <div class="flex justify-between items-start">
                                            <CardTitle>{challenge.title.clone()}</CardTitle>
                                            {(challenge.kind == ChallengeKind::Group)
                                                .then(|| {
                                                    view! {
                                                        <div class="flex items-center gap-1 text-sm text-stone-500">
                                                            <Icon icon=USERS size="16px" />
                                                            <span>
                                                                {challenge.participants.unwrap_or_default()}
                                                            </span>
                                                        </div>
                                                    }
                                                })}
                                        </div>
                                        <CardDescription class="mt-1">
                                            {challenge.description.clone()}
                                        </CardDescription>
                                    </CardHeader>
                                    <CardBody class="space-y-4">
                                        <div>
                                            <div class="flex justify-between text-sm mb-1">
                                                <span>"Progress"</span>
                                                <span>
                                                    {format!(
                                                        "{} of {} books",
                                                        challenge.progress,
                                                        challenge.total,
                                                    )}
                                                </span>
                                            </div>
                                            <Progress value=Signal::derive(move || pct) />
                                        </div>
                                        <div class="flex items-center gap-1 text-sm text-stone-500">
                                            <Icon icon=CALENDAR_BLANK size="16px" />
                                            <span>{format!("Deadline: {}", challenge.deadline)}</span>
                                        </div>
                                    </CardBody>
                                    <CardFooter>
                                        {if challenge.completed {
                                            view! {
                                                <div class="flex items-center gap-2 text-green-600 font-medium">
                                                    <Icon icon=TROPHY size="20px" />
                                                    "Challenge Completed!"
                                                </div>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <Button
                                                    variant=ButtonVariant::Outline
                                                    class="w-full"
                                                    on_click=move |_| {
                                                        show_info(
                                                            "Update Progress",
                                                            Some("Progress tracking is coming soon"),
                                                        )
                                                    }
                                                >
                                                    "Update Progress"
                                                </Button>
                                            }
                                                .into_any()
                                        }}
                                    </CardFooter>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="mt-12">
                <h2 class="text-2xl font-bold tracking-tight mb-6">"Join a Challenge"</h2>
                <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-3">
                    {open
                        .into_iter()
                        .map(|challenge| {
                            view! {
                                <Card>
                                    <CardHeader>
                                        <div class="flex justify-between items-start">
                                            <CardTitle>{challenge.title.clone()}</CardTitle>
                                            <div class="flex items-center gap-1 text-sm text-stone-500">
                                                <Icon icon=USERS size="16px" />
                                                <span>{challenge.participants}</span>
                                            </div>
                                        </div>
                                        <CardDescription class="mt-1">
                                            {challenge.description.clone()}
                                        </CardDescription>
                                    </CardHeader>
                                    <CardBody>
                                        <div class="flex items-center gap-1 text-sm text-stone-500">
                                            <Icon icon=CALENDAR_BLANK size="16px" />
                                            <span>{format!("Deadline: {}", challenge.deadline)}</span>
                                        </div>
                                    </CardBody>
                                    <CardFooter>
                                        <Button
                                            class="w-full"
                                            on_click=move |_| {
                                                show_info(
                                                    "Challenge joined",
                                                    Some("Good luck with your reading goal!"),
                                                )
                                            }
                                        >
                                            "Join Challenge"
                                        </Button>
                                    </CardFooter>
                                </Card>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn CreateChallengeModal(#[prop(into)] open: RwSignal<bool>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let kind = RwSignal::new("personal".to_string());
    let book_count = RwSignal::new("12".to_string());
    let deadline = RwSignal::new(String::new());

    let handle_create = move |_| {
        if title.get().trim().is_empty() {
            show_info("Almost there", Some("Give your challenge a title first"));
            return;
        }
        show_info("Challenge created", Some("Track it under your active challenges"));
        title.set(String::new());
        description.set(String::new());
        open.set(false);
    };

    view! {
        <Modal
            open=open
            title="Create a Reading Challenge"
            description="Set a new reading goal for yourself or create a group challenge"
        >
            <div class="grid gap-4 py-2">
                <div class="grid gap-2">
                    <label class="text-sm font-medium">"Challenge Title"</label>
                    <Input value=title placeholder="Enter a title for your challenge" />
                </div>
                <div class="grid gap-2">
                    <label class="text-sm font-medium">"Description"</label>
                    <Input value=description placeholder="Describe your reading challenge" />
                </div>
                <div class="grid gap-2">
                    <label class="text-sm font-medium">"Challenge Type"</label>
                    <Select
                        value=kind
                        options=vec![
                            SelectOption::new("personal", "Personal Challenge"),
                            SelectOption::new("group", "Group Challenge"),
                        ]
                        class="w-full"
                    />
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div class="grid gap-2">
                        <label class="text-sm font-medium">"Number of Books"</label>
                        <Input value=book_count input_type="number" />
                    </div>
                    <div class="grid gap-2">
                        <label class="text-sm font-medium">"Deadline"</label>
                        <Input value=deadline input_type="date" />
                    </div>
                </div>
                <div class="flex justify-end">
                    <Button on_click=handle_create>"Create Challenge"</Button>
                </div>
            </div>
        </Modal>
    }
}
