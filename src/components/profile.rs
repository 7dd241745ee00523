use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use phosphor_leptos::{Icon, BOOKMARK_SIMPLE, BOOK_OPEN, CHECK_CIRCLE, PLUS_CIRCLE};

use crate::components::design_system::{
    Avatar, Card, CardBody, CardDescription, CardHeader, CardTitle, Progress,
};
use crate::data;
use crate::models::ActivityKind;
use crate::services::session::use_session_state;

#[component]
pub fn Profile() -> impl IntoView {
    let session = use_session_state();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.current_user().is_none() {
            navigate("/sign-in", Default::default());
        }
    });

    view! {
        <div class="container mx-auto px-4 py-10">
            {move || {
                let Some(user) = session.current_user() else {
                    return view! { <div></div> }.into_any();
                };
                let profile = data::user_profile(&user.id);
                let goal_pct = (profile.stats.completed as f64 / profile.reading_goal as f64)
                    * 100.0;

                view! {
                    <div class="flex flex-col gap-4 md:flex-row md:items-center md:justify-between">
                        <div>
                            <h1 class="text-3xl font-bold tracking-tight">"Profile"</h1>
                            <p class="text-stone-500">
                                "Manage your account settings and view your reading stats"
                            </p>
                        </div>
                    </div>

                    <div class="grid gap-8 mt-8 md:grid-cols-3">
                        <Card class="md:col-span-1">
                            <CardHeader>
                                <CardTitle>"Personal Information"</CardTitle>
                                <CardDescription>
                                    "Your account details and preferences"
                                </CardDescription>
                            </CardHeader>
                            <CardBody class="flex flex-col items-center text-center">
                                <Avatar
                                    name=user.name.clone()
                                    image=user.image.clone()
                                    size="h-24 w-24"
                                    class="mb-4 text-2xl"
                                />
                                <h3 class="text-xl font-bold">{user.name.clone()}</h3>
                                <p class="text-sm text-stone-500">{user.email.clone()}</p>
                                <div class="mt-6 w-full text-sm">
                                    <div class="flex justify-between py-2 border-b border-stone-100">
                                        <span class="font-medium">"Member since"</span>
                                        <span>{profile.member_since.clone()}</span>
                                    </div>
                                    <div class="flex justify-between py-2 border-b border-stone-100">
                                        <span class="font-medium">"Reading goal"</span>
                                        <span>{format!("{} books per year", profile.reading_goal)}</span>
                                    </div>
                                    <div class="flex justify-between py-2">
                                        <span class="font-medium">"Favorite genre"</span>
                                        <span>{profile.favorite_genre.clone()}</span>
                                    </div>
                                </div>
                            </CardBody>
                        </Card>

                        <Card class="md:col-span-2">
                            <CardHeader>
                                <CardTitle>"Reading Statistics"</CardTitle>
                                <CardDescription>
                                    "Track your reading progress and achievements"
                                </CardDescription>
                            </CardHeader>
                            <CardBody>
                                <div class="grid gap-6 sm:grid-cols-3">
                                    <div class="flex flex-col items-center justify-center p-4 bg-stone-100 rounded-lg">
                                        <span class="text-purple-600 mb-2">
                                            <Icon icon=BOOK_OPEN size="32px" />
                                        </span>
                                        <span class="text-2xl font-bold">
                                            {profile.stats.total_books}
                                        </span>
                                        <span class="text-sm text-stone-500">"Total Books"</span>
                                    </div>
                                    <div class="flex flex-col items-center justify-center p-4 bg-stone-100 rounded-lg">
                                        <span class="text-pink-600 mb-2">
                                            <Icon icon=BOOKMARK_SIMPLE size="32px" />
                                        </span>
                                        <span class="text-2xl font-bold">
                                            {profile.stats.currently_reading}
                                        </span>
                                        <span class="text-sm text-stone-500">"Currently Reading"</span>
                                    </div>
                                    <div class="flex flex-col items-center justify-center p-4 bg-stone-100 rounded-lg">
                                        <span class="text-blue-600 mb-2">
                                            <Icon icon=CHECK_CIRCLE size="32px" />
                                        </span>
                                        <span class="text-2xl font-bold">
                                            {profile.stats.completed}
                                        </span>
                                        <span class="text-sm text-stone-500">"Completed"</span>
                                    </div>
                                </div>

                                <div class="mt-8">
                                    <h3 class="font-semibold mb-4">"Reading Progress"</h3>
                                    <Progress value=Signal::derive(move || goal_pct) class="h-4 mb-2" />
                                    <p class="text-sm text-stone-500">
                                        {format!(
                                            "{} of {} books read this year ({}%)",
                                            profile.stats.completed,
                                            profile.reading_goal,
                                            goal_pct.round() as u32,
                                        )}
                                    </p>
                                </div>

                                <div class="mt-8">
                                    <h3 class="font-semibold mb-4">"Recent Activity"</h3>
                                    <div class="space-y-4">
                                        {profile
                                            .recent_activity
                                            .iter()
                                            .map(|activity| {
                                                let icon = match activity.kind {
                                                    ActivityKind::Added => {
                                                        view! { <Icon icon=PLUS_CIRCLE size="16px" /> }
                                                            .into_any()
                                                    }
                                                    ActivityKind::Completed => {
                                                        view! { <Icon icon=CHECK_CIRCLE size="16px" /> }
                                                            .into_any()
                                                    }
                                                };
                                                view! {
                                                    <div class="flex items-start gap-4 pb-4 border-b border-stone-100 last:border-0">
                                                        <div class="rounded-full bg-stone-100 p-2 mt-1">
                                                            {icon}
                                                        </div>
                                                        <div>
                                                            <p class="font-medium">{activity.message.clone()}</p>
                                                            <p class="text-sm text-stone-500">
                                                                {activity.date.clone()}
                                                            </p>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            </CardBody>
                        </Card>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
