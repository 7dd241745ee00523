use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params};
use leptos_router::params::Params;
use phosphor_leptos::{Icon, ARROW_LEFT, BOOK_OPEN, DOTS_THREE, USERS};

use crate::actions;
use crate::components::design_system::{
    Avatar, Badge, BadgeVariant, Card, CardBody, Dropdown, DropdownItem, TabList, TabPanel,
};
use crate::components::discussions::ChatInterface;
use crate::data;
use crate::services::notification_service::{show_error, show_info, show_success};
use crate::services::session::use_session_state;

/// Route params for the discussion detail page
#[derive(Params, PartialEq, Clone, Default)]
pub struct DiscussionParams {
    pub id: Option<String>,
}

#[component]
pub fn DiscussionDetail() -> impl IntoView {
    let session = use_session_state();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.current_user().is_none() {
            navigate("/sign-in", Default::default());
        }
    });

    let params = use_params::<DiscussionParams>();
    let discussion_id = Memo::new(move |_| {
        params
            .get()
            .ok()
            .and_then(|p| p.id)
            .unwrap_or_default()
    });

    let active_tab = RwSignal::new("chat".to_string());

    view! {
        <div class="container mx-auto px-4 py-10">
            {move || {
                let id = discussion_id.get();
                match data::discussion_by_id(&id) {
                    None => {
                        view! {
                            <div class="py-12 text-center text-stone-500">
                                "Discussion not found."
                                <A href="/discussions" attr:class="block mt-2 text-purple-600 underline">
                                    "Back to discussions"
                                </A>
                            </div>
                        }
                            .into_any()
                    }
                    Some(discussion) => {
                        let dv = StoredValue::new(discussion.clone());
                        view! {
                            <div class="flex items-center gap-4 mb-6">
                                <A
                                    href="/discussions"
                                    attr:class="p-2 rounded-md text-stone-600 hover:bg-stone-100"
                                >
                                    <Icon icon=ARROW_LEFT size="20px" />
                                </A>
                                <div class="flex-1">
                                    <h1 class="text-3xl font-bold tracking-tight">
                                        {discussion.title.clone()}
                                    </h1>
                                    <div class="flex items-center gap-2 text-stone-500">
                                        <Icon icon=BOOK_OPEN size="16px" />
                                        <span>{discussion.book.clone()}</span>
                                        {discussion
                                            .is_private
                                            .then(|| {
                                                view! {
                                                    <Badge variant=BadgeVariant::Outline class="ml-2">
                                                        "Private"
                                                    </Badge>
                                                }
                                            })}
                                    </div>
                                </div>
                                <Dropdown trigger=|| {
                                    view! { <Icon icon=DOTS_THREE size="20px" /> }.into_any()
                                }>
                                    <DropdownItem on_select=Callback::new(move |_| {
                                        show_info(
                                            "Invitations",
                                            Some("Invite links are coming soon"),
                                        )
                                    })>"Invite Members"</DropdownItem>
                                    <DropdownItem on_select=Callback::new(move |_| {
                                        let id = dv.get_value().id;
                                        let user = session.current_user();
                                        spawn_local(async move {
                                            match actions::leave_discussion(user.as_ref(), &id).await {
                                                Ok(()) => show_success(
                                                    "Left discussion",
                                                    Some("You are no longer a member of this group"),
                                                ),
                                                Err(e) => {
                                                    log::error!("leave_discussion failed: {e}");
                                                    show_error("Error", Some("Failed to leave discussion"));
                                                }
                                            }
                                        });
                                    })>"Leave Discussion"</DropdownItem>
                                    {discussion
                                        .is_creator
                                        .then(|| {
                                            view! {
                                                <DropdownItem
                                                    class="text-red-600"
                                                    on_select=Callback::new(move |_| {
                                                        show_info(
                                                            "Delete Discussion",
                                                            Some("Deleting groups is coming soon"),
                                                        )
                                                    })
                                                >
                                                    "Delete Discussion"
                                                </DropdownItem>
                                            }
                                        })}
                                </Dropdown>
                            </div>

                            <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
                                <div class="lg:col-span-3">
                                    <TabList
                                        tabs=vec![
                                            ("chat".to_string(), "Chat".to_string()),
                                            ("about".to_string(), "About".to_string()),
                                        ]
                                        active=active_tab
                                        class="mb-4"
                                    />
                                    <TabPanel value="chat" active=active_tab>
                                        <ChatInterface discussion_id=dv.get_value().id />
                                    </TabPanel>
                                    <TabPanel value="about" active=active_tab>
                                        <Card>
                                            <CardBody class="pt-4">
                                                <h3 class="text-lg font-semibold mb-2">
                                                    "About this Discussion"
                                                </h3>
                                                <p class="text-stone-500 mb-4">
                                                    {dv.get_value().description}
                                                </p>

                                                <h4 class="font-medium mb-2">"Created by"</h4>
                                                <div class="flex items-center gap-2 mb-4">
                                                    <Avatar
                                                        name=dv.get_value().creator.name
                                                        image=dv.get_value().creator.image
                                                    />
                                                    <span>{dv.get_value().creator.name}</span>
                                                </div>

                                                <h4 class="font-medium mb-2">"Created on"</h4>
                                                <p class="text-stone-500 mb-4">
                                                    {dv.get_value().created_at}
                                                </p>

                                                <h4 class="font-medium mb-2">"Book Information"</h4>
                                                <div class="flex items-start gap-4">
                                                    <img
                                                        src=dv.get_value().book_cover
                                                        alt=dv.get_value().book
                                                        class="h-24 w-16 object-cover rounded"
                                                    />
                                                    <div>
                                                        <h5 class="font-medium">{dv.get_value().book}</h5>
                                                        <p class="text-sm text-stone-500">
                                                            {dv.get_value().book_author}
                                                        </p>
                                                        <p class="text-sm mt-2">
                                                            {dv.get_value().book_description}
                                                        </p>
                                                    </div>
                                                </div>
                                            </CardBody>
                                        </Card>
                                    </TabPanel>
                                </div>

                                <div class="lg:col-span-1">
                                    <Card>
                                        <CardBody class="pt-4">
                                            <div class="flex items-center justify-between mb-4">
                                                <h3 class="font-semibold">"Members"</h3>
                                                <div class="flex items-center gap-1 text-sm text-stone-500">
                                                    <Icon icon=USERS size="16px" />
                                                    <span>{discussion.members.len()}</span>
                                                </div>
                                            </div>
                                            <div class="space-y-3 max-h-[400px] overflow-y-auto pr-2">
                                                {discussion
                                                    .members
                                                    .iter()
                                                    .map(|member| {
                                                        view! {
                                                            <div class="flex items-center justify-between">
                                                                <div class="flex items-center gap-2">
                                                                    <Avatar
                                                                        name=member.name.clone()
                                                                        image=member.image.clone()
                                                                    />
                                                                    <div>
                                                                        <div class="font-medium text-sm leading-none">
                                                                            {member.name.clone()}
                                                                        </div>
                                                                        {member
                                                                            .is_creator
                                                                            .then(|| {
                                                                                view! {
                                                                                    <div class="text-xs text-stone-500">"Creator"</div>
                                                                                }
                                                                            })}
                                                                    </div>
                                                                </div>
                                                                <div
                                                                    class="h-2 w-2 rounded-full bg-green-500"
                                                                    title="Online"
                                                                ></div>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </CardBody>
                                    </Card>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
