use crm_ui::{
    Avatar, ButtonColor, ButtonSize, Chip, Cluster, Elevation, Heading, IconSize, LayoutGap,
    LayoutJustify, Notice, Stack, Text, TextRole, TextTone,
};
use leptos::ev::{Event, MouseEvent};
use leptos::*;

use crate::{
    model::{AccountStatus, UserProfile},
    profile::{reduce_profile, ProfileAction, ProfileState},
};

use super::{ActionButton, ContentCard, LabeledInput};

const PROFILE_AVATAR_PX: u16 = 80;

#[component]
/// Current-user details with a view/edit toggle. Nothing is saved.
pub fn ProfilePage() -> impl IntoView {
    let state = create_rw_signal(ProfileState::new(UserProfile::mock()));

    let dispatch = Callback::new(move |action: ProfileAction| {
        let mut next = state.get_untracked();
        match reduce_profile(&mut next, action) {
            Ok(effects) => {
                state.set(next);
                for effect in effects {
                    logging::log!("{}", effect.console_line());
                }
            }
            Err(err) => logging::warn!("profile reducer error: {err}"),
        }
    });

    let mode = Signal::derive(move || state.with(|profile| profile.mode));
    let profile = state.with_untracked(|profile| profile.profile.clone());

    let toggle_button = (move || {
        let mode = mode.get();
        view! {
            <ActionButton
                variant=mode.toggle_variant()
                color=ButtonColor::Primary
                size=ButtonSize::Sm
                on_click=Callback::new(move |_: MouseEvent| dispatch.call(ProfileAction::ToggleEdit))
            >
                {mode.toggle_label()}
            </ActionButton>
        }
    })
    .into_view();
    let role_label = profile.role.clone();

    view! {
        <Stack gap=LayoutGap::Lg layout_class="crm-profile-page" ui_slot="profile-page">
            <header data-ui-slot="page-header">
                <Heading>"My Profile"</Heading>
                <Text tone=TextTone::Secondary>"View and manage your account information"</Text>
            </header>
            <ContentCard
                title="Profile Information"
                subtitle="Your personal details and account settings"
                action=toggle_button
                elevation=Elevation::Raised
            >
                <Stack gap=LayoutGap::Lg>
                    <Cluster gap=LayoutGap::Md ui_slot="profile-identity">
                        <Avatar
                            src=profile.avatar_url.clone()
                            alt=profile.name.clone()
                            size_px=PROFILE_AVATAR_PX
                            glyph_size=IconSize::Lg
                            color=ButtonColor::Primary
                        />
                        <Stack gap=LayoutGap::Sm>
                            <Heading role=TextRole::Title>
                                {move || state.with(|profile| profile.displayed_name().to_string())}
                            </Heading>
                            <Chip label=role_label color=ButtonColor::Primary />
                        </Stack>
                    </Cluster>
                    <LabeledInput
                        label="Full Name"
                        name="name"
                        value=Signal::derive(move || {
                            state.with(|profile| profile.name_field_value().to_string())
                        })
                        on_change=Callback::new(move |ev: Event| {
                            dispatch.call(ProfileAction::EditName(event_target_value(&ev)));
                        })
                        disabled=Signal::derive(move || !mode.get().is_editing())
                        placeholder="Enter your full name"
                    />
                    <LabeledInput
                        label="Email Address"
                        name="email"
                        input_type="email"
                        value=profile.email.clone()
                        disabled=true
                        helper_text="Email cannot be changed"
                    />
                    <LabeledInput
                        label="Role"
                        name="role"
                        value=profile.role.clone()
                        disabled=true
                        helper_text="Role is managed by administrators"
                    />
                    <Show when=move || state.with(ProfileState::banner_visible) fallback=|| ()>
                        <Notice tone=TextTone::Info>
                            <Text tone=TextTone::Info>
                                <strong>"Note:"</strong>
                                " This is a UI-only demo. No save functionality is implemented yet. Changes will not be persisted."
                            </Text>
                        </Notice>
                    </Show>
                </Stack>
            </ContentCard>
            <AccountStatusCard status=AccountStatus::mock() />
        </Stack>
    }
}

#[component]
fn AccountStatusCard(status: AccountStatus) -> impl IntoView {
    view! {
        <ContentCard title="Account Status" elevation=Elevation::Raised ui_slot="account-status">
            <Stack gap=LayoutGap::Md>
                <Cluster justify=LayoutJustify::Between>
                    <Text tone=TextTone::Secondary>"Account Status"</Text>
                    <Chip label=status.status_label color=status.status_color />
                </Cluster>
                <Cluster justify=LayoutJustify::Between>
                    <Text tone=TextTone::Secondary>"Member Since"</Text>
                    <Text strong=true>{status.member_since}</Text>
                </Cluster>
                <Cluster justify=LayoutJustify::Between>
                    <Text tone=TextTone::Secondary>"Last Login"</Text>
                    <Text strong=true>{status.last_login}</Text>
                </Cluster>
            </Stack>
        </ContentCard>
    }
}
