//! Layout shells. A shell wraps whatever page it is given and never consults the route table;
//! the only routing input it sees is the current path, used to highlight navigation.

use crm_ui::{
    AppBar, Avatar, ButtonColor, Cluster, Divider, Drawer, Heading, IconSize, LayoutGap, NavItem,
    NavList, Text, TextRole, TextTone,
};
use leptos::*;

use crate::{config::use_app_config, model::UserProfile, routes::NAV_ENTRIES};

const APP_BAR_AVATAR_PX: u16 = 32;

#[component]
/// Centered, chrome-free container for signed-out pages.
pub fn AuthShell(children: Children) -> impl IntoView {
    view! {
        <div class="crm-auth-shell" data-ui-kind="auth-shell">
            <main data-ui-slot="content">{children()}</main>
        </div>
    }
}

#[component]
/// App bar, permanent side navigation, and a main region holding the nested page.
///
/// The highlighted navigation entry is derived from `current_path` on every change.
pub fn DashboardShell(
    #[prop(into)] current_path: Signal<String>,
    children: Children,
) -> impl IntoView {
    let config = use_app_config();
    let user = UserProfile::mock();
    let drawer_width = config.sidebar_width_px;
    let user_name = user.name.clone();

    view! {
        <div class="crm-dashboard-shell" data-ui-kind="dashboard-shell">
            <AppBar inset_start_px=drawer_width aria_label="Application bar">
                <Heading role=TextRole::Title layout_class="crm-app-bar-title">
                    {config.product_title.clone()}
                </Heading>
                <Cluster gap=LayoutGap::Sm ui_slot="current-user">
                    <Text layout_class="crm-app-bar-user">{user_name}</Text>
                    <Avatar
                        src=user.avatar_url.clone()
                        alt=user.name.clone()
                        size_px=APP_BAR_AVATAR_PX
                        glyph_size=IconSize::Sm
                        color=ButtonColor::Secondary
                    />
                </Cluster>
            </AppBar>
            <Drawer width_px=drawer_width aria_label="Primary navigation">
                <div data-ui-slot="drawer-header">
                    <Heading role=TextRole::Title tone=TextTone::Accent>
                        {config.sidebar_title.clone()}
                    </Heading>
                </div>
                <Divider />
                <NavList>
                    {NAV_ENTRIES
                        .into_iter()
                        .map(|entry| {
                            let active = Signal::derive(move || {
                                current_path.with(|path| entry.is_active(path))
                            });
                            view! {
                                <NavItem
                                    href=entry.path
                                    label=entry.label
                                    icon=entry.icon
                                    active
                                />
                            }
                        })
                        .collect_view()}
                </NavList>
            </Drawer>
            <main data-ui-slot="main" style=format!("margin-left:{drawer_width}px;")>
                <div data-ui-slot="app-bar-spacer" aria-hidden="true"></div>
                {children()}
            </main>
        </div>
    }
}
