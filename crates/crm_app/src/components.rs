//! Page, shell, and wrapper components.
//!
//! Pages and shells are composed here but never chosen here: the caller resolves the current
//! path through [`crate::routes`] and hands the result to [`RoutedShell`].

mod common;
mod dashboard_page;
mod login_page;
mod profile_page;
mod shells;

use leptos::*;

pub use self::{
    common::{
        effective_rows, ActionButton, ActionButtonState, CardSections, ContentCard, LabeledInput,
        DEFAULT_MULTILINE_ROWS,
    },
    dashboard_page::DashboardPage,
    login_page::LoginPage,
    profile_page::ProfilePage,
    shells::{AuthShell, DashboardShell},
};

use crate::routes::{PageKind, ShellKind};

/// Renders `page` without any surrounding shell.
pub fn render_page(page: PageKind) -> View {
    match page {
        PageKind::Login => view! { <LoginPage /> }.into_view(),
        PageKind::Dashboard => view! { <DashboardPage /> }.into_view(),
        PageKind::Profile => view! { <ProfilePage /> }.into_view(),
    }
}

#[component]
/// Renders `shell` around whichever page is currently routed.
///
/// The shell is built once; only its content follows `page`. Navigating between two pages of
/// the same shell therefore keeps the shell mounted.
pub fn RoutedShell(
    shell: ShellKind,
    #[prop(into)] current_path: Signal<String>,
    #[prop(into)] page: Signal<Option<PageKind>>,
) -> impl IntoView {
    let content = move || page.get().map(render_page);
    match shell {
        ShellKind::Unauthenticated => view! { <AuthShell>{content}</AuthShell> }.into_view(),
        ShellKind::Authenticated => {
            view! { <DashboardShell current_path>{content}</DashboardShell> }.into_view()
        }
    }
}
