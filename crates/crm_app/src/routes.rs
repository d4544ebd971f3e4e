//! Route table and path resolution.
//!
//! The table is plain data evaluated top to bottom, first match wins. Resolution is two-level:
//! a path resolves to a [`RouteTarget`] (a shell/page pair or a redirect), and the shell is a
//! container that receives the page view as its content. Shells never inspect the table.

use crm_ui::IconName;
use thiserror::Error;

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const PROFILE_PATH: &str = "/profile";

const MAX_REDIRECT_HOPS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Layout container a page renders inside.
pub enum ShellKind {
    /// Centered, chrome-free layout for signed-out pages.
    Unauthenticated,
    /// App bar plus permanent side navigation.
    Authenticated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Routed page.
pub enum PageKind {
    Login,
    Dashboard,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How a route entry matches a normalized path.
pub enum RouteMatcher {
    /// Matches this path, ignoring ASCII case.
    Exact(&'static str),
    /// Matches any path.
    CatchAll,
}

impl RouteMatcher {
    pub fn matches(self, path: &str) -> bool {
        match self {
            Self::Exact(expected) => expected.eq_ignore_ascii_case(path),
            Self::CatchAll => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a matched route does.
pub enum RouteTarget {
    /// Render `page` inside `shell`.
    Render { shell: ShellKind, page: PageKind },
    /// Navigate elsewhere. `replace` swaps the current history entry instead of pushing.
    Redirect { to: &'static str, replace: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub matcher: RouteMatcher,
    pub target: RouteTarget,
}

/// The application's routes in evaluation order.
pub const ROUTE_TABLE: [RouteEntry; 5] = [
    RouteEntry {
        matcher: RouteMatcher::Exact(ROOT_PATH),
        target: RouteTarget::Redirect {
            to: LOGIN_PATH,
            replace: true,
        },
    },
    RouteEntry {
        matcher: RouteMatcher::Exact(LOGIN_PATH),
        target: RouteTarget::Render {
            shell: ShellKind::Unauthenticated,
            page: PageKind::Login,
        },
    },
    RouteEntry {
        matcher: RouteMatcher::Exact(DASHBOARD_PATH),
        target: RouteTarget::Render {
            shell: ShellKind::Authenticated,
            page: PageKind::Dashboard,
        },
    },
    RouteEntry {
        matcher: RouteMatcher::Exact(PROFILE_PATH),
        target: RouteTarget::Render {
            shell: ShellKind::Authenticated,
            page: PageKind::Profile,
        },
    },
    RouteEntry {
        matcher: RouteMatcher::CatchAll,
        target: RouteTarget::Redirect {
            to: LOGIN_PATH,
            replace: true,
        },
    },
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Redirects kept chaining without reaching a renderable route.
    #[error("redirect chain starting at `{start}` did not settle after {hops} hops")]
    RedirectLoop { start: String, hops: usize },
}

/// Strips query string, fragment, and trailing slashes. An empty result becomes `/`.
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let trimmed = raw[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_PATH
    } else {
        trimmed
    }
}

/// Returns the target of the first route entry matching `path`.
pub fn resolve_route(path: &str) -> RouteTarget {
    let path = normalize_path(path);
    ROUTE_TABLE
        .iter()
        .find(|entry| entry.matcher.matches(path))
        .map(|entry| entry.target)
        // The table ends with a catch-all.
        .unwrap_or(RouteTarget::Redirect {
            to: LOGIN_PATH,
            replace: true,
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The shell/page pair a path finally renders, after following redirects.
pub struct ResolvedView {
    pub path: &'static str,
    pub shell: ShellKind,
    pub page: PageKind,
}

/// Follows redirects from `path` until a renderable route is reached.
///
/// # Errors
///
/// Returns [`RouteError::RedirectLoop`] if redirects do not settle.
pub fn resolve_view(path: &str) -> Result<ResolvedView, RouteError> {
    let mut current = normalize_path(path);
    let mut settled_path: &'static str = LOGIN_PATH;
    for _ in 0..=MAX_REDIRECT_HOPS {
        match resolve_route(current) {
            RouteTarget::Render { shell, page } => {
                let path = ROUTE_TABLE
                    .iter()
                    .find_map(|entry| match entry.matcher {
                        RouteMatcher::Exact(exact) if exact.eq_ignore_ascii_case(current) => {
                            Some(exact)
                        }
                        _ => None,
                    })
                    .unwrap_or(settled_path);
                return Ok(ResolvedView { path, shell, page });
            }
            RouteTarget::Redirect { to, .. } => {
                current = to;
                settled_path = to;
            }
        }
    }
    Err(RouteError::RedirectLoop {
        start: path.to_string(),
        hops: MAX_REDIRECT_HOPS,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side navigation entry.
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: IconName,
}

/// Side navigation entries in display order.
pub const NAV_ENTRIES: [NavEntry; 2] = [
    NavEntry {
        label: "Dashboard",
        path: DASHBOARD_PATH,
        icon: IconName::Dashboard,
    },
    NavEntry {
        label: "Profile",
        path: PROFILE_PATH,
        icon: IconName::Person,
    },
];

impl NavEntry {
    /// Whether this entry should be highlighted for `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        normalize_path(current_path).eq_ignore_ascii_case(self.path)
    }
}

/// The navigation entry highlighted for `current_path`, derived on every call.
pub fn active_nav_entry(current_path: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES
        .iter()
        .find(|entry| entry.is_active(current_path))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(shell: ShellKind, page: PageKind) -> RouteTarget {
        RouteTarget::Render { shell, page }
    }

    const TO_LOGIN: RouteTarget = RouteTarget::Redirect {
        to: LOGIN_PATH,
        replace: true,
    };

    #[test]
    fn table_has_exactly_one_root_redirect_and_one_catch_all() {
        let roots = ROUTE_TABLE
            .iter()
            .filter(|entry| entry.matcher == RouteMatcher::Exact(ROOT_PATH))
            .count();
        let catch_alls = ROUTE_TABLE
            .iter()
            .filter(|entry| entry.matcher == RouteMatcher::CatchAll)
            .count();
        assert_eq!(roots, 1);
        assert_eq!(catch_alls, 1);
        assert_eq!(ROUTE_TABLE.last().map(|entry| entry.matcher), Some(RouteMatcher::CatchAll));
    }

    #[test]
    fn known_paths_resolve_to_their_shell_and_page() {
        assert_eq!(resolve_route("/"), TO_LOGIN);
        assert_eq!(
            resolve_route("/login"),
            render(ShellKind::Unauthenticated, PageKind::Login)
        );
        assert_eq!(
            resolve_route("/dashboard"),
            render(ShellKind::Authenticated, PageKind::Dashboard)
        );
        assert_eq!(
            resolve_route("/profile"),
            render(ShellKind::Authenticated, PageKind::Profile)
        );
    }

    #[test]
    fn unknown_paths_redirect_to_login_with_replace() {
        for path in ["/unknown-path", "/login/extra", "/settings", "//x"] {
            assert_eq!(resolve_route(path), TO_LOGIN, "{path}");
        }
    }

    #[test]
    fn path_matching_ignores_case() {
        assert_eq!(
            resolve_route("/Dashboard"),
            render(ShellKind::Authenticated, PageKind::Dashboard)
        );
        assert_eq!(
            resolve_route("/PROFILE/"),
            render(ShellKind::Authenticated, PageKind::Profile)
        );
        assert_eq!(
            resolve_view("/LOGIN").expect("settles"),
            ResolvedView {
                path: LOGIN_PATH,
                shell: ShellKind::Unauthenticated,
                page: PageKind::Login,
            }
        );
        assert_eq!(active_nav_entry("/Profile").map(|e| e.label), Some("Profile"));
    }

    #[test]
    fn unknown_path_renders_the_same_view_as_root() {
        let from_unknown = resolve_view("/unknown-path").expect("settles");
        let from_root = resolve_view("/").expect("settles");
        assert_eq!(from_unknown, from_root);
        assert_eq!(
            from_unknown,
            ResolvedView {
                path: LOGIN_PATH,
                shell: ShellKind::Unauthenticated,
                page: PageKind::Login,
            }
        );
    }

    #[test]
    fn authenticated_pages_are_reachable_without_a_session() {
        let view = resolve_view("/profile").expect("settles");
        assert_eq!(view.shell, ShellKind::Authenticated);
        assert_eq!(view.page, PageKind::Profile);
    }

    #[test]
    fn normalization_ignores_query_fragment_and_trailing_slash() {
        assert_eq!(normalize_path("/login/"), "/login");
        assert_eq!(normalize_path("/dashboard?tab=1#top"), "/dashboard");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(
            resolve_route("/profile/?x=1"),
            render(ShellKind::Authenticated, PageKind::Profile)
        );
    }

    #[test]
    fn profile_path_highlights_only_the_profile_entry() {
        let active: Vec<&str> = NAV_ENTRIES
            .iter()
            .filter(|entry| entry.is_active("/profile"))
            .map(|entry| entry.label)
            .collect();
        assert_eq!(active, vec!["Profile"]);
        assert_eq!(active_nav_entry("/dashboard").map(|e| e.label), Some("Dashboard"));
        assert_eq!(active_nav_entry("/login"), None);
    }

    #[test]
    fn every_nav_entry_targets_an_authenticated_route() {
        for entry in NAV_ENTRIES {
            assert!(matches!(
                resolve_route(entry.path),
                RouteTarget::Render {
                    shell: ShellKind::Authenticated,
                    ..
                }
            ));
        }
    }
}
