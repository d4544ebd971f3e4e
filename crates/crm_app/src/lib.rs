//! CRM front end: route table, layout shells, pages, and the login validation pipeline.
//!
//! State transitions live in plain reducers ([`login::reduce_login`], [`profile::reduce_profile`])
//! that return side-effect intents; components own the signals, run the effects, and stay thin.
//! Routing is resolved as data in [`routes`] so the hosting crate decides how to navigate.

pub mod components;
pub mod config;
pub mod login;
pub mod model;
pub mod profile;
pub mod routes;
pub mod validation;

pub use components::{render_page, AuthShell, DashboardShell, RoutedShell};
pub use config::{provide_app_config, use_app_config, AppConfig, ConfigError};
pub use routes::{
    resolve_route, resolve_view, PageKind, ResolvedView, RouteError, RouteTarget, ShellKind,
};
