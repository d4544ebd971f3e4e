//! Centralized icon abstraction for the CRM toolkit.
//!
//! Components refer to icons by semantic [`IconName`] and render them through the single
//! [`Icon`] SVG renderer, so pages never embed raw SVG strings. The glyphs are filled 24px
//! paths in the Material icon style.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shells, pages, and primitives.
pub enum IconName {
    /// Dashboard navigation glyph.
    Dashboard,
    /// Single person / profile glyph.
    Person,
    /// Group of people (customers KPI).
    People,
    /// Upward trend line (leads KPI).
    TrendingUp,
    /// Handshake (deals KPI).
    Handshake,
    /// Informational circle.
    Info,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Person => "person",
            Self::People => "people",
            Self::TrendingUp => "trending-up",
            Self::Handshake => "handshake",
            Self::Info => "info",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Dashboard => {
                r#"<path d="M3 13h8V3H3v10Zm0 8h8v-6H3v6Zm10 0h8V11h-8v10Zm0-18v6h8V3h-8Z"/>"#
            }
            Self::Person => {
                r#"<path d="M12 12c2.21 0 4-1.79 4-4s-1.79-4-4-4-4 1.79-4 4 1.79 4 4 4Zm0 2c-2.67 0-8 1.34-8 4v2h16v-2c0-2.66-5.33-4-8-4Z"/>"#
            }
            Self::People => {
                r#"<path d="M16 11c1.66 0 2.99-1.34 2.99-3S17.66 5 16 5s-3 1.34-3 3 1.34 3 3 3Zm-8 0c1.66 0 2.99-1.34 2.99-3S9.66 5 8 5 5 6.34 5 8s1.34 3 3 3Zm0 2c-2.33 0-7 1.17-7 3.5V19h14v-2.5c0-2.33-4.67-3.5-7-3.5Zm8 0c-.29 0-.62.02-.97.05 1.16.84 1.97 1.97 1.97 3.45V19h6v-2.5c0-2.33-4.67-3.5-7-3.5Z"/>"#
            }
            Self::TrendingUp => {
                r#"<path d="m16 6 2.29 2.29-4.88 4.88-4-4L2 16.59 3.41 18l6-6 4 4 6.3-6.29L22 12V6h-6Z"/>"#
            }
            Self::Handshake => {
                r#"<path d="M12.22 19.85a.97.97 0 0 1-1.37 0l-.7-.7 3.18-3.19-1.06-1.06-3.19 3.18-.7-.7 3.18-3.19-1.06-1.06-3.19 3.18-.7-.7 3.18-3.19-1.06-1.06L3.55 15.5l-.7-.7a.97.97 0 0 1 0-1.37l6.36-6.36 2.47 2.47a2.5 2.5 0 0 0 3.54 0l.7-.7 3.9 3.89a.97.97 0 0 1 0 1.37l-7.6 7.75ZM21.19 9.3l-4.95 4.95-5.3-5.3 1.06-1.06.7.7a1 1 0 0 0 1.42-1.42L10.6 4.65a1.5 1.5 0 0 1 2.12 0l3.18 3.18 1.77-1.77 3.52 3.24Z"/>"#
            }
            Self::Info => {
                r#"<path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2Zm1 15h-2v-6h2v6Zm0-8h-2V7h2v2Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized icon sizes.
pub enum IconSize {
    /// 16px icon (dense controls, avatar fallback in the app bar).
    Sm,
    /// 24px icon (navigation entries).
    #[default]
    Md,
    /// 40px icon (KPI tiles).
    Lg,
    /// 48px icon (profile avatar fallback).
    Xl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 24,
            Self::Lg => 40,
            Self::Xl => 48,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Renders an icon SVG from the centralized catalog.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Md)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
