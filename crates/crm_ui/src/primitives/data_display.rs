use super::*;

#[component]
/// Shared card surface. Compose with [`CardHeader`], [`CardContent`], and [`CardActions`].
pub fn Card(
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-slot=ui_slot
            data-ui-elevation=elevation.token()
        >
            {children()}
        </article>
    }
}

#[component]
/// Card header with title, subheader, and a trailing action slot.
pub fn CardHeader(
    #[prop(optional_no_strip)] title: Option<String>,
    #[prop(optional_no_strip)] subheader: Option<String>,
    #[prop(optional_no_strip)] action: Option<View>,
) -> impl IntoView {
    view! {
        <header class="ui-card-header" data-ui-primitive="true" data-ui-kind="card-header">
            <div data-ui-slot="copy">
                {title.map(|title| view! { <h2 data-ui-slot="title">{title}</h2> })}
                {subheader.map(|subheader| view! { <p data-ui-slot="subheader">{subheader}</p> })}
            </div>
            {action.map(|action| view! { <div data-ui-slot="action">{action}</div> })}
        </header>
    }
}

#[component]
/// Padded card body.
pub fn CardContent(children: Children) -> impl IntoView {
    view! {
        <div class="ui-card-content" data-ui-primitive="true" data-ui-kind="card-content">
            {children()}
        </div>
    }
}

#[component]
/// Card footer holding action buttons.
pub fn CardActions(children: Children) -> impl IntoView {
    view! {
        <footer class="ui-card-actions" data-ui-primitive="true" data-ui-kind="card-actions">
            {children()}
        </footer>
    }
}

#[component]
/// Horizontal rule separating card regions or drawer sections.
pub fn Divider() -> impl IntoView {
    view! { <hr class="ui-divider" data-ui-primitive="true" data-ui-kind="divider" /> }
}

#[component]
/// Shared text primitive.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] strong: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
            data-ui-strong=bool_token(strong)
        >
            {children()}
        </span>
    }
}

#[component]
/// Shared heading primitive.
pub fn Heading(
    #[prop(default = TextRole::Display)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h1
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-slot=ui_slot
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </h1>
    }
}

#[component]
/// Compact pill label.
pub fn Chip(
    #[prop(into)] label: String,
    #[prop(default = ButtonColor::Primary)] color: ButtonColor,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-chip", layout_class)
            data-ui-primitive="true"
            data-ui-kind="chip"
            data-ui-color=color.token()
        >
            {label}
        </span>
    }
}

#[component]
/// Circular avatar showing an image when `src` is present, otherwise a person glyph.
pub fn Avatar(
    #[prop(optional_no_strip)] src: Option<String>,
    #[prop(into)] alt: String,
    /// Diameter in pixels.
    #[prop(default = 32)]
    size_px: u16,
    #[prop(default = IconSize::Sm)] glyph_size: IconSize,
    #[prop(default = ButtonColor::Secondary)] color: ButtonColor,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let src = src.filter(|src| !src.is_empty());
    let has_image = src.is_some();

    view! {
        <span
            class=merge_layout_class("ui-avatar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="avatar"
            data-ui-color=color.token()
            data-ui-fallback=bool_token(!has_image)
            style=format!("width:{size_px}px;height:{size_px}px;")
            title=alt.clone()
        >
            {match src {
                Some(src) => view! { <img src=src alt=alt data-ui-slot="image" /> }.into_view(),
                None => view! { <Icon icon=IconName::Person size=glyph_size /> }.into_view(),
            }}
        </span>
    }
}

#[component]
/// Tinted informational banner.
pub fn Notice(
    #[prop(default = TextTone::Info)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-notice", layout_class)
            role="note"
            data-ui-primitive="true"
            data-ui-kind="notice"
            data-ui-tone=tone.token()
        >
            {children()}
        </div>
    }
}
