use super::*;

#[component]
/// Fixed top application bar.
///
/// `inset_start_px` shifts the bar right so it sits beside a permanent [`Drawer`].
pub fn AppBar(
    #[prop(optional)] inset_start_px: u16,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-app-bar", layout_class)
            role="banner"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="app-bar"
            data-ui-position="fixed"
            style=format!("left:{inset_start_px}px;width:calc(100% - {inset_start_px}px);")
        >
            <div data-ui-slot="toolbar">{children()}</div>
        </header>
    }
}

#[component]
/// Permanent side drawer anchored to the left edge.
pub fn Drawer(
    width_px: u16,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <nav
            class=merge_layout_class("ui-drawer", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="drawer"
            data-ui-variant="permanent"
            data-ui-anchor="left"
            style=format!("width:{width_px}px;flex-basis:{width_px}px;")
        >
            {children()}
        </nav>
    }
}

#[component]
/// Vertical list of navigation entries.
pub fn NavList(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-nav-list", layout_class)
            data-ui-primitive="true"
            data-ui-kind="nav-list"
        >
            {children()}
        </ul>
    }
}

#[component]
/// Navigation entry linking to `href`.
///
/// Same-origin anchors are intercepted by the router, so the entry stays router-agnostic. The
/// caller supplies `active`; an active entry gets `aria-current="page"` and the highlight tokens.
pub fn NavItem(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    icon: IconName,
    #[prop(optional, into)] active: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <li
            class="ui-nav-item"
            data-ui-primitive="true"
            data-ui-kind="nav-item"
            data-ui-active=move || bool_token(active.get())
        >
            <a
                href=href
                data-ui-slot="link"
                aria-current=move || active.get().then_some("page")
            >
                <span data-ui-slot="icon"><Icon icon size=IconSize::Md /></span>
                <span data-ui-slot="label">{label}</span>
            </a>
        </li>
    }
}
