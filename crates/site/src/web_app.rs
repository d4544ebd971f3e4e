use crm_app::{
    config::{provide_app_config, AppConfig},
    resolve_route, resolve_view, RouteTarget, RoutedShell,
};
use leptos::logging::warn;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::builtin().clone();
    let title = config.product_title.clone();
    let theme_mode = config.theme.mode.token();
    let theme_style = config.theme.css_variables();
    provide_app_config(config);

    view! {
        <Title text=title />
        <Meta name="description" content="Customer relationship management dashboard." />

        <Router>
            <div class="site-root" data-theme=theme_mode style=theme_style>
                <Routes>
                    <Route path="" view=RoutedView />
                    <Route path="/*any" view=RoutedView />
                </Routes>
            </div>
        </Router>
    }
}

#[component]
/// Single outlet for every path: performs the redirect when the path has one and renders the
/// shell/page pair the path settles on, so a redirected path keeps its view mounted.
pub fn RoutedView() -> impl IntoView {
    let pathname = use_location().pathname;
    let target = create_memo(move |_| resolve_route(&pathname.get()));
    let settled = create_memo(move |_| match resolve_view(&pathname.get()) {
        Ok(view) => Some(view),
        Err(err) => {
            warn!("route resolution failed: {err}");
            None
        }
    });
    let shell = create_memo(move |_| settled.get().map(|view| view.shell));
    let page = create_memo(move |_| settled.get().map(|view| view.page));
    let current_path = Signal::from(pathname);

    view! {
        {move || match target.get() {
            RouteTarget::Redirect { to, replace } => {
                let options = NavigateOptions {
                    replace,
                    ..Default::default()
                };
                Some(view! { <Redirect path=to options /> })
            }
            RouteTarget::Render { .. } => None,
        }}
        {move || shell.get().map(|shell| view! { <RoutedShell shell current_path page /> })}
    }
}
