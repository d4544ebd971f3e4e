//! Thin wrappers over the toolkit that fix the app's default styling and prop conventions.

use crm_ui::{
    Button, ButtonColor, ButtonSize, ButtonType, ButtonVariant, Card, CardActions, CardContent,
    CardHeader, CircularProgress, Divider, Elevation, IconName, TextArea, TextField,
};
use leptos::ev::{Event, MouseEvent};
use leptos::*;

/// Row count used for multiline inputs that do not specify one.
pub const DEFAULT_MULTILINE_ROWS: u16 = 4;

const SPINNER_SIZE_PX: u16 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Rendered state of an [`ActionButton`] for one combination of inputs.
pub struct ActionButtonState {
    pub disabled: bool,
    pub show_spinner: bool,
    /// The label stays in the layout but is not painted.
    pub label_hidden: bool,
    pub show_start_icon: bool,
    pub show_end_icon: bool,
}

impl ActionButtonState {
    pub const fn derive(loading: bool, disabled: bool, has_start: bool, has_end: bool) -> Self {
        Self {
            disabled: disabled || loading,
            show_spinner: loading,
            label_hidden: loading,
            show_start_icon: has_start && !loading,
            show_end_icon: has_end && !loading,
        }
    }
}

#[component]
/// Button with a built-in loading state.
///
/// While `loading` is set the button is disabled, its icons are dropped, and a spinner is drawn
/// over the hidden label so the button keeps its width.
pub fn ActionButton(
    #[prop(default = ButtonVariant::Contained)] variant: ButtonVariant,
    #[prop(default = ButtonColor::Primary)] color: ButtonColor,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] start_icon: Option<IconName>,
    #[prop(optional)] end_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let state = Signal::derive(move || {
        ActionButtonState::derive(
            loading.get(),
            disabled.get(),
            start_icon.is_some(),
            end_icon.is_some(),
        )
    });
    let click = Callback::new(move |ev: MouseEvent| {
        if let Some(on_click) = on_click {
            on_click.call(ev);
        }
    });

    view! {
        <Button
            variant
            color
            size
            button_type
            full_width
            layout_class="crm-action-button"
            busy=Signal::derive(move || state.get().show_spinner)
            disabled=Signal::derive(move || state.get().disabled)
            leading_icon=Signal::derive(move || start_icon.filter(|_| state.get().show_start_icon))
            trailing_icon=Signal::derive(move || end_icon.filter(|_| state.get().show_end_icon))
            on_click=click
        >
            <Show when=move || state.get().show_spinner fallback=|| ()>
                <CircularProgress size_px=SPINNER_SIZE_PX ui_slot="overlay" />
            </Show>
            <span
                data-ui-slot="label"
                style=move || if state.get().label_hidden { "visibility:hidden;" } else { "" }
            >
                {children()}
            </span>
        </Button>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which optional regions a [`ContentCard`] renders.
pub struct CardSections {
    pub header: bool,
    pub footer: bool,
}

impl CardSections {
    pub const fn derive(
        has_title: bool,
        has_subtitle: bool,
        has_action: bool,
        has_card_actions: bool,
    ) -> Self {
        Self {
            header: has_title || has_subtitle || has_action,
            footer: has_card_actions,
        }
    }
}

#[component]
/// Card with an optional header and footer, each separated from the body by a divider.
pub fn ContentCard(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] subtitle: Option<String>,
    /// Trailing header control.
    #[prop(optional)]
    action: Option<View>,
    /// Footer content.
    #[prop(optional)]
    card_actions: Option<View>,
    #[prop(default = Elevation::Raised)] elevation: Elevation,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let sections = CardSections::derive(
        title.is_some(),
        subtitle.is_some(),
        action.is_some(),
        card_actions.is_some(),
    );

    view! {
        <Card elevation layout_class="crm-content-card" ui_slot=ui_slot.unwrap_or("content-card")>
            {sections.header.then(|| {
                view! {
                    <CardHeader title subheader=subtitle action />
                    <Divider />
                }
            })}
            <CardContent>{children()}</CardContent>
            {card_actions.map(|card_actions| {
                view! {
                    <Divider />
                    <CardActions>{card_actions}</CardActions>
                }
            })}
        </Card>
    }
}

/// Row count for an input: `None` unless the input is multiline.
pub fn effective_rows(multiline: bool, rows: Option<u16>) -> Option<u16> {
    multiline.then(|| rows.unwrap_or(DEFAULT_MULTILINE_ROWS))
}

#[component]
/// Fully controlled labeled input. `value` is the only source of the displayed text.
///
/// `name` identifies the field in input events and must not be empty.
pub fn LabeledInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_change: Option<Callback<Event>>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] helper_text: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] multiline: bool,
    /// Visible rows; ignored unless `multiline` is set.
    #[prop(optional)]
    rows: Option<u16>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] autofocus: bool,
) -> impl IntoView {
    debug_assert!(!name.trim().is_empty(), "LabeledInput requires a non-empty name");

    let forward = Callback::new(move |ev: Event| {
        if let Some(on_change) = on_change {
            on_change.call(ev);
        }
    });

    match effective_rows(multiline, rows) {
        Some(rows) => view! {
            <TextArea
                name
                label
                rows
                placeholder
                autofocus
                required
                layout_class="crm-labeled-input"
                value
                disabled
                error
                helper_text
                on_input=forward
            />
        }
        .into_view(),
        None => view! {
            <TextField
                name
                label
                input_type
                placeholder
                autocomplete
                autofocus
                required
                layout_class="crm-labeled-input"
                value
                disabled
                error
                helper_text
                on_input=forward
            />
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn loading_forces_disabled_and_suppresses_icons() {
        assert_eq!(
            ActionButtonState::derive(true, false, true, true),
            ActionButtonState {
                disabled: true,
                show_spinner: true,
                label_hidden: true,
                show_start_icon: false,
                show_end_icon: false,
            }
        );
    }

    #[test]
    fn idle_button_is_plain() {
        let state = ActionButtonState::derive(false, false, true, false);
        assert!(!state.disabled);
        assert!(!state.show_spinner);
        assert!(!state.label_hidden);
        assert!(state.show_start_icon);
        assert!(!state.show_end_icon);
        assert!(ActionButtonState::derive(false, true, false, false).disabled);
    }

    #[test]
    fn header_renders_when_any_header_prop_is_present() {
        assert!(!CardSections::derive(false, false, false, false).header);
        assert!(CardSections::derive(true, false, false, false).header);
        assert!(CardSections::derive(false, true, false, false).header);
        assert!(CardSections::derive(false, false, true, false).header);
    }

    #[test]
    fn footer_renders_only_with_card_actions() {
        assert!(!CardSections::derive(true, true, true, false).footer);
        assert!(CardSections::derive(false, false, false, true).footer);
    }

    #[test]
    fn rows_apply_only_to_multiline_inputs() {
        assert_eq!(effective_rows(false, Some(8)), None);
        assert_eq!(effective_rows(true, Some(8)), Some(8));
        assert_eq!(effective_rows(true, None), Some(DEFAULT_MULTILINE_ROWS));
    }
}
