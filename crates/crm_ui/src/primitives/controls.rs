use super::*;

#[component]
/// Shared button primitive with palette, fill, and size tokens plus optional icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Contained)] variant: ButtonVariant,
    #[prop(default = ButtonColor::Primary)] color: ButtonColor,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(default = ButtonType::Button)] button_type: ButtonType,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] leading_icon: MaybeSignal<Option<IconName>>,
    #[prop(optional, into)] trailing_icon: MaybeSignal<Option<IconName>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type.token()
            class=merge_layout_class("ui-button", layout_class)
            aria-label=aria_label
            aria-busy=move || bool_token(busy.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-color=color.token()
            data-ui-size=size.token()
            data-ui-full-width=bool_token(full_width)
            data-ui-state=move || if busy.get() { "busy" } else { "idle" }
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || {
                leading_icon
                    .get()
                    .map(|icon| view! { <span data-ui-slot="start-icon"><Icon icon size=IconSize::Sm /></span> })
            }}
            {children()}
            {move || {
                trailing_icon
                    .get()
                    .map(|icon| view! { <span data-ui-slot="end-icon"><Icon icon size=IconSize::Sm /></span> })
            }}
        </button>
    }
}

#[component]
/// Shared single-line text field with a floating label, error state, and helper text.
///
/// The field is fully controlled: `value` is the only source of the displayed text and every
/// keystroke is forwarded through `on_input`.
pub fn TextField(
    /// Form field name, also used to derive the DOM id.
    #[prop(into)]
    name: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional_no_strip)] placeholder: Option<String>,
    #[prop(optional_no_strip)] autocomplete: Option<&'static str>,
    #[prop(optional)] autofocus: bool,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] helper_text: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<ev::Event>>,
) -> impl IntoView {
    let input_id = format!("field-{name}");
    let helper_id = format!("field-{name}-helper");
    let helper_text = Signal::derive(move || helper_text.get());

    view! {
        <div
            class=merge_layout_class("ui-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-error=move || bool_token(error.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.map(|label| {
                view! {
                    <label data-ui-slot="label" for=input_id.clone()>
                        {label}
                        {required.then(|| view! { <span data-ui-slot="required-mark">" *"</span> })}
                    </label>
                }
            })}
            <input
                id=input_id.clone()
                name=name
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                autocomplete=autocomplete
                autofocus=autofocus
                required=required
                aria-invalid=move || bool_token(error.get())
                aria-describedby=helper_id.clone()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-ui-slot="control"
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(ev);
                    }
                }
            />
            <Show when=move || !helper_text.get().is_empty() fallback=|| ()>
                <span id=helper_id.clone() data-ui-slot="helper-text">
                    {move || helper_text.get()}
                </span>
            </Show>
        </div>
    }
}

#[component]
/// Shared multiline text field. Mirrors [`TextField`] with a fixed row count.
pub fn TextArea(
    #[prop(into)] name: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(default = 3)] rows: u16,
    #[prop(optional_no_strip)] placeholder: Option<String>,
    #[prop(optional)] autofocus: bool,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    #[prop(optional, into)] helper_text: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<ev::Event>>,
) -> impl IntoView {
    let input_id = format!("field-{name}");
    let helper_text = Signal::derive(move || helper_text.get());

    view! {
        <div
            class=merge_layout_class("ui-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-area"
            data-ui-error=move || bool_token(error.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            {label.map(|label| {
                view! {
                    <label data-ui-slot="label" for=input_id.clone()>
                        {label}
                        {required.then(|| view! { <span data-ui-slot="required-mark">" *"</span> })}
                    </label>
                }
            })}
            <textarea
                id=input_id.clone()
                name=name
                rows=rows
                placeholder=placeholder
                autofocus=autofocus
                required=required
                aria-invalid=move || bool_token(error.get())
                prop:value=move || value.get()
                disabled=move || disabled.get()
                data-ui-slot="control"
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(ev);
                    }
                }
            ></textarea>
            <Show when=move || !helper_text.get().is_empty() fallback=|| ()>
                <span data-ui-slot="helper-text">{move || helper_text.get()}</span>
            </Show>
        </div>
    }
}

#[component]
/// Indeterminate circular progress spinner.
pub fn CircularProgress(
    /// Diameter in pixels.
    #[prop(default = 20)]
    size_px: u16,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    let radius = 20.0f32;
    let circumference = 2.0 * std::f32::consts::PI * radius;
    let dash_offset = circumference * 0.75;

    view! {
        <span
            class=merge_layout_class("ui-spinner", layout_class)
            role="progressbar"
            aria-busy="true"
            data-ui-primitive="true"
            data-ui-kind="spinner"
            data-ui-slot=ui_slot
            style=format!("width:{size_px}px;height:{size_px}px;")
        >
            <svg viewBox="0 0 48 48" aria-hidden="true">
                <circle
                    data-ui-slot="arc"
                    cx="24"
                    cy="24"
                    r=radius
                    fill="none"
                    stroke-width="4"
                    stroke-dasharray=circumference
                    stroke-dashoffset=dash_offset
                ></circle>
            </svg>
        </span>
    }
}
