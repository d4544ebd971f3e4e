use crm_ui::{ButtonSize, ButtonType, Elevation, LayoutGap, Stack};
use leptos::ev::{Event, SubmitEvent};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

use crate::{
    config::use_app_config,
    login::{reduce_login, LoginAction, LoginEffect, LoginState},
    validation::LoginField,
};

use super::{ActionButton, ContentCard, LabeledInput};

#[component]
/// Email/password sign-in form with inline validation and a simulated submission.
pub fn LoginPage() -> impl IntoView {
    let config = use_app_config();
    let state = create_rw_signal(LoginState::new(config.login.submit_delay()));
    let effects = create_rw_signal(Vec::<LoginEffect>::new());
    let timer = store_value(None::<TimeoutHandle>);

    let dispatch = Callback::new(move |action: LoginAction| {
        let previous = state.get_untracked();
        let mut next = previous.clone();
        match reduce_login(&mut next, action) {
            Ok(new_effects) => {
                if next != previous {
                    state.set(next);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("login reducer error: {err}"),
        }
    });

    create_effect(move |_| {
        let queued = effects.get();
        if queued.is_empty() {
            return;
        }
        effects.set(Vec::new());
        for effect in queued {
            run_login_effect(effect, dispatch, timer);
        }
    });

    on_cleanup(move || {
        let Some(Ok(pending)) = state.try_update(|login| reduce_login(login, LoginAction::Reset))
        else {
            return;
        };
        for effect in pending {
            run_login_effect(effect, dispatch, timer);
        }
    });

    let on_field_input = Callback::new(move |ev: Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        dispatch.call(LoginAction::UpdateNamedField {
            name: input.name(),
            value: input.value(),
        });
    });
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        dispatch.call(LoginAction::Submit);
    };

    let loading = Signal::derive(move || state.with(LoginState::loading));
    let value = move |field: LoginField| {
        Signal::derive(move || state.with(|login| login.form.get(field).to_string()))
    };
    let has_error =
        move |field: LoginField| Signal::derive(move || state.with(|login| login.error(field).is_some()));
    let message = move |field: LoginField| {
        Signal::derive(move || {
            state.with(|login| login.error(field).unwrap_or_default().to_string())
        })
    };

    view! {
        <div class="crm-login-page" data-ui-slot="login-page">
            <ContentCard
                title="Sign In"
                subtitle="Enter your credentials to access your account"
                elevation=Elevation::Prominent
            >
                <form on:submit=on_submit novalidate=true>
                    <Stack gap=LayoutGap::Lg>
                        <LabeledInput
                            label="Email"
                            name=LoginField::Email.name()
                            input_type="email"
                            value=value(LoginField::Email)
                            on_change=on_field_input
                            error=has_error(LoginField::Email)
                            helper_text=message(LoginField::Email)
                            placeholder="Enter your email"
                            autocomplete="email"
                            autofocus=true
                            required=true
                        />
                        <LabeledInput
                            label="Password"
                            name=LoginField::Password.name()
                            input_type="password"
                            value=value(LoginField::Password)
                            on_change=on_field_input
                            error=has_error(LoginField::Password)
                            helper_text=message(LoginField::Password)
                            placeholder="Enter your password"
                            autocomplete="current-password"
                            required=true
                        />
                        <ActionButton
                            button_type=ButtonType::Submit
                            size=ButtonSize::Lg
                            full_width=true
                            loading
                        >
                            "Sign In"
                        </ActionButton>
                    </Stack>
                </form>
            </ContentCard>
        </div>
    }
}

fn run_login_effect(
    effect: LoginEffect,
    dispatch: Callback<LoginAction>,
    timer: StoredValue<Option<TimeoutHandle>>,
) {
    match effect {
        LoginEffect::ScheduleCompletion { ticket, delay } => {
            let scheduled = set_timeout_with_handle(
                move || dispatch.call(LoginAction::CompleteSubmission { ticket }),
                delay,
            );
            match scheduled {
                Ok(handle) => timer.set_value(Some(handle)),
                Err(err) => logging::warn!("failed to schedule login completion: {err:?}"),
            }
        }
        LoginEffect::CancelCompletion { .. } => {
            if let Some(handle) = timer.try_update_value(Option::take).flatten() {
                handle.clear();
            }
        }
        LoginEffect::EmitDiagnostic(diagnostic) => {
            for line in diagnostic.console_lines() {
                logging::log!("{line}");
            }
        }
    }
}
