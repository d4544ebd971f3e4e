//! Login form state machine: field edits, validation on submit, and the simulated submission.
//!
//! `Idle -> Validating -> (Invalid -> Idle) | (Valid -> Submitting -> Idle)`. Validation happens
//! synchronously inside [`LoginAction::Submit`], so only `Idle` and `Submitting` are observable.
//! Timers and console output are returned as [`LoginEffect`] values for the page to execute.

use std::time::Duration;

use thiserror::Error;

use crate::validation::{validate, FieldErrors, LoginField, LoginForm, UnknownFieldError};

/// Marker recorded in the diagnostic once a submission completes.
pub const DIAGNOSTIC_READY_STATUS: &str = "ready-for-backend";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Identifies one in-flight submission. Completions carrying any other ticket are ignored.
pub struct SubmissionTicket(pub u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    /// `submitted` is the form as validated; later edits do not reach the diagnostic.
    Submitting {
        ticket: SubmissionTicket,
        submitted: LoginForm,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// State owned by one mounted login page.
pub struct LoginState {
    pub form: LoginForm,
    pub errors: FieldErrors,
    pub phase: LoginPhase,
    submit_delay: Duration,
    next_ticket: u64,
}

impl LoginState {
    pub fn new(submit_delay: Duration) -> Self {
        Self {
            form: LoginForm::default(),
            errors: FieldErrors::default(),
            phase: LoginPhase::Idle,
            submit_delay,
            next_ticket: 1,
        }
    }

    /// `true` while a submission is pending; drives the button's busy state.
    pub fn loading(&self) -> bool {
        matches!(self.phase, LoginPhase::Submitting { .. })
    }

    pub fn pending_ticket(&self) -> Option<SubmissionTicket> {
        match self.phase {
            LoginPhase::Submitting { ticket, .. } => Some(ticket),
            LoginPhase::Idle => None,
        }
    }

    pub fn error(&self, field: LoginField) -> Option<&'static str> {
        self.errors.get(field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Events accepted by [`reduce_login`].
pub enum LoginAction {
    /// A keystroke replaced a field's value.
    UpdateField { field: LoginField, value: String },
    /// Same as [`LoginAction::UpdateField`], addressed by the input's `name` attribute.
    UpdateNamedField { name: String, value: String },
    /// The form was submitted.
    Submit,
    /// The simulated submission delay elapsed.
    CompleteSubmission { ticket: SubmissionTicket },
    /// The page is going away; any pending completion becomes a no-op.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Record written to the console when a submission completes.
///
/// The password is included in cleartext. This is a known defect of the demo flow and must not
/// ship alongside a real backend.
pub struct LoginDiagnostic {
    pub email: String,
    pub password: String,
    pub status: &'static str,
}

impl LoginDiagnostic {
    /// Console lines in output order.
    pub fn console_lines(&self) -> Vec<String> {
        vec![
            "=== LOGIN FORM SUBMITTED ===".to_string(),
            format!("Email: {}", self.email),
            format!("Password: {}", self.password),
            "===========================".to_string(),
            "\u{2713} Validation successful - Ready for backend integration".to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_login`].
pub enum LoginEffect {
    /// Dispatch [`LoginAction::CompleteSubmission`] with `ticket` after `delay`.
    ScheduleCompletion {
        ticket: SubmissionTicket,
        delay: Duration,
    },
    /// Stop any timer scheduled for `ticket`.
    CancelCompletion { ticket: SubmissionTicket },
    /// Write the submission record to the diagnostic console.
    EmitDiagnostic(LoginDiagnostic),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),
}

/// Applies `action` to `state` and returns the effects the page must run.
///
/// # Errors
///
/// Returns [`LoginError::UnknownField`] when an input event names a field outside the schema.
/// The state is left unchanged in that case.
pub fn reduce_login(
    state: &mut LoginState,
    action: LoginAction,
) -> Result<Vec<LoginEffect>, LoginError> {
    let mut effects = Vec::new();
    match action {
        LoginAction::UpdateField { field, value } => {
            state.form.set(field, value);
            state.errors.clear(field);
        }
        LoginAction::UpdateNamedField { name, value } => {
            let field = name.parse::<LoginField>()?;
            return reduce_login(state, LoginAction::UpdateField { field, value });
        }
        LoginAction::Submit => {
            if state.loading() {
                return Ok(effects);
            }
            let report = validate(&state.form);
            if !report.is_valid() {
                state.errors = report.errors();
                return Ok(effects);
            }
            state.errors = FieldErrors::default();
            let ticket = SubmissionTicket(state.next_ticket);
            state.next_ticket += 1;
            state.phase = LoginPhase::Submitting {
                ticket,
                submitted: state.form.clone(),
            };
            effects.push(LoginEffect::ScheduleCompletion {
                ticket,
                delay: state.submit_delay,
            });
        }
        LoginAction::CompleteSubmission { ticket } => {
            let submitted = match std::mem::take(&mut state.phase) {
                LoginPhase::Submitting {
                    ticket: pending,
                    submitted,
                } if pending == ticket => submitted,
                other => {
                    state.phase = other;
                    return Ok(effects);
                }
            };
            effects.push(LoginEffect::EmitDiagnostic(LoginDiagnostic {
                email: submitted.email,
                password: submitted.password,
                status: DIAGNOSTIC_READY_STATUS,
            }));
        }
        LoginAction::Reset => {
            if let Some(ticket) = state.pending_ticket() {
                state.phase = LoginPhase::Idle;
                effects.push(LoginEffect::CancelCompletion { ticket });
            }
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DELAY: Duration = Duration::from_millis(1500);

    fn typed(email: &str, password: &str) -> LoginState {
        let mut state = LoginState::new(DELAY);
        for (field, value) in [(LoginField::Email, email), (LoginField::Password, password)] {
            reduce_login(
                &mut state,
                LoginAction::UpdateField {
                    field,
                    value: value.to_string(),
                },
            )
            .expect("update field");
        }
        state
    }

    fn submit(state: &mut LoginState) -> Vec<LoginEffect> {
        reduce_login(state, LoginAction::Submit).expect("submit")
    }

    #[test]
    fn valid_submit_enters_loading_and_completion_emits_diagnostic() {
        let mut state = typed("a@b.com", "secret");

        let effects = submit(&mut state);
        assert!(state.errors.is_empty());
        assert!(state.loading());
        let ticket = state.pending_ticket().expect("pending ticket");
        assert_eq!(
            effects,
            vec![LoginEffect::ScheduleCompletion { ticket, delay: DELAY }]
        );

        let effects =
            reduce_login(&mut state, LoginAction::CompleteSubmission { ticket }).expect("complete");
        assert!(!state.loading());
        assert_eq!(
            effects,
            vec![LoginEffect::EmitDiagnostic(LoginDiagnostic {
                email: "a@b.com".to_string(),
                password: "secret".to_string(),
                status: DIAGNOSTIC_READY_STATUS,
            })]
        );
    }

    #[test]
    fn diagnostic_reports_the_form_as_submitted_not_as_edited_afterwards() {
        let mut state = typed("a@b.com", "secret");
        submit(&mut state);
        let ticket = state.pending_ticket().expect("pending ticket");

        reduce_login(
            &mut state,
            LoginAction::UpdateField {
                field: LoginField::Email,
                value: String::new(),
            },
        )
        .expect("edit while submitting");
        assert_eq!(state.form.email, "");

        let effects =
            reduce_login(&mut state, LoginAction::CompleteSubmission { ticket }).expect("complete");
        assert_eq!(
            effects,
            vec![LoginEffect::EmitDiagnostic(LoginDiagnostic {
                email: "a@b.com".to_string(),
                password: "secret".to_string(),
                status: DIAGNOSTIC_READY_STATUS,
            })]
        );
        assert_eq!(state.phase, LoginPhase::Idle);
    }

    #[test]
    fn invalid_submit_stores_errors_and_never_shows_busy() {
        let mut state = typed("", "");
        let effects = submit(&mut state);
        assert!(effects.is_empty());
        assert!(!state.loading());
        assert_eq!(state.error(LoginField::Email), Some("Email is required"));
        assert_eq!(state.error(LoginField::Password), Some("Password is required"));
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut state = typed("", "");
        submit(&mut state);

        reduce_login(
            &mut state,
            LoginAction::UpdateField {
                field: LoginField::Email,
                value: "x".to_string(),
            },
        )
        .expect("edit email");

        assert_eq!(state.error(LoginField::Email), None);
        assert_eq!(state.error(LoginField::Password), Some("Password is required"));
    }

    #[test]
    fn repeated_edits_and_submits_never_accumulate_errors() {
        let mut state = typed("nope", "123");
        for _ in 0..3 {
            submit(&mut state);
            reduce_login(
                &mut state,
                LoginAction::UpdateField {
                    field: LoginField::Email,
                    value: "nope".to_string(),
                },
            )
            .expect("retype");
            submit(&mut state);
        }
        assert_eq!(state.errors.len(), 2);
        assert_eq!(
            state.error(LoginField::Email),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn submit_while_loading_is_ignored() {
        let mut state = typed("a@b.com", "secret");
        submit(&mut state);
        let ticket = state.pending_ticket();

        assert!(submit(&mut state).is_empty());
        assert_eq!(state.pending_ticket(), ticket);
    }

    #[test]
    fn stale_or_reset_completion_is_a_no_op() {
        let mut state = typed("a@b.com", "secret");
        submit(&mut state);
        let ticket = state.pending_ticket().expect("pending ticket");

        let effects = reduce_login(&mut state, LoginAction::Reset).expect("reset");
        assert_eq!(effects, vec![LoginEffect::CancelCompletion { ticket }]);
        assert!(!state.loading());

        let effects =
            reduce_login(&mut state, LoginAction::CompleteSubmission { ticket }).expect("late");
        assert!(effects.is_empty());

        submit(&mut state);
        let fresh = state.pending_ticket().expect("fresh ticket");
        assert_ne!(fresh, ticket);
        let effects =
            reduce_login(&mut state, LoginAction::CompleteSubmission { ticket }).expect("stale");
        assert!(effects.is_empty());
        assert!(state.loading());
    }

    #[test]
    fn reset_while_idle_emits_nothing() {
        let mut state = LoginState::new(DELAY);
        assert!(reduce_login(&mut state, LoginAction::Reset)
            .expect("reset")
            .is_empty());
    }

    #[test]
    fn named_updates_route_to_fields_and_reject_unknown_names() {
        let mut state = LoginState::new(DELAY);
        reduce_login(
            &mut state,
            LoginAction::UpdateNamedField {
                name: "email".to_string(),
                value: "a@b.com".to_string(),
            },
        )
        .expect("named update");
        assert_eq!(state.form.email, "a@b.com");

        let before = state.clone();
        let err = reduce_login(
            &mut state,
            LoginAction::UpdateNamedField {
                name: "username".to_string(),
                value: "x".to_string(),
            },
        )
        .expect_err("unknown field");
        assert_eq!(err, LoginError::UnknownField(UnknownFieldError("username".to_string())));
        assert_eq!(state, before);
    }

    #[test]
    fn diagnostic_console_lines_carry_the_submitted_credentials() {
        let diagnostic = LoginDiagnostic {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            status: DIAGNOSTIC_READY_STATUS,
        };
        let lines = diagnostic.console_lines();
        assert_eq!(lines[1], "Email: a@b.com");
        assert_eq!(lines[2], "Password: secret");
        assert_eq!(lines.len(), 5);
    }
}
