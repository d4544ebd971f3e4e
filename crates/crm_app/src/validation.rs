//! Login form schema: field rules, fixed messages, and error-map normalization.
//!
//! [`validate`] is pure and checks every field even when an earlier one already failed, so a
//! single submit surfaces all problems at once. Rule failures are data ([`ValidationReport`]);
//! only programmer misuse such as an unknown field name is an `Err`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

const MAX_EMAIL_LOCAL_LEN: usize = 64;
const MAX_EMAIL_DOMAIN_LEN: usize = 255;
const MAX_DOMAIN_LABEL_LEN: usize = 63;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Fields of the login form.
pub enum LoginField {
    /// Email address input.
    Email,
    /// Password input.
    Password,
}

impl LoginField {
    /// Every field in render order.
    pub const ALL: [LoginField; 2] = [LoginField::Email, LoginField::Password];

    /// The `name` attribute the field renders with.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown login field `{0}`")]
/// A DOM event named a field the login schema does not define.
pub struct UnknownFieldError(pub String);

impl FromStr for LoginField {
    type Err = UnknownFieldError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Raw login form values as typed by the user.
pub struct LoginForm {
    /// Email input value.
    pub email: String,
    /// Password input value.
    pub password: String,
}

impl LoginForm {
    /// Builds a form from literal values.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Current value of `field`.
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Rule kinds a field can fail.
pub enum Rule {
    /// The field is empty.
    Required,
    /// The value is not a syntactically valid email address.
    Format,
    /// The value is shorter than the minimum length.
    Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A single failed rule on a single field.
pub struct Violation {
    /// Offending field.
    pub field: LoginField,
    /// Failed rule.
    pub rule: Rule,
}

impl Violation {
    /// Fixed user-facing message for this field/rule pair.
    pub const fn message(self) -> &'static str {
        match (self.field, self.rule) {
            (LoginField::Email, Rule::Required) => "Email is required",
            (LoginField::Email, _) => "Please enter a valid email address",
            (LoginField::Password, Rule::Required) => "Password is required",
            (LoginField::Password, _) => "Password must be at least 6 characters",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Per-field error messages. A field is either absent or holds exactly one message.
pub struct FieldErrors {
    email: Option<&'static str>,
    password: Option<&'static str>,
}

impl FieldErrors {
    /// Normalizes a violation list into the per-field map; the first violation per field wins.
    pub fn from_violations(violations: impl IntoIterator<Item = Violation>) -> Self {
        let mut errors = Self::default();
        for violation in violations {
            let slot = errors.slot_mut(violation.field);
            if slot.is_none() {
                *slot = Some(violation.message());
            }
        }
        errors
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: LoginField) -> Option<&'static str> {
        match field {
            LoginField::Email => self.email,
            LoginField::Password => self.password,
        }
    }

    /// Removes any message for `field`.
    pub fn clear(&mut self, field: LoginField) {
        *self.slot_mut(field) = None;
    }

    /// Returns `true` when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Failing fields and their messages, in render order.
    pub fn iter(&self) -> impl Iterator<Item = (LoginField, &'static str)> + '_ {
        LoginField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }

    fn slot_mut(&mut self, field: LoginField) -> &mut Option<&'static str> {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Result of validating a [`LoginForm`].
pub struct ValidationReport {
    errors: FieldErrors,
}

impl ValidationReport {
    /// Returns `true` when every field passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Per-field messages for the failing fields.
    pub fn errors(&self) -> FieldErrors {
        self.errors
    }
}

/// Validates every field of `form` without short-circuiting.
pub fn validate(form: &LoginForm) -> ValidationReport {
    let violations = LoginField::ALL
        .into_iter()
        .filter_map(|field| check_field(field, form.get(field)));
    ValidationReport {
        errors: FieldErrors::from_violations(violations),
    }
}

/// Checks one field value against its rules, returning the first failure.
pub fn check_field(field: LoginField, value: &str) -> Option<Violation> {
    let rule = match field {
        _ if value.is_empty() => Some(Rule::Required),
        LoginField::Email if !is_valid_email(value) => Some(Rule::Format),
        LoginField::Password if value.chars().count() < MIN_PASSWORD_LEN => Some(Rule::Length),
        _ => None,
    }?;
    Some(Violation { field, rule })
}

/// Syntactic `local@domain` check with no top-level-domain allow-list.
///
/// The domain needs at least two labels and its last label must start with a letter, so
/// `a@b.com` passes while `a@b` and `a@1.2` do not.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_EMAIL_LOCAL_LEN {
        return false;
    }
    local.split('.').all(|atom| {
        !atom.is_empty()
            && atom.chars().all(|c| {
                c.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~-".contains(c) || !c.is_ascii()
            })
    })
}

fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_EMAIL_DOMAIN_LEN {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_valid_domain_label(label)) {
        return false;
    }
    labels
        .last()
        .and_then(|tld| tld.chars().next())
        .is_some_and(|first| first.is_alphabetic())
}

fn is_valid_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_DOMAIN_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn errors_of(email: &str, password: &str) -> Vec<(LoginField, &'static str)> {
        validate(&LoginForm::new(email, password)).errors().iter().collect()
    }

    #[test]
    fn valid_credentials_produce_no_errors() {
        let report = validate(&LoginForm::new("a@b.com", "secret"));
        assert!(report.is_valid());
        assert!(report.errors().is_empty());
    }

    #[test]
    fn both_empty_fields_report_required_simultaneously() {
        assert_eq!(
            errors_of("", ""),
            vec![
                (LoginField::Email, "Email is required"),
                (LoginField::Password, "Password is required"),
            ]
        );
    }

    #[test]
    fn email_without_at_sign_reports_only_format_error() {
        for email in ["a", "plainaddress", "john.doe.example.com", " "] {
            assert_eq!(
                errors_of(email, "secret"),
                vec![(LoginField::Email, "Please enter a valid email address")],
                "{email:?}"
            );
        }
    }

    #[test]
    fn short_password_with_valid_email_reports_only_length_error() {
        for password in ["a", "abc", "12345"] {
            assert_eq!(
                errors_of("a@b.com", password),
                vec![(LoginField::Password, "Password must be at least 6 characters")]
            );
        }
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        assert!(check_field(LoginField::Password, "ééééé").is_some());
        assert_eq!(check_field(LoginField::Password, "éééééé"), None);
    }

    #[test]
    fn messages_are_distinct_per_rule() {
        let mut messages = vec![
            Violation { field: LoginField::Email, rule: Rule::Required }.message(),
            Violation { field: LoginField::Email, rule: Rule::Format }.message(),
            Violation { field: LoginField::Password, rule: Rule::Required }.message(),
            Violation { field: LoginField::Password, rule: Rule::Length }.message(),
        ];
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), 4);
    }

    #[test]
    fn email_syntax_accepts_any_tld() {
        for email in [
            "a@b.com",
            "john.doe@example.com",
            "first+tag@sub.example.internal",
            "x@y.z",
            "o'brien@mail.example.museum",
        ] {
            assert!(is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn email_syntax_rejects_malformed_addresses() {
        for email in [
            "a@b",
            "@example.com",
            "a@",
            "a@@b.com",
            "a@b..com",
            ".a@b.com",
            "a.@b.com",
            "a..b@c.com",
            "a b@c.com",
            "a@-b.com",
            "a@b-.com",
            "a@1.2",
            "a@b.com ",
        ] {
            assert!(!is_valid_email(email), "{email}");
        }
    }

    #[test]
    fn first_violation_per_field_wins_during_normalization() {
        let errors = FieldErrors::from_violations([
            Violation { field: LoginField::Email, rule: Rule::Required },
            Violation { field: LoginField::Email, rule: Rule::Format },
        ]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(LoginField::Email), Some("Email is required"));
        assert_eq!(errors.get(LoginField::Password), None);
    }

    #[test]
    fn clearing_a_field_leaves_the_other_untouched() {
        let mut errors = validate(&LoginForm::default()).errors();
        errors.clear(LoginField::Email);
        assert_eq!(errors.get(LoginField::Email), None);
        assert_eq!(errors.get(LoginField::Password), Some("Password is required"));
    }

    #[test]
    fn field_names_round_trip_and_unknown_names_are_rejected() {
        for field in LoginField::ALL {
            assert_eq!(field.name().parse::<LoginField>(), Ok(field));
        }
        assert_eq!(
            "username".parse::<LoginField>(),
            Err(UnknownFieldError("username".to_string()))
        );
    }
}
