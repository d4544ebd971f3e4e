//! Profile page state: a `View <-> Edit` toggle over the current user.
//!
//! Only the name field unlocks in edit mode. Typed names are kept as a draft that is discarded
//! when edit mode ends; the displayed name always comes from the [`UserProfile`] entity.

use crm_ui::ButtonVariant;
use thiserror::Error;

use crate::model::UserProfile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileMode {
    #[default]
    View,
    Edit,
}

impl ProfileMode {
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Edit)
    }

    /// Label of the header button that switches away from this mode.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::View => "Edit",
            Self::Edit => "Cancel",
        }
    }

    pub const fn toggle_variant(self) -> ButtonVariant {
        match self {
            Self::View => ButtonVariant::Contained,
            Self::Edit => ButtonVariant::Outlined,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    pub profile: UserProfile,
    pub mode: ProfileMode,
    name_draft: Option<String>,
}

impl ProfileState {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            mode: ProfileMode::View,
            name_draft: None,
        }
    }

    /// Name shown in the page header and the app bar.
    pub fn displayed_name(&self) -> &str {
        &self.profile.name
    }

    /// Current value of the name input: the draft while editing, otherwise the stored name.
    pub fn name_field_value(&self) -> &str {
        self.name_draft.as_deref().unwrap_or(&self.profile.name)
    }

    pub fn name_editable(&self) -> bool {
        self.mode.is_editing()
    }

    /// Whether the "edit mode is active" banner is shown.
    pub fn banner_visible(&self) -> bool {
        self.mode.is_editing()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAction {
    /// Switch between view and edit mode.
    ToggleEdit,
    /// A keystroke in the name field.
    EditName(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEffect {
    /// Log the mode the page just entered.
    LogEditMode { editing: bool },
}

impl ProfileEffect {
    pub fn console_line(self) -> String {
        match self {
            Self::LogEditMode { editing } => {
                format!("Edit mode: {}", if editing { "ON" } else { "OFF" })
            }
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProfileError {
    #[error("the name field is read-only outside edit mode")]
    NameLocked,
}

/// Applies `action` to `state`.
///
/// # Errors
///
/// Returns [`ProfileError::NameLocked`] for a name edit while in view mode.
pub fn reduce_profile(
    state: &mut ProfileState,
    action: ProfileAction,
) -> Result<Vec<ProfileEffect>, ProfileError> {
    let mut effects = Vec::new();
    match action {
        ProfileAction::ToggleEdit => {
            state.mode = match state.mode {
                ProfileMode::View => ProfileMode::Edit,
                ProfileMode::Edit => ProfileMode::View,
            };
            state.name_draft = None;
            effects.push(ProfileEffect::LogEditMode {
                editing: state.mode.is_editing(),
            });
        }
        ProfileAction::EditName(name) => {
            if !state.name_editable() {
                return Err(ProfileError::NameLocked);
            }
            state.name_draft = Some(name);
        }
    }
    Ok(effects)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn toggle(state: &mut ProfileState) -> Vec<ProfileEffect> {
        reduce_profile(state, ProfileAction::ToggleEdit).expect("toggle")
    }

    #[test]
    fn starts_in_view_mode_with_everything_locked() {
        let state = ProfileState::new(UserProfile::mock());
        assert_eq!(state.mode, ProfileMode::View);
        assert!(!state.name_editable());
        assert!(!state.banner_visible());
        assert_eq!(state.mode.toggle_label(), "Edit");
        assert_eq!(state.name_field_value(), "John Doe");
    }

    #[test]
    fn entering_edit_unlocks_name_and_shows_banner() {
        let mut state = ProfileState::new(UserProfile::mock());
        let effects = toggle(&mut state);
        assert_eq!(effects, vec![ProfileEffect::LogEditMode { editing: true }]);
        assert!(state.name_editable());
        assert!(state.banner_visible());
        assert_eq!(state.mode.toggle_label(), "Cancel");
        assert_eq!(state.mode.toggle_variant(), ButtonVariant::Outlined);
    }

    #[test]
    fn leaving_edit_discards_the_name_draft() {
        let mut state = ProfileState::new(UserProfile::mock());
        toggle(&mut state);
        reduce_profile(&mut state, ProfileAction::EditName("Jane Roe".to_string()))
            .expect("edit name");
        assert_eq!(state.name_field_value(), "Jane Roe");
        assert_eq!(state.displayed_name(), "John Doe");

        let effects = toggle(&mut state);
        assert_eq!(effects[0].console_line(), "Edit mode: OFF");
        assert_eq!(state.name_field_value(), "John Doe");
        assert_eq!(state.profile, UserProfile::mock());
    }

    #[test]
    fn name_edits_are_rejected_in_view_mode() {
        let mut state = ProfileState::new(UserProfile::mock());
        assert_eq!(
            reduce_profile(&mut state, ProfileAction::EditName("x".to_string())),
            Err(ProfileError::NameLocked)
        );
        assert_eq!(state.name_field_value(), "John Doe");
    }

    #[test]
    fn each_toggle_logs_the_new_mode() {
        let mut state = ProfileState::new(UserProfile::mock());
        let lines: Vec<String> = (0..3)
            .flat_map(|_| toggle(&mut state))
            .map(ProfileEffect::console_line)
            .collect();
        assert_eq!(lines, vec!["Edit mode: ON", "Edit mode: OFF", "Edit mode: ON"]);
    }
}
