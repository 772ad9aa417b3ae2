//! Application state definitions

use super::forms::{FormController, PasswordUpdateForm, ProfileUpdate, ProfileUpdateForm};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Profile,
    Password,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Password => "Password",
        }
    }

    pub fn form_kind(&self) -> FormKind {
        match self {
            Self::Profile => FormKind::Profile,
            Self::Password => FormKind::Password,
        }
    }
}

/// Which form a submission belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Profile,
    Password,
}

/// Main application state
pub struct AppState {
    pub current_view: View,
    pub profile_form: ProfileUpdateForm,
    pub password_form: PasswordUpdateForm,
    /// Errors waiting to be shown in the modal dialog, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(profile: &ProfileUpdate) -> Self {
        Self {
            current_view: View::default(),
            profile_form: ProfileUpdateForm::with_defaults(profile),
            password_form: PasswordUpdateForm::new(),
            errors: VecDeque::new(),
        }
    }

    /// Controller of the form shown in the current view
    pub fn active_form(&self) -> &FormController {
        match self.current_view {
            View::Profile => &self.profile_form.controller,
            View::Password => &self.password_form.controller,
        }
    }

    pub fn active_form_mut(&mut self) -> &mut FormController {
        match self.current_view {
            View::Profile => &mut self.profile_form.controller,
            View::Password => &mut self.password_form.controller,
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    /// Errors queued behind the one currently shown
    pub fn pending_error_count(&self) -> usize {
        self.errors.len().saturating_sub(1)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&ProfileUpdate::default())
    }
}
