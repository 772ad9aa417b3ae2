//! Update Password form

use super::field::FormField;
use super::form_state::{FormController, SubmitAttempt};
use super::payload::PasswordUpdate;
use super::schema::{PasswordUpdateSchema, CONFIRM_PASSWORD, CURRENT_PASSWORD, NEW_PASSWORD};
use crate::api::SubmitError;

pub const PASSWORD_FORM_TITLE: &str = "Update Password";

#[derive(Debug, Clone)]
pub struct PasswordUpdateForm {
    pub controller: FormController,
    schema: PasswordUpdateSchema,
}

impl PasswordUpdateForm {
    pub fn new() -> Self {
        Self {
            controller: FormController::new(vec![
                FormField::password(CURRENT_PASSWORD, "Current Password"),
                FormField::password(NEW_PASSWORD, "New Password"),
                FormField::password(CONFIRM_PASSWORD, "Confirm New Password"),
            ]),
            schema: PasswordUpdateSchema,
        }
    }

    pub fn submit(&mut self) -> SubmitAttempt<PasswordUpdate> {
        self.controller.begin_submit(&self.schema)
    }

    /// Apply the transport result; the sent secrets are wiped after a
    /// successful change, anything typed while in flight stays
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        let succeeded = outcome.is_ok();
        self.controller.finish_submit(outcome);
        if succeeded {
            self.controller
                .settle_submitted([(CURRENT_PASSWORD, ""), (NEW_PASSWORD, ""), (CONFIRM_PASSWORD, "")]);
            self.controller.active_field_index = 0;
            self.controller.set_banner("Password updated");
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.controller.is_submitting() {
            "Updating..."
        } else {
            PASSWORD_FORM_TITLE
        }
    }
}

impl Default for PasswordUpdateForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::{Form, SubmitStatus};
    use pretty_assertions::assert_eq;

    fn filled(current: &str, new: &str, confirm: &str) -> PasswordUpdateForm {
        let mut form = PasswordUpdateForm::new();
        form.controller.set_value(CURRENT_PASSWORD, current);
        form.controller.set_value(NEW_PASSWORD, new);
        form.controller.set_value(CONFIRM_PASSWORD, confirm);
        form
    }

    #[test]
    fn test_new_has_three_empty_masked_fields() {
        let form = PasswordUpdateForm::new();
        assert_eq!(form.controller.field_count(), 4);
        for field in form.controller.fields() {
            assert!(field.is_masked);
            assert_eq!(field.as_text(), "");
        }
        assert_eq!(
            form.controller.get_field(2).unwrap().label,
            "Confirm New Password"
        );
    }

    #[test]
    fn test_valid_submission_yields_payload() {
        let mut form = filled("x", "abc123", "abc123");
        assert_eq!(
            form.submit(),
            SubmitAttempt::Ready(PasswordUpdate {
                current_password: "x".to_string(),
                new_password: "abc123".to_string(),
                confirm_password: "abc123".to_string(),
            })
        );
        assert_eq!(form.button_label(), "Updating...");
    }

    #[test]
    fn test_mismatch_blocks_submission() {
        let mut form = filled("x", "abc123", "abc12");
        assert!(matches!(form.submit(), SubmitAttempt::Invalid(_)));
        assert!(!form.controller.is_submitting());
        assert_eq!(
            form.controller.error(CONFIRM_PASSWORD),
            Some("Passwords do not match")
        );
        assert_eq!(form.button_label(), "Update Password");
    }

    #[test]
    fn test_empty_current_password_shows_schema_message() {
        let mut form = filled("", "abc123", "abc123");
        form.submit();
        assert_eq!(
            form.controller.error(CURRENT_PASSWORD),
            Some("Current password is required")
        );
        assert!(form.controller.error(NEW_PASSWORD).is_none());
    }

    #[test]
    fn test_success_wipes_fields() {
        let mut form = filled("x", "abc123", "abc123");
        form.submit();
        form.finish_submit(Ok(()));
        assert_eq!(form.controller.status(), &SubmitStatus::Submitted);
        assert_eq!(form.controller.banner(), Some("Password updated"));
        assert!(form.controller.fields().iter().all(|f| f.as_text().is_empty()));
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled("x", "abc123", "abc123");
        form.submit();
        form.finish_submit(Err(SubmitError::Connect("refused".to_string())));
        assert_eq!(form.controller.value(NEW_PASSWORD), Some("abc123"));
        assert!(!form.controller.is_submitting());
    }

    #[test]
    fn test_success_keeps_password_typed_in_flight() {
        let mut form = filled("x", "abc123", "abc123");
        form.submit();
        form.controller.set_active_field(0);
        form.controller.input_char('y');
        form.finish_submit(Ok(()));
        assert_eq!(form.controller.value(CURRENT_PASSWORD), Some("xy"));
        assert_eq!(form.controller.value(NEW_PASSWORD), Some(""));
        assert_eq!(form.controller.value(CONFIRM_PASSWORD), Some(""));
    }
}
