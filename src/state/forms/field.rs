//! Form field value objects

use std::fmt;

/// Mask character used when rendering password inputs
pub const MASK_CHAR: char = '•';

/// Represents a single form field with its configuration and value
#[derive(Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    /// Value the field was mounted with (or last reset to)
    pub default: String,
    /// Password inputs never render their plaintext
    pub is_masked: bool,
    /// Validation error shown beneath the field
    pub error: Option<String>,
    /// Value as it was when the in-flight submission was sent
    submitted: Option<String>,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: label.to_string(),
            value: String::new(),
            default: String::new(),
            is_masked: false,
            error: None,
            submitted: None,
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: String) -> Self {
        Self {
            default: value.clone(),
            value,
            ..Self::text(name, label)
        }
    }

    /// Create a new password field
    pub fn password(name: &str, label: &str) -> Self {
        Self {
            is_masked: true,
            ..Self::text(name, label)
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Whether the user has edited the field away from its default
    pub fn is_dirty(&self) -> bool {
        self.value != self.default
    }

    /// Replace the default. The value follows unless the field has pending edits.
    pub fn reset_default(&mut self, default: String) {
        if !self.is_dirty() {
            self.value = default.clone();
        }
        self.default = default;
    }

    /// Remember the value being sent
    pub fn mark_submitted(&mut self) {
        self.submitted = Some(self.value.clone());
    }

    pub fn forget_submitted(&mut self) {
        self.submitted = None;
    }

    /// The server accepted `accepted`; it becomes the default. The value is
    /// replaced only if it was not edited since it was sent.
    pub fn settle(&mut self, accepted: String) {
        if self.submitted.take().as_deref() == Some(self.value.as_str()) {
            self.value = accepted.clone();
        }
        self.default = accepted;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_masked {
            MASK_CHAR.to_string().repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

impl fmt::Debug for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormField")
            .field("name", &self.name)
            .field("value", &self.display_value())
            .field("is_dirty", &self.is_dirty())
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_clean() {
        let field = FormField::text("name", "Name");
        assert_eq!(field.as_text(), "");
        assert_eq!(field.placeholder, "Name");
        assert!(!field.is_dirty());
        assert!(field.error.is_none());
    }

    #[test]
    fn test_text_with_value_sets_default() {
        let field = FormField::text_with_value("name", "Name", "Alice".to_string());
        assert_eq!(field.as_text(), "Alice");
        assert_eq!(field.default, "Alice");
        assert!(!field.is_dirty());
    }

    #[test]
    fn test_push_and_pop_mark_dirty() {
        let mut field = FormField::text_with_value("name", "Name", "Al".to_string());
        field.push_char('x');
        assert!(field.is_dirty());
        field.pop_char();
        assert!(!field.is_dirty());
    }

    #[test]
    fn test_masked_display_hides_plaintext() {
        let mut field = FormField::password("newPassword", "New Password");
        for c in "sécret".chars() {
            field.push_char(c);
        }
        assert_eq!(field.display_value(), "••••••");
        assert!(!field.display_value().contains("cret"));
    }

    #[test]
    fn test_masked_debug_hides_plaintext() {
        let mut field = FormField::password("currentPassword", "Current Password");
        field.set_text("hunter2".to_string());
        assert!(!format!("{:?}", field).contains("hunter2"));
    }

    #[test]
    fn test_reset_default_keeps_pending_edits() {
        let mut field = FormField::text_with_value("name", "Name", "Alice".to_string());
        field.set_text("Alicia".to_string());
        field.reset_default("Bob".to_string());
        assert_eq!(field.as_text(), "Alicia");
        assert_eq!(field.default, "Bob");
    }

    #[test]
    fn test_reset_default_updates_untouched_field() {
        let mut field = FormField::text_with_value("name", "Name", "Alice".to_string());
        field.reset_default("Bob".to_string());
        assert_eq!(field.as_text(), "Bob");
        assert!(!field.is_dirty());
    }

    #[test]
    fn test_settle_replaces_unedited_value() {
        let mut field = FormField::text_with_value("name", "Name", "Alice".to_string());
        field.set_text(" Alicia ".to_string());
        field.mark_submitted();
        field.settle("Alicia".to_string());
        assert_eq!(field.as_text(), "Alicia");
        assert!(!field.is_dirty());
    }

    #[test]
    fn test_settle_keeps_edit_made_after_sending() {
        let mut field = FormField::text_with_value("name", "Name", "Alice".to_string());
        field.set_text("Alice!".to_string());
        field.mark_submitted();
        field.push_char('?');
        field.settle("Alice!".to_string());
        assert_eq!(field.as_text(), "Alice!?");
        assert_eq!(field.default, "Alice!");
        assert!(field.is_dirty());
    }

    #[test]
    fn test_settle_without_submission_only_moves_default() {
        let mut field = FormField::text_with_value("name", "Name", "Alice".to_string());
        field.settle("Bob".to_string());
        assert_eq!(field.as_text(), "Alice");
        assert_eq!(field.default, "Bob");
    }

    #[test]
    fn test_debug_omits_submitted_snapshot() {
        let mut field = FormField::password("newPassword", "New Password");
        field.set_text("abc123".to_string());
        field.mark_submitted();
        assert!(!format!("{:?}", field).contains("abc123"));
    }
}
