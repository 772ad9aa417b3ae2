//! Form state controller shared by the account forms

use super::field::FormField;
use super::schema::{FieldErrors, FieldValues, ValidationSchema};
use crate::api::SubmitError;
use chrono::{DateTime, Utc};

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Lifecycle of a form's submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

/// Outcome of pressing the submit control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt<T> {
    /// Validation passed; the payload must be handed to the transport
    Ready(T),
    /// Validation failed; errors are already attached to the fields
    Invalid(FieldErrors),
    /// A submission is already in flight; nothing happened
    InFlight,
}

/// Tracks field values, per-field errors and the submitting flag
#[derive(Debug, Clone)]
pub struct FormController {
    fields: Vec<FormField>,
    pub active_field_index: usize,
    status: SubmitStatus,
    /// Message shown above the submit button (success or failure)
    banner: Option<String>,
    last_submitted_at: Option<DateTime<Utc>>,
}

impl FormController {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            active_field_index: 0,
            status: SubmitStatus::Idle,
            banner: None,
            last_submitted_at: None,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(FormField::as_text)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|f| f.error.as_deref())
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn set_banner(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
    }

    pub fn last_submitted_at(&self) -> Option<DateTime<Utc>> {
        self.last_submitted_at
    }

    /// Returns true if the submit button row is active
    pub fn is_button_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    /// Set a field's value by name. Unknown names are ignored.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        if let Some(field) = self.field_mut(name) {
            field.set_text(value.into());
            self.touch();
        }
    }

    /// Snapshot of all raw field values
    pub fn values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
            self.touch();
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
            self.touch();
        }
    }

    /// Push new defaults; fields with pending edits keep their value
    pub fn apply_defaults<'a>(&mut self, defaults: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (name, value) in defaults {
            if let Some(field) = self.field_mut(name) {
                field.reset_default(value.to_string());
            }
        }
    }

    /// Settle a successful submission with the values the server accepted.
    /// Fields edited while the request was in flight keep their edits.
    pub fn settle_submitted<'a>(&mut self, accepted: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (name, value) in accepted {
            if let Some(field) = self.field_mut(name) {
                field.settle(value.to_string());
            }
        }
    }

    fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    fn attach_errors(&mut self, errors: &FieldErrors) {
        for (name, message) in errors.iter() {
            if let Some(field) = self.field_mut(name) {
                field.error = Some(message.to_string());
            }
        }
    }

    /// An edit after a finished submission returns the form to idle
    fn touch(&mut self) {
        if matches!(
            self.status,
            SubmitStatus::Submitted | SubmitStatus::Failed(_)
        ) {
            self.status = SubmitStatus::Idle;
            self.banner = None;
        }
    }

    /// Validate the current values and, if they pass, enter the submitting state
    pub fn begin_submit<S: ValidationSchema>(&mut self, schema: &S) -> SubmitAttempt<S::Output> {
        if self.is_submitting() {
            return SubmitAttempt::InFlight;
        }

        self.clear_errors();
        self.banner = None;

        match schema.validate(&self.values()) {
            Ok(payload) => {
                for field in &mut self.fields {
                    field.mark_submitted();
                }
                self.status = SubmitStatus::Submitting;
                SubmitAttempt::Ready(payload)
            }
            Err(errors) => {
                self.attach_errors(&errors);
                self.status = SubmitStatus::Idle;
                SubmitAttempt::Invalid(errors)
            }
        }
    }

    /// Record the transport's verdict and release the submitting flag
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                self.status = SubmitStatus::Submitted;
                self.last_submitted_at = Some(Utc::now());
            }
            Err(err) => {
                for field in &mut self.fields {
                    field.forget_submitted();
                }
                if let SubmitError::Rejected { field_errors, .. } = &err {
                    self.attach_errors(field_errors);
                }
                let message = err.to_string();
                self.banner = Some(message.clone());
                self.status = SubmitStatus::Failed(message);
            }
        }
    }
}

impl Form for FormController {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // fields + submit button row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
