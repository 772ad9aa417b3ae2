//! Validation schemas for the account forms
//!
//! A schema maps raw field text to either a typed payload or one error
//! message per offending field. The rules themselves are `validator`
//! attributes on the payloads; schemas pick one message per field.

use super::payload::{PasswordUpdate, ProfileUpdate, REQUIRED};
use std::collections::HashMap;
use validator::{Validate, ValidationErrors};

pub const CURRENT_PASSWORD: &str = "currentPassword";
pub const NEW_PASSWORD: &str = "newPassword";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const NAME: &str = "name";
pub const EMAIL: &str = "email";

/// Raw field text keyed by field name
pub type FieldValues = HashMap<String, String>;

/// Field-level error messages, at most one per field, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first message recorded for a field wins
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push((field.to_string(), message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// `Ok(value)` when no errors were recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Declarative per-field and cross-field constraints
pub trait ValidationSchema {
    type Output;

    /// Field names this schema validates, in display order
    fn fields(&self) -> &'static [&'static str];

    fn validate(&self, values: &FieldValues) -> Result<Self::Output, FieldErrors>;
}

fn raw<'a>(values: &'a FieldValues, field: &str) -> &'a str {
    values.get(field).map(String::as_str).unwrap_or("")
}

/// Error codes that win over any other error reported for the same field
const PRECEDENCE: [&str; 2] = ["must_match", REQUIRED];

/// Keep one message per form field, in the schema's display order
fn collect_errors(fields: &[&str], errors: &ValidationErrors) -> FieldErrors {
    let by_field = errors.field_errors();
    let mut collected = FieldErrors::new();

    for field in fields {
        let Some((_, errs)) = by_field
            .iter()
            .find(|(name, _)| form_field_name(name) == *field)
        else {
            continue;
        };

        let picked = PRECEDENCE
            .iter()
            .find_map(|code| errs.iter().find(|e| e.code == *code))
            .or_else(|| errs.first());

        if let Some(err) = picked {
            let message = err
                .message
                .as_deref()
                .map(str::to_string)
                .unwrap_or_else(|| err.code.to_string());
            collected.add(field, message);
        }
    }

    collected
}

/// Map a snake_case field name (`confirm_password`) to the form's (`confirmPassword`)
pub fn form_field_name(wire: &str) -> String {
    let mut name = String::with_capacity(wire.len());
    let mut upper_next = false;
    for c in wire.chars() {
        if c == '_' {
            upper_next = !name.is_empty();
        } else if upper_next {
            name.extend(c.to_uppercase());
            upper_next = false;
        } else {
            name.push(c);
        }
    }
    name
}

/// currentPassword / newPassword / confirmPassword
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordUpdateSchema;

impl ValidationSchema for PasswordUpdateSchema {
    type Output = PasswordUpdate;

    fn fields(&self) -> &'static [&'static str] {
        &[CURRENT_PASSWORD, NEW_PASSWORD, CONFIRM_PASSWORD]
    }

    fn validate(&self, values: &FieldValues) -> Result<PasswordUpdate, FieldErrors> {
        let payload = PasswordUpdate {
            current_password: raw(values, CURRENT_PASSWORD).to_string(),
            new_password: raw(values, NEW_PASSWORD).to_string(),
            confirm_password: raw(values, CONFIRM_PASSWORD).to_string(),
        };

        payload
            .validate()
            .map_err(|errors| collect_errors(self.fields(), &errors))?;
        Ok(payload)
    }
}

/// name / email, both trimmed before validation
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileUpdateSchema;

impl ValidationSchema for ProfileUpdateSchema {
    type Output = ProfileUpdate;

    fn fields(&self) -> &'static [&'static str] {
        &[NAME, EMAIL]
    }

    fn validate(&self, values: &FieldValues) -> Result<ProfileUpdate, FieldErrors> {
        let payload = ProfileUpdate {
            name: raw(values, NAME).trim().to_string(),
            email: raw(values, EMAIL).trim().to_string(),
        };

        payload
            .validate()
            .map_err(|errors| collect_errors(self.fields(), &errors))?;
        Ok(payload)
    }
}
