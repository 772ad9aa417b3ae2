//! Validated submission payloads
//!
//! Field rules live on the payloads as `validator` attributes; the schemas
//! in `schema.rs` build a payload from raw text and run these rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Validated password change request
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PasswordUpdate {
    #[validate(custom(function = "required", message = "Current password is required"))]
    pub current_password: String,

    #[validate(custom(function = "required", message = "New password is required"))]
    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    pub new_password: String,

    #[validate(custom(function = "required", message = "Please confirm your new password"))]
    #[validate(must_match(other = "new_password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

impl fmt::Debug for PasswordUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordUpdate")
            .field("current_password", &"[redacted]")
            .field("new_password", &"[redacted]")
            .field("confirm_password", &"[redacted]")
            .finish()
    }
}

/// Validated profile update, also used as the profile form's defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProfileUpdate {
    #[validate(custom(function = "required", message = "Name is required"))]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: String,

    #[validate(custom(function = "required", message = "Email is required"))]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
}

/// Error code reported for empty required fields
pub const REQUIRED: &str = "required";

fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(REQUIRED));
    }
    Ok(())
}
