//! Form domain layer
//!
//! Type-safe form handling for the account settings views: field value
//! objects, the shared form-state controller, validation schemas and the
//! two concrete forms.

mod field;
mod form_state;
mod password_form;
mod payload;
mod profile_form;
pub mod schema;

pub use field::FormField;
pub use form_state::{Form, FormController, SubmitAttempt, SubmitStatus};
pub use password_form::{PasswordUpdateForm, PASSWORD_FORM_TITLE};
pub use payload::{PasswordUpdate, ProfileUpdate};
pub use profile_form::{ProfileUpdateForm, PROFILE_FORM_TITLE};
pub use schema::FieldErrors;
