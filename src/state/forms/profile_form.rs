//! Update Profile form

use super::field::FormField;
use super::form_state::{FormController, SubmitAttempt};
use super::payload::ProfileUpdate;
use super::schema::{ProfileUpdateSchema, EMAIL, NAME};
use crate::api::SubmitError;

pub const PROFILE_FORM_TITLE: &str = "Update Profile";

#[derive(Debug, Clone)]
pub struct ProfileUpdateForm {
    pub controller: FormController,
    schema: ProfileUpdateSchema,
    /// Payload of the in-flight submission
    in_flight: Option<ProfileUpdate>,
}

impl ProfileUpdateForm {
    /// Mount the form with the caller's existing profile
    pub fn with_defaults(defaults: &ProfileUpdate) -> Self {
        Self {
            controller: FormController::new(vec![
                FormField::text_with_value(NAME, "Name", defaults.name.clone()),
                FormField::text_with_value(EMAIL, "Email", defaults.email.clone()),
            ]),
            schema: ProfileUpdateSchema,
            in_flight: None,
        }
    }

    /// Re-render with (possibly refreshed) defaults without clobbering edits
    pub fn apply_defaults(&mut self, defaults: &ProfileUpdate) {
        self.controller
            .apply_defaults([(NAME, defaults.name.as_str()), (EMAIL, defaults.email.as_str())]);
    }

    pub fn submit(&mut self) -> SubmitAttempt<ProfileUpdate> {
        let attempt = self.controller.begin_submit(&self.schema);
        if let SubmitAttempt::Ready(payload) = &attempt {
            self.in_flight = Some(payload.clone());
        }
        attempt
    }

    /// Apply the transport result; the submitted payload becomes the new defaults
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        let accepted = self.in_flight.take();
        let succeeded = outcome.is_ok();
        self.controller.finish_submit(outcome);
        if succeeded {
            if let Some(profile) = accepted {
                self.controller.settle_submitted([
                    (NAME, profile.name.as_str()),
                    (EMAIL, profile.email.as_str()),
                ]);
            }
            self.controller.set_banner("Profile updated");
        }
    }

    /// Profile as last accepted by the server (or as mounted)
    pub fn saved_profile(&self) -> ProfileUpdate {
        let default_of = |name: &str| {
            self.controller
                .field(name)
                .map(|field| field.default.clone())
                .unwrap_or_default()
        };
        ProfileUpdate {
            name: default_of(NAME),
            email: default_of(EMAIL),
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.controller.is_submitting() {
            "Updating..."
        } else {
            PROFILE_FORM_TITLE
        }
    }
}
