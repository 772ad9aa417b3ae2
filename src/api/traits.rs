//! Trait abstraction for the profile service client to enable mocking in tests

use super::error::SubmitError;
use crate::state::{PasswordUpdate, ProfileUpdate};
use async_trait::async_trait;

/// Profile service operations used by the forms
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileApiTrait: Send + Sync {
    /// Fetch the signed-in user's current profile
    async fn get_profile(&self) -> Result<ProfileUpdate, SubmitError>;

    /// Change the password
    async fn update_password(&self, payload: PasswordUpdate) -> Result<(), SubmitError>;

    /// Change name and email
    async fn update_profile(&self, payload: ProfileUpdate) -> Result<(), SubmitError>;
}
