//! Submission error taxonomy

use crate::state::FieldErrors;
use thiserror::Error;

/// Why a submission did not succeed
#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    #[error("Could not reach the profile service: {0}")]
    Connect(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Profile service error ({code:?}): {message}")]
    Status { code: tonic::Code, message: String },

    /// The server refused the payload, optionally blaming specific fields
    #[error("{message}")]
    Rejected {
        message: String,
        field_errors: FieldErrors,
    },
}

impl From<tonic::Status> for SubmitError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::DeadlineExceeded => SubmitError::Timeout,
            tonic::Code::Unavailable => SubmitError::Connect(status.message().to_string()),
            code => SubmitError::Status {
                code,
                message: status.message().to_string(),
            },
        }
    }
}
