//! Profile service client module for gRPC communication

mod client;
mod error;
mod traits;

pub use client::{ProfileClient, DEFAULT_ADDRESS};
pub use error::SubmitError;
pub use traits::ProfileApiTrait;

#[cfg(test)]
pub use traits::MockProfileApiTrait;
