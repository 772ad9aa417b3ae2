//! gRPC client for the profile service
//!
//! The wire messages are declared with prost derives and called through a
//! small hand-written unary client, so no protoc step is needed at build time.

use super::error::SubmitError;
use super::traits::ProfileApiTrait;
use crate::state::forms::schema::form_field_name;
use crate::state::{FieldErrors, PasswordUpdate, ProfileUpdate};
use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

/// Wire types for `profile.ProfileService`
pub mod proto {
    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetProfileRequest {}

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct GetProfileResponse {
        #[prost(string, tag = "1")]
        pub name: String,
        #[prost(string, tag = "2")]
        pub email: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct UpdatePasswordRequest {
        #[prost(string, tag = "1")]
        pub current_password: String,
        #[prost(string, tag = "2")]
        pub new_password: String,
        #[prost(string, tag = "3")]
        pub confirm_password: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct UpdateProfileRequest {
        #[prost(string, tag = "1")]
        pub name: String,
        #[prost(string, tag = "2")]
        pub email: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct FieldError {
        #[prost(string, tag = "1")]
        pub field: String,
        #[prost(string, tag = "2")]
        pub message: String,
    }

    #[derive(Clone, PartialEq, prost::Message)]
    pub struct UpdateResponse {
        #[prost(bool, tag = "1")]
        pub success: bool,
        #[prost(string, tag = "2")]
        pub error: String,
        #[prost(message, repeated, tag = "3")]
        pub field_errors: Vec<FieldError>,
    }

    pub mod profile_service_client {
        use tonic::codegen::http::uri::PathAndQuery;
        use tonic::transport::Channel;

        /// Unary client for `profile.ProfileService`
        #[derive(Debug, Clone)]
        pub struct ProfileServiceClient {
            inner: tonic::client::Grpc<Channel>,
        }

        impl ProfileServiceClient {
            pub fn new(channel: Channel) -> Self {
                Self {
                    inner: tonic::client::Grpc::new(channel),
                }
            }

            async fn unary<Req, Resp>(
                &mut self,
                request: Req,
                path: &'static str,
            ) -> Result<tonic::Response<Resp>, tonic::Status>
            where
                Req: prost::Message + Send + Sync + 'static,
                Resp: prost::Message + Default + Send + Sync + 'static,
            {
                self.inner
                    .ready()
                    .await
                    .map_err(|e| tonic::Status::unavailable(format!("Service was not ready: {e}")))?;
                let codec = tonic::codec::ProstCodec::<Req, Resp>::default();
                self.inner
                    .unary(
                        tonic::Request::new(request),
                        PathAndQuery::from_static(path),
                        codec,
                    )
                    .await
            }

            pub async fn get_profile(
                &mut self,
                request: super::GetProfileRequest,
            ) -> Result<tonic::Response<super::GetProfileResponse>, tonic::Status> {
                self.unary(request, "/profile.ProfileService/GetProfile")
                    .await
            }

            pub async fn update_password(
                &mut self,
                request: super::UpdatePasswordRequest,
            ) -> Result<tonic::Response<super::UpdateResponse>, tonic::Status> {
                self.unary(request, "/profile.ProfileService/UpdatePassword")
                    .await
            }

            pub async fn update_profile(
                &mut self,
                request: super::UpdateProfileRequest,
            ) -> Result<tonic::Response<super::UpdateResponse>, tonic::Status> {
                self.unary(request, "/profile.ProfileService/UpdateProfile")
                    .await
            }
        }
    }
}

use proto::profile_service_client::ProfileServiceClient;

/// Default profile service address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:50061";

/// Client for communicating with the profile service
pub struct ProfileClient {
    client: ProfileServiceClient,
    address: String,
    timeout: Duration,
}

impl ProfileClient {
    /// Create a client; the connection is established on first use
    pub fn new(address: &str, timeout: Duration) -> Result<Self> {
        let channel = tonic::transport::Endpoint::from_shared(address.to_string())?
            .connect_timeout(timeout)
            .connect_lazy();

        Ok(Self {
            client: ProfileServiceClient::new(channel),
            address: address.to_string(),
            timeout,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Bound a whole call (connect, handshake, response) by the request timeout
    async fn call<T, F>(&self, request: F) -> Result<T, SubmitError>
    where
        F: Future<Output = Result<tonic::Response<T>, tonic::Status>>,
    {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(response) => Ok(response?.into_inner()),
            Err(_) => {
                tracing::debug!(address = %self.address, "Request exceeded {:?}", self.timeout);
                Err(SubmitError::Timeout)
            }
        }
    }
}

#[async_trait]
impl ProfileApiTrait for ProfileClient {
    async fn get_profile(&self) -> Result<ProfileUpdate, SubmitError> {
        let mut client = self.client.clone();
        let response = self
            .call(client.get_profile(proto::GetProfileRequest {}))
            .await?;

        Ok(ProfileUpdate {
            name: response.name,
            email: response.email,
        })
    }

    async fn update_password(&self, payload: PasswordUpdate) -> Result<(), SubmitError> {
        let request = proto::UpdatePasswordRequest {
            current_password: payload.current_password,
            new_password: payload.new_password,
            confirm_password: payload.confirm_password,
        };
        let mut client = self.client.clone();
        let response = self.call(client.update_password(request)).await?;
        update_result(response, "Password update was rejected")
    }

    async fn update_profile(&self, payload: ProfileUpdate) -> Result<(), SubmitError> {
        let request = proto::UpdateProfileRequest {
            name: payload.name,
            email: payload.email,
        };
        let mut client = self.client.clone();
        let response = self.call(client.update_profile(request)).await?;
        update_result(response, "Profile update was rejected")
    }
}

/// Turn an `UpdateResponse` into the submission verdict
fn update_result(response: proto::UpdateResponse, fallback: &str) -> Result<(), SubmitError> {
    if response.success {
        return Ok(());
    }

    let mut field_errors = FieldErrors::new();
    for err in &response.field_errors {
        field_errors.add(&form_field_name(&err.field), err.message.clone());
    }

    let message = if response.error.is_empty() {
        fallback.to_string()
    } else {
        response.error
    };

    Err(SubmitError::Rejected {
        message,
        field_errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_update_result_success() {
        let response = proto::UpdateResponse {
            success: true,
            ..Default::default()
        };
        assert!(update_result(response, "rejected").is_ok());
    }

    #[test]
    fn test_update_result_rejection_carries_field_errors() {
        let response = proto::UpdateResponse {
            success: false,
            error: "Current password is incorrect".to_string(),
            field_errors: vec![proto::FieldError {
                field: "current_password".to_string(),
                message: "Incorrect password".to_string(),
            }],
        };
        match update_result(response, "rejected") {
            Err(SubmitError::Rejected {
                message,
                field_errors,
            }) => {
                assert_eq!(message, "Current password is incorrect");
                assert_eq!(field_errors.get("currentPassword"), Some("Incorrect password"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_update_result_uses_fallback_message() {
        let response = proto::UpdateResponse::default();
        let err = update_result(response, "Profile update was rejected").unwrap_err();
        assert_eq!(err.to_string(), "Profile update was rejected");
    }

    #[test]
    fn test_new_rejects_invalid_address() {
        assert!(ProfileClient::new("not a uri", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn test_new_is_lazy() {
        let client = ProfileClient::new(DEFAULT_ADDRESS, Duration::from_secs(1)).unwrap();
        assert_eq!(client.address(), DEFAULT_ADDRESS);
    }

    #[tokio::test]
    async fn test_unresponsive_service_times_out() {
        // Accepts connections but never speaks HTTP/2
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = ProfileClient::new(&address, Duration::from_millis(200)).unwrap();
        let err = client
            .update_profile(ProfileUpdate {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Timeout), "got {err:?}");
        assert_eq!(err.to_string(), "Request timed out");
    }
}
