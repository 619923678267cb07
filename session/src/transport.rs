//! The seam between the session core and a concrete HTTP stack.
//!
//! The browser app implements [`Transport`] with `gloo-net`, the CLI with
//! `reqwest`, and tests with a recording mock. Futures are `?Send` because
//! browser fetches are bound to the JS event loop.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::request::ApiRequest;

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn non-2xx responses into errors.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unauthorized`] for 401/403, [`ApiError::Status`] otherwise.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        match self.status {
            200..=299 => Ok(self),
            401 | 403 => Err(ApiError::Unauthorized { status: self.status }),
            status => Err(ApiError::Status {
                status,
                body: self.body,
            }),
        }
    }

    /// Check the status and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Status errors as in [`Self::error_for_status`], or [`ApiError::Json`].
    pub fn json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let response = self.error_for_status()?;
        Ok(serde_json::from_str(&response.body)?)
    }
}

/// Executes [`ApiRequest`]s.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send one request and return whatever response came back.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no HTTP response was received.
    /// Non-2xx statuses are *not* errors at this layer.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}
