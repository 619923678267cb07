//! Error types shared by the API client and the durable store.

/// Failure of a request against the workout API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (network, CORS, runtime).
    #[error("request failed: {0}")]
    Transport(String),
    /// The API rejected the credential (401/403).
    #[error("not authorized (HTTP {status})")]
    Unauthorized { status: u16 },
    /// Any other non-2xx response.
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status when the failure carried one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { status } | Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Json(_) => None,
        }
    }
}

/// Failure writing the durable credential store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("durable storage is not available")]
    Unavailable,
    #[error("durable storage write failed: {0}")]
    Write(String),
}
