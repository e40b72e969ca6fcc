//! Error types for the employee proxy
//!
//! `UpstreamError` describes what went wrong on a single outbound call;
//! `ProxyError` is what the record service surfaces to the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Upstream Error Enum ==
/// Failure of a call against the upstream employee service.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Upstream answered with a 5xx status
    #[error("upstream server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Connection, timeout or other transport-level failure
    #[error("upstream transport error: {0}")]
    Transport(String),

    /// Upstream answered with a 4xx status
    #[error("upstream rejected request with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// Response body could not be decoded
    #[error("malformed upstream response: {0}")]
    Malformed(String),

    /// Transient failures persisted through every retry attempt
    #[error("upstream unavailable after {attempts} attempts: {last}")]
    Unavailable {
        attempts: u32,
        last: Box<UpstreamError>,
    },
}

impl UpstreamError {
    /// Returns true for failures worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, UpstreamError::Server { .. } | UpstreamError::Transport(_))
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            UpstreamError::Malformed(e.to_string())
        } else {
            UpstreamError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(e: serde_json::Error) -> Self {
        UpstreamError::Malformed(e.to_string())
    }
}

// == Proxy Error Enum ==
/// Failure kinds surfaced by the record service.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Malformed identifier or disallowed characters in a name
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No matching record after every fallback path
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream accepted a create but returned no usable record
    #[error("Creation failed: {0}")]
    CreationFailed(String),

    /// Upstream call failed and no cache fallback applies
    #[error("Remote access failure: {0}")]
    RemoteAccessFailure(String),

    /// Upstream failure passed through untouched
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ProxyError {
    /// Short machine-readable classification used in error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::InvalidInput(_) => "invalid_input",
            ProxyError::NotFound(_) => "not_found",
            ProxyError::CreationFailed(_) => "creation_failed",
            ProxyError::RemoteAccessFailure(_) => "remote_access_failure",
            ProxyError::Upstream(_) => "upstream_unavailable",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ProxyError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ProxyError::NotFound(_) => StatusCode::NOT_FOUND,
            ProxyError::CreationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::RemoteAccessFailure(_) => StatusCode::SERVICE_UNAVAILABLE,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(kind = self.kind(), "Request failed: {}", self);
        } else {
            tracing::debug!(kind = self.kind(), "Request rejected: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string(),
            "kind": self.kind(),
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for service operations.
pub type Result<T> = std::result::Result<T, ProxyError>;
