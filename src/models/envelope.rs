//! Upstream response envelope
//!
//! Every upstream answer wraps its payload as `{ data, status, error }`.

use serde::{Deserialize, Serialize};

/// Processing status reported by the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvelopeStatus {
    #[serde(rename = "Successfully processed request.")]
    Handled,
    #[serde(rename = "Failed to process request.")]
    Error,
    #[serde(other)]
    Unknown,
}

/// Wire-level wrapper carrying payload, status and optional error string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EnvelopeStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Wraps a successfully handled payload.
    pub fn handled(data: T) -> Self {
        Self {
            data: Some(data),
            status: Some(EnvelopeStatus::Handled),
            error: None,
        }
    }

    /// Builds an error envelope without payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            status: Some(EnvelopeStatus::Error),
            error: Some(message.into()),
        }
    }

    /// Consumes the envelope, returning the payload if any.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
