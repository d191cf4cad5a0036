// SPDX-License-Identifier: MPL-2.0
//! Order submission transport port.
//!
//! # Design Notes
//!
//! - The transport only moves bytes: interpreting the JSON body is the
//!   submitter's job, so malformed bodies are handled in one place
//! - Any HTTP status is a successful transport result; only failures to get
//!   a response at all are [`TransportError`]s

use crate::domain::order::OrderPayload;
use std::fmt;

// =============================================================================
// TransportError
// =============================================================================

/// Failures that prevent a response from being received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, TLS or I/O failure.
    Network(String),

    /// The request could not be built (bad URL, invalid part).
    InvalidRequest(String),
}

impl TransportError {
    /// The underlying message, possibly empty.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            TransportError::Network(msg) | TransportError::InvalidRequest(msg) => msg,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "Network failure: {msg}"),
            TransportError::InvalidRequest(msg) => write!(f, "Invalid request: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

// =============================================================================
// TransportResponse
// =============================================================================

/// Raw response to an order submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// =============================================================================
// OrderTransport
// =============================================================================

/// Sends an order payload as one multipart POST.
#[allow(async_fn_in_trait)]
pub trait OrderTransport {
    async fn post_order(
        &self,
        endpoint: &str,
        payload: &OrderPayload,
    ) -> Result<TransportResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_covers_2xx_only() {
        assert!(TransportResponse::new(200, "").is_success());
        assert!(TransportResponse::new(201, "").is_success());
        assert!(!TransportResponse::new(302, "").is_success());
        assert!(!TransportResponse::new(400, "").is_success());
    }

    #[test]
    fn message_exposes_inner_text() {
        assert_eq!(TransportError::Network("refused".into()).message(), "refused");
        assert_eq!(TransportError::Network(String::new()).message(), "");
    }
}
