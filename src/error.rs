//! Per-request failure taxonomy.
//!
//! Every variant is converted into a 500 response carrying the CORS headers
//! and a JSON envelope `{"error": true, "message": "..."}`. None of them
//! reaches beyond the request that produced it.

use axum::http::StatusCode;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Failure while relaying one request to the upstream.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Upstream answered with a non-success status.
    #[error("HTTP error: {status} - {reason}")]
    UpstreamStatus { status: u16, reason: String },

    /// DNS, refused connection, TLS handshake or a broken transfer.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The outbound call exceeded its deadline.
    #[error("Connection error: upstream timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// Suffix contains a `.` or `..` segment (literal or `%2e`); never forwarded.
    #[error("Rejected path: dot segment '{0}' is not forwarded upstream")]
    DotSegment(String),

    /// Anything else (malformed target URL, unreadable response, ...).
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl ProxyError {
    /// Classify a reqwest failure into the taxonomy above.
    pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            return ProxyError::Timeout(timeout);
        }
        if let Some(status) = err.status() {
            return ProxyError::from_status(status, None);
        }
        if err.is_connect() || err.is_request() || err.is_body() {
            return ProxyError::Connection(error_chain(&err));
        }
        ProxyError::Unexpected(error_chain(&err))
    }

    /// Prefer the reason phrase the upstream sent; fall back to the canonical one.
    pub fn from_status(status: StatusCode, reason: Option<&str>) -> Self {
        let reason = reason
            .filter(|r| !r.is_empty())
            .or_else(|| status.canonical_reason())
            .unwrap_or("Unknown");
        ProxyError::UpstreamStatus {
            status: status.as_u16(),
            reason: reason.to_string(),
        }
    }

    /// JSON body sent to the client.
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: true,
            message: self.to_string(),
        }
    }
}

/// Wire shape of a failed relay.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub error: bool,
    pub message: String,
}

/// reqwest's Display omits the cause ("error sending request"), so walk the sources.
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
