//! Transport error types

use thiserror::Error;

/// Transport failure with classification
///
/// All failure modes collapse to one shape: the caller displays `message`
/// (and `detail` when present) but never parses them. `kind` exists for
/// logging and tests, not for dispatch.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
    pub detail: Option<String>,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Timeout, message)
    }

    pub fn http(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Http, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Malformed, message)
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Remote, message)
    }
}

/// Failure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection failed, service unreachable
    Network,
    /// Fixed request timeout exceeded
    Timeout,
    /// Non-2xx HTTP status
    Http,
    /// Response body undecodable or missing required fields
    Malformed,
    /// Service answered but reported failure (`success: false`)
    Remote,
}
