//! Backend configuration

use std::time::Duration;

/// Fixed upper bound on one generation request/response exchange.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the remote generation backend
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the generation service (e.g. `http://localhost:5000`).
    /// Trailing slashes are tolerated; the client trims them before joining
    /// endpoint paths.
    pub base_url: String,
    /// Per-request timeout. Exceeding it surfaces as a transport failure,
    /// never a hang.
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var("STORYBREW_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());

        let timeout = std::env::var("STORYBREW_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map_or(REQUEST_TIMEOUT, Duration::from_secs);

        Self { base_url, timeout }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
