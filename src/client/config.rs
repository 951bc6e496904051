//! Client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for [`RequestClient`](crate::client::RequestClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Endpoint queried with `OPTIONS` for the bearer token.
    pub auth_url: String,
    /// Per-exchange timeout in seconds; `None` waits indefinitely.
    pub request_timeout: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            auth_url: String::new(),
            request_timeout: Some(30),
        }
    }
}

impl ClientConfig {
    /// Create a config for the given auth endpoint.
    pub fn new(auth_url: impl Into<String>) -> Self {
        Self::default().auth_url(auth_url)
    }

    /// Set the auth endpoint.
    pub fn auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self
    }

    /// Set the per-exchange timeout in seconds.
    pub fn request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout = Some(secs);
        self
    }

    /// Disable the per-exchange timeout.
    pub fn no_timeout(mut self) -> Self {
        self.request_timeout = None;
        self
    }

    /// Get the timeout as a duration.
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }
}
