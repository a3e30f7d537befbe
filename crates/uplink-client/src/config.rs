//! HTTP client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default mission API location
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Configuration for [`HttpScenarioApi`](crate::HttpScenarioApi)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root; `/scenarios/...` is appended to it
    pub base_url: String,
    /// Per-request timeout in seconds; `None` or `0` leaves requests unbounded
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With API root
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// With per-request timeout
    ///
    /// Sub-second remainders round up to the next whole second; a zero
    /// duration clears the timeout.
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
        self.timeout_secs = (secs > 0).then_some(secs);
        self
    }

    /// Request timeout, if configured and non-zero
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}
