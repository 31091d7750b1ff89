//! Identity adapter configuration.

use std::time::Duration;

/// Default per-call timeout for identity RPC calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the identity RPC adapter.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// RPC endpoint URL (single POST endpoint).
    pub endpoint: String,
    /// Per-call timeout; expiry surfaces as an unreachable error.
    pub timeout: Duration,
}

impl IdentityConfig {
    /// Create a new configuration with the default timeout.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-call timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = IdentityConfig::new("http://localhost:8081/rpc");
        assert_eq!(config.endpoint, "http://localhost:8081/rpc");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn config_with_timeout() {
        let config =
            IdentityConfig::new("http://localhost:8081/rpc").with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout, Duration::from_secs(2));
    }
}
