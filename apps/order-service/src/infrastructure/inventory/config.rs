//! Inventory adapter configuration.

use std::time::Duration;

/// Default per-call timeout for inventory HTTP calls.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the inventory HTTP adapter.
#[derive(Debug, Clone)]
pub struct InventoryConfig {
    /// Base URL of the inventory service (no trailing slash).
    pub base_url: String,
    /// Per-call timeout; expiry surfaces as an unreachable error.
    pub timeout: Duration,
}

impl InventoryConfig {
    /// Create a new configuration with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
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
        let config = InventoryConfig::new("http://localhost:8082");
        assert_eq!(config.base_url, "http://localhost:8082");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn config_with_timeout() {
        let config =
            InventoryConfig::new("http://localhost:8082").with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
