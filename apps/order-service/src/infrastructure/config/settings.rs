//! Environment-based settings.
//!
//! # Environment Variables
//!
//! - `IDENTITY_RPC_ENDPOINT`: identity RPC endpoint
//!   (default: `http://localhost:8081/rpc`)
//! - `IDENTITY_TIMEOUT_SECS`: identity per-call timeout (default: 10)
//! - `INVENTORY_BASE_URL`: inventory service base URL
//!   (default: `http://localhost:8082`)
//! - `INVENTORY_TIMEOUT_SECS`: inventory per-call timeout (default: 10)

use std::time::Duration;

use thiserror::Error;

use crate::infrastructure::identity::IdentityConfig;
use crate::infrastructure::inventory::InventoryConfig;

const DEFAULT_IDENTITY_ENDPOINT: &str = "http://localhost:8081/rpc";
const DEFAULT_INVENTORY_BASE_URL: &str = "http://localhost:8082";

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An environment variable held an unparseable value.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue {
        /// Variable name.
        var: String,
        /// Error details.
        message: String,
    },
}

/// Gateway settings for the order service.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Identity gateway configuration.
    pub identity: IdentityConfig,
    /// Inventory gateway configuration.
    pub inventory: InventoryConfig,
}

impl Settings {
    /// Load settings from environment variables, using defaults for any
    /// that are unset.
    ///
    /// # Errors
    ///
    /// Returns error if a timeout variable is present but not an integer.
    pub fn from_env() -> Result<Self, SettingsError> {
        let identity_endpoint = std::env::var("IDENTITY_RPC_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_IDENTITY_ENDPOINT.to_string());
        let inventory_base_url = std::env::var("INVENTORY_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_INVENTORY_BASE_URL.to_string());

        let identity_timeout = timeout_from_env("IDENTITY_TIMEOUT_SECS")?;
        let inventory_timeout = timeout_from_env("INVENTORY_TIMEOUT_SECS")?;

        let mut identity = IdentityConfig::new(identity_endpoint);
        if let Some(timeout) = identity_timeout {
            identity = identity.with_timeout(timeout);
        }
        let mut inventory = InventoryConfig::new(inventory_base_url);
        if let Some(timeout) = inventory_timeout {
            inventory = inventory.with_timeout(timeout);
        }

        Ok(Self {
            identity,
            inventory,
        })
    }
}

fn timeout_from_env(var: &str) -> Result<Option<Duration>, SettingsError> {
    match std::env::var(var) {
        Err(_) => Ok(None),
        Ok(raw) => raw
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|e| SettingsError::InvalidValue {
                var: var.to_string(),
                message: e.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var mutation is process-global, so these tests only exercise the
    // default path and the parser in isolation.

    #[test]
    fn settings_defaults() {
        let settings = Settings::from_env().unwrap();
        assert!(!settings.identity.endpoint.is_empty());
        assert!(!settings.inventory.base_url.is_empty());
    }

    #[test]
    fn timeout_parser_absent_var_is_none() {
        assert!(
            timeout_from_env("ORDER_SERVICE_TEST_UNSET_TIMEOUT")
                .unwrap()
                .is_none()
        );
    }
}
