//! Inventory adapter error types.

use thiserror::Error;

/// Errors from the inventory HTTP transport.
///
/// The adapter maps these onto the port taxonomy per call, since `NotFound`
/// and `InsufficientStock` need the item id for context.
#[derive(Debug, Error, Clone)]
pub enum InventoryHttpError {
    /// Network error (includes timeouts).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status.
    #[error("Inventory service returned status {code}")]
    Status {
        /// The HTTP status code.
        code: u16,
    },

    /// Response body could not be parsed.
    #[error("Unparseable inventory response: {0}")]
    Parse(String),
}
