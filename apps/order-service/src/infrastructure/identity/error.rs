//! Identity adapter error types.

use thiserror::Error;

use crate::application::ports::IdentityError;

/// Errors from the identity RPC transport.
#[derive(Debug, Error, Clone)]
pub enum IdentityRpcError {
    /// Network error (includes timeouts).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success HTTP status from the RPC endpoint.
    #[error("RPC endpoint returned status {code}")]
    Status {
        /// The HTTP status code.
        code: u16,
    },

    /// Response body could not be parsed.
    #[error("Unparseable RPC response: {0}")]
    Parse(String),
}

impl From<IdentityRpcError> for IdentityError {
    fn from(err: IdentityRpcError) -> Self {
        match err {
            IdentityRpcError::Network(message) => Self::Unreachable { message },
            IdentityRpcError::Status { code } => Self::Unreachable {
                message: format!("status {code}"),
            },
            IdentityRpcError::Parse(message) => Self::Malformed { message },
        }
    }
}
