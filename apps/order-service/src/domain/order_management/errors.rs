//! Order management errors.

use std::fmt;

use super::value_objects::OrderStatus;

/// Errors that can occur in order management.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// An order must contain at least one line.
    EmptyLines,

    /// Invalid order parameters.
    InvalidParameters {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// Operation not allowed in the order's current status.
    WrongState {
        /// Order ID.
        order_id: String,
        /// Current status.
        status: OrderStatus,
    },

    /// Order not found.
    NotFound {
        /// Order ID.
        order_id: String,
    },

    /// A finalize attempt is already in flight for this order.
    FinalizeInProgress {
        /// Order ID.
        order_id: String,
    },
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLines => {
                write!(f, "An order must contain at least one line")
            }
            Self::InvalidParameters { field, message } => {
                write!(f, "Invalid order parameter '{field}': {message}")
            }
            Self::WrongState { order_id, status } => {
                write!(f, "Order {order_id} is in status {status}")
            }
            Self::NotFound { order_id } => {
                write!(f, "Order not found: {order_id}")
            }
            Self::FinalizeInProgress { order_id } => {
                write!(f, "Finalize already in progress for order {order_id}")
            }
        }
    }
}

impl std::error::Error for OrderError {}
