//! Orchestrator error taxonomy.
//!
//! Authorization and validation failures are surfaced to the caller
//! verbatim; a transport layer maps them onto its status codes
//! (401/403/400/404/409/500-equivalents).

use thiserror::Error;

use crate::domain::order_management::{OrderError, OrderStatus};
use crate::domain::shared::{ItemId, OrderId, OwnerId, Role};

/// Failure of the shared authorization precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// No credential, or the header does not carry the bearer scheme.
    #[error("Bearer token missing or malformed")]
    MissingToken,

    /// The identity service rejected the token.
    #[error("Token invalid or expired")]
    InvalidToken,

    /// The token is valid but does not carry the required role.
    #[error("Access denied: role {required} required")]
    Forbidden {
        /// The role the operation requires.
        required: Role,
    },

    /// The identity service could not be consulted.
    #[error("Identity service unavailable: {message}")]
    IdentityUnavailable {
        /// Error details.
        message: String,
    },
}

/// One line's validation failure, tagged with the offending item.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// Item does not exist in the catalog.
    #[error("Item {item_id} does not exist")]
    NotFound {
        /// The offending item id.
        item_id: ItemId,
    },

    /// Item exists but is not available for ordering.
    #[error("Item {item_id} is not available")]
    Inactive {
        /// The offending item id.
        item_id: ItemId,
    },

    /// Requested quantity exceeds the stock in the snapshot.
    #[error(
        "Insufficient stock for item {item_id}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        /// The offending item id.
        item_id: ItemId,
        /// Quantity requested.
        requested: u32,
        /// Stock available at validation time.
        available: u32,
    },

    /// The inventory service could not be consulted for this line.
    #[error("Could not read item {item_id}: {message}")]
    RemoteUnavailable {
        /// The offending item id.
        item_id: ItemId,
        /// Error details.
        message: String,
    },

    /// Requested quantity is not a positive integer within bounds.
    #[error("Invalid quantity for item {item_id}")]
    InvalidQuantity {
        /// The offending item id.
        item_id: ItemId,
    },
}

/// Top-level orchestrator error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Authorization precondition failed.
    #[error(transparent)]
    Authorization(#[from] AuthorizationError),

    /// Line validation failed; every failing line is reported, not just the
    /// first. No order was persisted and no stock was touched.
    #[error("Order validation failed with {} line error(s)", errors.len())]
    Validation {
        /// One entry per failing line.
        errors: Vec<LineError>,
    },

    /// Order not found.
    #[error("Order not found: {order_id}")]
    NotFound {
        /// The missing order id.
        order_id: OrderId,
    },

    /// The order is not in the state the operation requires.
    #[error("Order {order_id} is not PENDING (current status: {status})")]
    WrongState {
        /// The order id.
        order_id: OrderId,
        /// The order's current status.
        status: OrderStatus,
    },

    /// A concurrent finalize already holds the claim on this order.
    #[error("Finalize already in progress for order {order_id}")]
    FinalizeInProgress {
        /// The order id.
        order_id: OrderId,
    },

    /// A stock deduction failed mid-sequence during finalize. The order
    /// remains `PENDING`; `compensated` lists items whose deduction was
    /// undone, `unrecovered` items where the compensation itself failed
    /// (remote stock is inconsistent for those).
    #[error("Stock update failed for item {item_id}")]
    StockUpdate {
        /// The item whose deduction failed.
        item_id: ItemId,
        /// Items restored by compensation.
        compensated: Vec<ItemId>,
        /// Items whose compensation also failed.
        unrecovered: Vec<ItemId>,
    },

    /// The owner given to an administrative creation does not exist in the
    /// identity system.
    #[error("Owner {owner_id} does not exist in the identity system")]
    UnknownOwner {
        /// The unknown owner id.
        owner_id: OwnerId,
    },

    /// The identity service could not be consulted for a non-authorization
    /// check (owner existence).
    #[error("Identity service unavailable: {message}")]
    IdentityUnavailable {
        /// Error details.
        message: String,
    },

    /// Unexpected domain or store failure.
    #[error("Order rejected: {0}")]
    Domain(OrderError),
}

impl ServiceError {
    /// Map a domain/store error onto the service taxonomy.
    #[must_use]
    pub fn from_order_error(err: OrderError) -> Self {
        match err {
            OrderError::NotFound { order_id } => Self::NotFound {
                order_id: OrderId::new(order_id),
            },
            OrderError::WrongState { order_id, status } => Self::WrongState {
                order_id: OrderId::new(order_id),
                status,
            },
            OrderError::FinalizeInProgress { order_id } => Self::FinalizeInProgress {
                order_id: OrderId::new(order_id),
            },
            other => Self::Domain(other),
        }
    }
}
