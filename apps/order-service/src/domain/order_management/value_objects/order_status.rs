//! Order status in the lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status.
///
/// The lifecycle is `PENDING -> FINALIZED`, with `FINALIZED` terminal.
/// There is no cancelled state; deletion is a separate unconditional
/// operation on the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order created and priced; stock not yet deducted.
    Pending,
    /// Stock deducted for every line; lines and total are immutable.
    Finalized,
}

impl OrderStatus {
    /// Returns true if the order is in a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Finalized)
    }

    /// Returns true if the order may enter the finalize transition.
    #[must_use]
    pub const fn can_finalize(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true if the order's lines may still be replaced.
    #[must_use]
    pub const fn is_mutable(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Finalized => write!(f, "FINALIZED"),
        }
    }
}
