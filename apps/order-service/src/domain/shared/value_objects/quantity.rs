//! Quantity value object for order line quantities.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// Maximum quantity accepted on a single order line.
const MAX_PER_LINE: u32 = 10_000;

/// A whole-unit quantity on an order line.
///
/// Order lines deal in whole items only; there are no fractional quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Create a new Quantity.
    #[must_use]
    pub const fn new(amount: u32) -> Self {
        Self(amount)
    }

    /// Get the inner value.
    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.0
    }

    /// Returns true if this quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Validate the quantity for use on an order line.
    ///
    /// # Errors
    ///
    /// Returns error if the quantity is zero or exceeds the per-line maximum.
    pub fn validate_for_line(&self) -> Result<(), DomainError> {
        if self.0 == 0 {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: "Line quantity must be at least 1".to_string(),
            });
        }
        if self.0 > MAX_PER_LINE {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: format!("Line quantity exceeds maximum: {MAX_PER_LINE}"),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Quantity {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}
