//! Inventory Port (Driven Port)
//!
//! Interface for the remote catalog/stock service.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{ItemId, Money, Quantity};

/// Point-in-time copy of a remote inventory item.
///
/// Used for validation, pricing, and display enrichment. Intentionally not
/// kept live-synchronized: prices captured from a snapshot are frozen into
/// the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    /// Remote item identifier.
    pub id: ItemId,
    /// Display title.
    pub title: String,
    /// Short description.
    pub synopsis: String,
    /// Author name.
    pub author: String,
    /// Catalog category.
    pub category: String,
    /// Publication date as supplied by the catalog.
    pub publish_date: String,
    /// Gross unit price.
    pub unit_price: Money,
    /// Discount percentage in effect (0-100).
    pub discount_percent: Decimal,
    /// Units currently in stock.
    pub stock: u32,
    /// Whether the item is available for ordering.
    pub active: bool,
}

/// Inventory port error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InventoryError {
    /// Item does not exist in the catalog.
    #[error("Item not found: {item_id}")]
    NotFound {
        /// The missing item id.
        item_id: ItemId,
    },

    /// The remote rejected a stock deduction for lack of stock.
    #[error("Insufficient stock for item {item_id}")]
    InsufficientStock {
        /// The item id.
        item_id: ItemId,
    },

    /// Transport failure reaching the inventory service (includes timeouts).
    #[error("Inventory service unreachable: {message}")]
    Unreachable {
        /// Error details.
        message: String,
    },
}

/// Port for inventory service interactions.
///
/// `decrement_stock` is per-item atomic at the remote system; there is no
/// cross-item atomicity. No retries are performed behind this port.
#[async_trait]
pub trait InventoryPort: Send + Sync {
    /// Fetch a snapshot of one item.
    async fn get_item(&self, item_id: &ItemId) -> Result<ItemSnapshot, InventoryError>;

    /// Deduct `quantity` units from the item's stock.
    async fn decrement_stock(
        &self,
        item_id: &ItemId,
        quantity: Quantity,
    ) -> Result<(), InventoryError>;

    /// Return `quantity` units to the item's stock.
    ///
    /// Used only by the finalize compensation path to undo deductions after
    /// a mid-sequence failure.
    async fn restore_stock(
        &self,
        item_id: &ItemId,
        quantity: Quantity,
    ) -> Result<(), InventoryError>;
}
