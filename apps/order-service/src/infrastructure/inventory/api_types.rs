//! Wire types for the inventory HTTP API.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::ports::ItemSnapshot;
use crate::domain::shared::{ItemId, Money};

/// `GET /items/{id}` response body.
///
/// Display attributes are optional on the wire; the price, stock, and
/// availability fields are required since validation depends on them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Item identifier.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Short description.
    #[serde(default)]
    pub synopsis: String,
    /// Author name.
    #[serde(default)]
    pub author: String,
    /// Catalog category.
    #[serde(default)]
    pub category: String,
    /// Publication date.
    #[serde(default)]
    pub publish_date: String,
    /// Gross unit price.
    pub price: Decimal,
    /// Discount percentage in effect (0-100).
    #[serde(default)]
    pub discount_percent: Decimal,
    /// Units in stock.
    pub stock: u32,
    /// Whether the item is orderable.
    pub active: bool,
}

impl ItemResponse {
    /// Convert the wire response into an [`ItemSnapshot`].
    #[must_use]
    pub fn into_snapshot(self) -> ItemSnapshot {
        ItemSnapshot {
            id: ItemId::new(self.id),
            title: self.title,
            synopsis: self.synopsis,
            author: self.author,
            category: self.category,
            publish_date: self.publish_date,
            unit_price: Money::new(self.price),
            discount_percent: self.discount_percent,
            stock: self.stock,
            active: self.active,
        }
    }
}
