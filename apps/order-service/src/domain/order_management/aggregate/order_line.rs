//! Order line: one item, quantity, and frozen unit price within an order.

use serde::{Deserialize, Serialize};

use crate::domain::shared::{ItemId, LineId, Money, OrderId, Quantity};

/// One item entry within an order.
///
/// The line is owned exclusively by its order (it cannot exist without one)
/// and holds a non-owning back-reference to the order's id for navigation.
/// `unit_price` is the net price captured from the inventory snapshot at
/// creation or replacement time; it never floats with later price changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    id: LineId,
    order_id: OrderId,
    item_id: ItemId,
    quantity: Quantity,
    unit_price: Money,
}

impl OrderLine {
    /// Create a new line for the given order, assigning a fresh line id.
    #[must_use]
    pub fn new(order_id: OrderId, item_id: ItemId, quantity: Quantity, unit_price: Money) -> Self {
        Self {
            id: LineId::generate(),
            order_id,
            item_id,
            quantity,
            unit_price,
        }
    }

    /// Rebuild a line from stored state, keeping its persisted id.
    #[must_use]
    pub const fn reconstitute(
        id: LineId,
        order_id: OrderId,
        item_id: ItemId,
        quantity: Quantity,
        unit_price: Money,
    ) -> Self {
        Self {
            id,
            order_id,
            item_id,
            quantity,
            unit_price,
        }
    }

    /// Get the line id.
    #[must_use]
    pub const fn id(&self) -> &LineId {
        &self.id
    }

    /// Get the owning order's id.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// Get the remote inventory item id.
    #[must_use]
    pub const fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    /// Get the quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Get the frozen net unit price.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Derived line subtotal: `quantity * unit_price`.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.unit_price * self.quantity.amount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn order_line_new_assigns_id() {
        let line = OrderLine::new(
            OrderId::new("ord-1"),
            ItemId::new("item-9"),
            Quantity::new(2),
            Money::new(dec!(10.00)),
        );

        assert!(!line.id().as_str().is_empty());
        assert_eq!(line.order_id().as_str(), "ord-1");
        assert_eq!(line.item_id().as_str(), "item-9");
        assert_eq!(line.quantity(), Quantity::new(2));
        assert_eq!(line.unit_price(), Money::new(dec!(10.00)));
    }

    #[test]
    fn order_line_subtotal() {
        let line = OrderLine::new(
            OrderId::new("ord-1"),
            ItemId::new("item-9"),
            Quantity::new(3),
            Money::new(dec!(4.00)),
        );

        assert_eq!(line.subtotal(), Money::new(dec!(12.00)));
    }

    #[test]
    fn order_line_reconstitute_keeps_id() {
        let line = OrderLine::reconstitute(
            LineId::new("line-55"),
            OrderId::new("ord-1"),
            ItemId::new("item-9"),
            Quantity::new(1),
            Money::new(dec!(5.00)),
        );

        assert_eq!(line.id().as_str(), "line-55");
    }

    #[test]
    fn order_line_serde_roundtrip() {
        let line = OrderLine::new(
            OrderId::new("ord-1"),
            ItemId::new("item-9"),
            Quantity::new(2),
            Money::new(dec!(10.00)),
        );

        let json = serde_json::to_string(&line).unwrap();
        let parsed: OrderLine = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);
    }
}
