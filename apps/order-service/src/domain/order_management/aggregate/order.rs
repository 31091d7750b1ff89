//! Order Aggregate Root
//!
//! The Order aggregate owns its lines and derives its total from them.
//! Once finalized, the line set and total are immutable.

use serde::{Deserialize, Serialize};

use super::OrderLine;
use crate::domain::order_management::errors::OrderError;
use crate::domain::order_management::value_objects::OrderStatus;
use crate::domain::shared::{ItemId, Money, OrderId, OwnerId, Quantity, Timestamp};

/// Input for one line of a new or replaced order.
///
/// Carries the net unit price already computed from the inventory snapshot;
/// the aggregate freezes it, it is never re-read later.
#[derive(Debug, Clone)]
pub struct LineDraft {
    /// Remote inventory item id.
    pub item_id: ItemId,
    /// Requested quantity.
    pub quantity: Quantity,
    /// Net unit price captured from the snapshot.
    pub unit_price: Money,
}

/// Command to create a new order.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// The authenticated actor who will own the order.
    pub owner_id: OwnerId,
    /// Priced lines; must be non-empty.
    pub lines: Vec<LineDraft>,
}

impl CreateOrderCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if the line set is empty or any line carries an
    /// invalid quantity or negative price.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.lines.is_empty() {
            return Err(OrderError::EmptyLines);
        }
        validate_drafts(&self.lines)
    }
}

fn validate_drafts(drafts: &[LineDraft]) -> Result<(), OrderError> {
    for draft in drafts {
        draft
            .quantity
            .validate_for_line()
            .map_err(|e| OrderError::InvalidParameters {
                field: "quantity".to_string(),
                message: e.to_string(),
            })?;
        draft
            .unit_price
            .validate_as_price()
            .map_err(|e| OrderError::InvalidParameters {
                field: "unit_price".to_string(),
                message: e.to_string(),
            })?;
    }
    Ok(())
}

/// Parameters for reconstituting an Order from storage.
///
/// Used by stores to rebuild aggregates from persisted state. No validation
/// is re-run; the aggregate is restored to a known valid state.
#[derive(Debug, Clone)]
pub struct ReconstitutedOrderParams {
    /// Order identifier.
    pub id: OrderId,
    /// Owning actor.
    pub owner_id: OwnerId,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: Timestamp,
    /// Persisted total.
    pub total: Money,
    /// Owned line set.
    pub lines: Vec<OrderLine>,
}

/// Order Aggregate Root.
///
/// Owns a non-empty sequence of lines. `total` is derived: it is recomputed
/// on every line-set mutation and never settable independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    owner_id: OwnerId,
    status: OrderStatus,
    created_at: Timestamp,
    total: Money,
    lines: Vec<OrderLine>,
}

impl Order {
    /// Create a new pending order from a command.
    ///
    /// Assigns a fresh order id, builds the owned lines with their
    /// back-references, and derives the total.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn new(cmd: CreateOrderCommand) -> Result<Self, OrderError> {
        cmd.validate()?;

        let id = OrderId::generate();
        let lines = build_lines(&id, cmd.lines);

        let mut order = Self {
            id,
            owner_id: cmd.owner_id,
            status: OrderStatus::Pending,
            created_at: Timestamp::now(),
            total: Money::ZERO,
            lines,
        };
        order.recompute_total();

        Ok(order)
    }

    /// Reconstitute an order from stored state.
    #[must_use]
    pub fn reconstitute(params: ReconstitutedOrderParams) -> Self {
        Self {
            id: params.id,
            owner_id: params.owner_id,
            status: params.status,
            created_at: params.created_at,
            total: params.total,
            lines: params.lines,
        }
    }

    // ========================================================================
    // Getters
    // ========================================================================

    /// Get the order id.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Get the owner's id.
    #[must_use]
    pub const fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Get the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get the derived total.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Get the owned lines, in creation order.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    // ========================================================================
    // State Transitions
    // ========================================================================

    /// Transition the order to `FINALIZED`.
    ///
    /// The caller is responsible for having deducted stock for every line
    /// first; this method only performs the state transition.
    ///
    /// # Errors
    ///
    /// Returns `WrongState` if the order is not `PENDING`.
    pub fn finalize(&mut self) -> Result<(), OrderError> {
        if !self.status.can_finalize() {
            return Err(OrderError::WrongState {
                order_id: self.id.as_str().to_string(),
                status: self.status,
            });
        }
        self.status = OrderStatus::Finalized;
        Ok(())
    }

    /// Replace the entire line set and recompute the total.
    ///
    /// Existing lines are discarded; the new set gets fresh line ids. This
    /// matches the store's whole-aggregate replace semantics.
    ///
    /// # Errors
    ///
    /// Returns `WrongState` if the order is finalized, `EmptyLines` if the
    /// replacement set is empty, or a parameter error for invalid drafts.
    pub fn replace_lines(&mut self, drafts: Vec<LineDraft>) -> Result<(), OrderError> {
        if !self.status.is_mutable() {
            return Err(OrderError::WrongState {
                order_id: self.id.as_str().to_string(),
                status: self.status,
            });
        }
        if drafts.is_empty() {
            return Err(OrderError::EmptyLines);
        }
        validate_drafts(&drafts)?;

        self.lines = build_lines(&self.id, drafts);
        self.recompute_total();
        Ok(())
    }

    // ========================================================================
    // Private Helpers
    // ========================================================================

    fn recompute_total(&mut self) {
        self.total = self.lines.iter().map(OrderLine::subtotal).sum();
    }
}

fn build_lines(order_id: &OrderId, drafts: Vec<LineDraft>) -> Vec<OrderLine> {
    drafts
        .into_iter()
        .map(|d| OrderLine::new(order_id.clone(), d.item_id, d.quantity, d.unit_price))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn draft(item: &str, qty: u32, price: &str) -> LineDraft {
        LineDraft {
            item_id: ItemId::new(item),
            quantity: Quantity::new(qty),
            unit_price: Money::new(price.parse().unwrap()),
        }
    }

    fn make_create_command() -> CreateOrderCommand {
        CreateOrderCommand {
            owner_id: OwnerId::new("42"),
            lines: vec![draft("item-1", 2, "10.00"), draft("item-2", 1, "4.00")],
        }
    }

    #[test]
    fn order_new_is_pending_with_derived_total() {
        let order = Order::new(make_create_command()).unwrap();

        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.owner_id().as_str(), "42");
        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.total(), Money::new(dec!(24.00)));
    }

    #[test]
    fn order_new_lines_carry_back_reference() {
        let order = Order::new(make_create_command()).unwrap();
        for line in order.lines() {
            assert_eq!(line.order_id(), order.id());
        }
    }

    #[test]
    fn order_new_preserves_line_order() {
        let order = Order::new(make_create_command()).unwrap();
        assert_eq!(order.lines()[0].item_id().as_str(), "item-1");
        assert_eq!(order.lines()[1].item_id().as_str(), "item-2");
    }

    #[test]
    fn order_new_rejects_empty_lines() {
        let cmd = CreateOrderCommand {
            owner_id: OwnerId::new("42"),
            lines: vec![],
        };
        assert!(matches!(Order::new(cmd), Err(OrderError::EmptyLines)));
    }

    #[test]
    fn order_new_rejects_zero_quantity() {
        let cmd = CreateOrderCommand {
            owner_id: OwnerId::new("42"),
            lines: vec![draft("item-1", 0, "10.00")],
        };
        let err = Order::new(cmd).unwrap_err();
        match err {
            OrderError::InvalidParameters { field, .. } => assert_eq!(field, "quantity"),
            _ => panic!("Expected InvalidParameters error"),
        }
    }

    #[test]
    fn order_new_rejects_negative_price() {
        let cmd = CreateOrderCommand {
            owner_id: OwnerId::new("42"),
            lines: vec![draft("item-1", 1, "-5.00")],
        };
        let err = Order::new(cmd).unwrap_err();
        match err {
            OrderError::InvalidParameters { field, .. } => assert_eq!(field, "unit_price"),
            _ => panic!("Expected InvalidParameters error"),
        }
    }

    #[test]
    fn order_finalize_from_pending() {
        let mut order = Order::new(make_create_command()).unwrap();
        order.finalize().unwrap();
        assert_eq!(order.status(), OrderStatus::Finalized);
    }

    #[test]
    fn order_finalize_twice_fails() {
        let mut order = Order::new(make_create_command()).unwrap();
        order.finalize().unwrap();

        let err = order.finalize().unwrap_err();
        match err {
            OrderError::WrongState { status, .. } => assert_eq!(status, OrderStatus::Finalized),
            _ => panic!("Expected WrongState error"),
        }
    }

    #[test]
    fn order_replace_lines_recomputes_total() {
        let mut order = Order::new(make_create_command()).unwrap();

        order
            .replace_lines(vec![draft("item-3", 5, "2.00")])
            .unwrap();

        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].item_id().as_str(), "item-3");
        assert_eq!(order.total(), Money::new(dec!(10.00)));
    }

    #[test]
    fn order_replace_lines_assigns_fresh_ids() {
        let mut order = Order::new(make_create_command()).unwrap();
        let old_id = order.lines()[0].id().clone();

        order
            .replace_lines(vec![draft("item-1", 2, "10.00")])
            .unwrap();

        assert_ne!(order.lines()[0].id(), &old_id);
    }

    #[test]
    fn order_replace_lines_rejects_empty_set() {
        let mut order = Order::new(make_create_command()).unwrap();
        assert!(matches!(
            order.replace_lines(vec![]),
            Err(OrderError::EmptyLines)
        ));
    }

    #[test]
    fn order_replace_lines_fails_when_finalized() {
        let mut order = Order::new(make_create_command()).unwrap();
        let total_before = order.total();
        order.finalize().unwrap();

        let result = order.replace_lines(vec![draft("item-3", 1, "1.00")]);
        assert!(matches!(result, Err(OrderError::WrongState { .. })));
        assert_eq!(order.total(), total_before);
        assert_eq!(order.lines().len(), 2);
    }

    #[test]
    fn order_serde_roundtrip() {
        let order = Order::new(make_create_command()).unwrap();

        let json = serde_json::to_string(&order).unwrap();
        let parsed: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, order);
        assert_eq!(parsed.total(), order.total());
        assert_eq!(parsed.lines(), order.lines());
    }

    #[test]
    fn order_reconstitute() {
        let id = OrderId::new("ord-recon");
        let lines = vec![OrderLine::reconstitute(
            crate::domain::shared::LineId::new("line-1"),
            id.clone(),
            ItemId::new("item-1"),
            Quantity::new(2),
            Money::new(dec!(10.00)),
        )];
        let created_at = Timestamp::now();

        let order = Order::reconstitute(ReconstitutedOrderParams {
            id,
            owner_id: OwnerId::new("42"),
            status: OrderStatus::Finalized,
            created_at,
            total: Money::new(dec!(20.00)),
            lines,
        });

        assert_eq!(order.id().as_str(), "ord-recon");
        assert_eq!(order.status(), OrderStatus::Finalized);
        assert_eq!(order.total(), Money::new(dec!(20.00)));
        assert_eq!(order.created_at(), created_at);
    }
}
