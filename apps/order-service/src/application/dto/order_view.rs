//! Request DTOs and enriched order views.

use serde::{Deserialize, Serialize};

use crate::application::ports::{AuthContext, ItemSnapshot, UserRecord};
use crate::domain::order_management::{Order, OrderLine, OrderStatus};
use crate::domain::shared::{ItemId, LineId, Money, OrderId, OwnerId, Quantity, Role, Timestamp};

/// One requested line: an item and a quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineRequest {
    /// Remote inventory item id.
    pub item_id: ItemId,
    /// Requested quantity (validated by the orchestrator).
    pub quantity: u32,
}

impl LineRequest {
    /// Convenience constructor.
    #[must_use]
    pub fn new(item_id: impl Into<ItemId>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity,
        }
    }
}

/// Self-service order submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderRequest {
    /// Requested lines.
    pub lines: Vec<LineRequest>,
}

/// Administrative order creation on behalf of an owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminOrderRequest {
    /// The actor who will own the order.
    pub owner_id: OwnerId,
    /// Requested lines.
    pub lines: Vec<LineRequest>,
}

/// Owner display detail, populated best-effort.
///
/// Depending on the source (token context, administrative lookup, or a
/// failed lookup) different attribute subsets are available; absent
/// attributes stay `None` rather than aborting the carrying operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerDetail {
    /// Actor identifier.
    pub id: OwnerId,
    /// Login name, if known.
    pub username: Option<String>,
    /// Email address, if known.
    pub email: Option<String>,
    /// Given name, if known.
    pub given_name: Option<String>,
    /// Family name, if known.
    pub family_name: Option<String>,
    /// Role, if known.
    pub role: Option<Role>,
}

impl OwnerDetail {
    /// Full detail from a validated token context.
    #[must_use]
    pub fn from_auth_context(ctx: &AuthContext) -> Self {
        Self {
            id: ctx.subject_id.clone(),
            username: Some(ctx.username.clone()),
            email: Some(ctx.email.clone()),
            given_name: Some(ctx.given_name.clone()),
            family_name: Some(ctx.family_name.clone()),
            role: ctx.role,
        }
    }

    /// Detail from an administrative lookup (no name attributes on the wire).
    #[must_use]
    pub fn from_user_record(record: &UserRecord) -> Self {
        Self {
            id: record.id.clone(),
            username: Some(record.username.clone()),
            email: Some(record.email.clone()),
            given_name: None,
            family_name: None,
            role: record.role,
        }
    }

    /// Degraded detail when the identity lookup failed or found nothing.
    #[must_use]
    pub const fn unknown(id: OwnerId) -> Self {
        Self {
            id,
            username: None,
            email: None,
            given_name: None,
            family_name: None,
            role: None,
        }
    }
}

/// One order line with best-effort item enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineView {
    /// Line identifier.
    pub id: LineId,
    /// Remote item id.
    pub item_id: ItemId,
    /// Quantity ordered.
    pub quantity: Quantity,
    /// Frozen net unit price.
    pub unit_price: Money,
    /// Derived subtotal.
    pub subtotal: Money,
    /// Current item snapshot; `None` when the catalog lookup degraded.
    pub item: Option<ItemSnapshot>,
}

impl LineView {
    /// Build a view of one line with an optional item snapshot.
    #[must_use]
    pub fn new(line: &OrderLine, item: Option<ItemSnapshot>) -> Self {
        Self {
            id: line.id().clone(),
            item_id: line.item_id().clone(),
            quantity: line.quantity(),
            unit_price: line.unit_price(),
            subtotal: line.subtotal(),
            item,
        }
    }
}

/// An order enriched with owner detail and per-line item snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderView {
    /// Order identifier.
    pub id: OrderId,
    /// Owner display detail (best-effort).
    pub owner: OwnerDetail,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Creation timestamp.
    pub created_at: Timestamp,
    /// Derived total.
    pub total: Money,
    /// Enriched lines, in creation order.
    pub lines: Vec<LineView>,
}

impl OrderView {
    /// Assemble a view from an order, its owner detail, and enriched lines.
    #[must_use]
    pub fn new(order: &Order, owner: OwnerDetail, lines: Vec<LineView>) -> Self {
        Self {
            id: order.id().clone(),
            owner,
            status: order.status(),
            created_at: order.created_at(),
            total: order.total(),
            lines,
        }
    }
}
