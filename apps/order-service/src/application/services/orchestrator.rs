//! Order Orchestrator
//!
//! The core of the crate: authorization-gated order creation, listing,
//! replacement, deletion, and the finalize-with-stock-deduction transition.
//! Every public operation is a sequential pipeline: authorize against the
//! identity service, validate against remote inventory state, then mutate
//! the local store. The orchestrator holds no mutable state of its own.

use std::sync::Arc;

use crate::application::dto::{
    AdminOrderRequest, LineRequest, LineView, OrderView, OwnerDetail, SubmitOrderRequest,
};
use crate::application::ports::{
    AuthContext, IdentityPort, InventoryError, InventoryPort, ItemSnapshot,
};
use crate::application::services::errors::{AuthorizationError, LineError, ServiceError};
use crate::domain::order_management::{
    CreateOrderCommand, LineDraft, Order, OrderStore, PricingPolicy,
};
use crate::domain::shared::{ItemId, OrderId, OwnerId, Quantity, Role};

/// Bearer scheme prefix expected on the credential header.
const BEARER_PREFIX: &str = "Bearer ";

/// The order orchestration core.
///
/// Generic over the two gateways and the store so that transports and
/// persistence are swappable without touching orchestration logic. All
/// collaborators are injected; there are no process-wide singletons.
pub struct OrderOrchestrator<I, V, S>
where
    I: IdentityPort,
    V: InventoryPort,
    S: OrderStore,
{
    identity: Arc<I>,
    inventory: Arc<V>,
    store: Arc<S>,
}

impl<I, V, S> OrderOrchestrator<I, V, S>
where
    I: IdentityPort,
    V: InventoryPort,
    S: OrderStore,
{
    /// Create a new orchestrator over the given collaborators.
    pub const fn new(identity: Arc<I>, inventory: Arc<V>, store: Arc<S>) -> Self {
        Self {
            identity,
            inventory,
            store,
        }
    }

    // ========================================================================
    // Authorization
    // ========================================================================

    /// Shared precondition for every authenticated operation.
    ///
    /// Checks the bearer scheme, validates the token against the identity
    /// service, and verifies the granted role.
    ///
    /// # Errors
    ///
    /// - `MissingToken`: header absent or not bearer-formed
    /// - `IdentityUnavailable`: the identity call failed
    /// - `InvalidToken`: well-formed response with `valid = false`
    /// - `Forbidden`: role mismatch (or no recognizable role)
    pub async fn authorize(
        &self,
        token_header: Option<&str>,
        required: Role,
    ) -> Result<AuthContext, AuthorizationError> {
        let header = token_header.ok_or(AuthorizationError::MissingToken)?;
        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(AuthorizationError::MissingToken)?;

        let context = self.identity.validate_token(token).await.map_err(|e| {
            AuthorizationError::IdentityUnavailable {
                message: e.to_string(),
            }
        })?;

        if !context.valid {
            return Err(AuthorizationError::InvalidToken);
        }
        if context.role != Some(required) {
            return Err(AuthorizationError::Forbidden { required });
        }

        Ok(context)
    }

    // ========================================================================
    // Self-service operations (ROLE_USER)
    // ========================================================================

    /// Submit a new order for the authenticated user.
    ///
    /// Validates every requested line against the current inventory state,
    /// accumulating all failures into one batch error. Only if every line
    /// validates is the order priced from the captured snapshots, persisted
    /// as `PENDING`, and returned with the owner detail already carried by
    /// the token context.
    pub async fn submit_order(
        &self,
        token_header: Option<&str>,
        request: SubmitOrderRequest,
    ) -> Result<OrderView, ServiceError> {
        let context = self.authorize(token_header, Role::RoleUser).await?;

        let validated = self.validate_lines(&request.lines).await?;
        let (drafts, snapshots) = price_drafts(validated);

        let order = Order::new(CreateOrderCommand {
            owner_id: context.subject_id.clone(),
            lines: drafts,
        })
        .map_err(ServiceError::from_order_error)?;

        self.store
            .save(&order)
            .await
            .map_err(ServiceError::from_order_error)?;

        tracing::info!(
            order_id = %order.id(),
            owner_id = %context.subject_id,
            total = %order.total(),
            lines = order.lines().len(),
            "Order submitted"
        );

        let lines = order
            .lines()
            .iter()
            .zip(snapshots)
            .map(|(line, snapshot)| LineView::new(line, Some(snapshot)))
            .collect();

        Ok(OrderView::new(
            &order,
            OwnerDetail::from_auth_context(&context),
            lines,
        ))
    }

    /// List the authenticated user's own orders.
    ///
    /// Each line is re-enriched with the current item snapshot for display;
    /// a failed snapshot lookup degrades that single line to `None` rather
    /// than failing the whole list.
    pub async fn list_owned_orders(
        &self,
        token_header: Option<&str>,
    ) -> Result<Vec<OrderView>, ServiceError> {
        let context = self.authorize(token_header, Role::RoleUser).await?;

        let orders = self
            .store
            .find_by_owner(&context.subject_id)
            .await
            .map_err(ServiceError::from_order_error)?;

        let owner = OwnerDetail::from_auth_context(&context);
        let mut views = Vec::with_capacity(orders.len());
        for order in &orders {
            let lines = self.enrich_lines(order).await;
            views.push(OrderView::new(order, owner.clone(), lines));
        }
        Ok(views)
    }

    // ========================================================================
    // Administrative operations (ROLE_ADMIN)
    // ========================================================================

    /// List every order with owner and item enrichment.
    ///
    /// Owner lookup failures degrade that order's owner detail to "unknown"
    /// but never drop the order from the result.
    pub async fn list_all_orders(
        &self,
        token_header: Option<&str>,
    ) -> Result<Vec<OrderView>, ServiceError> {
        self.authorize(token_header, Role::RoleAdmin).await?;

        let orders = self
            .store
            .find_all()
            .await
            .map_err(ServiceError::from_order_error)?;

        let mut views = Vec::with_capacity(orders.len());
        for order in &orders {
            let owner = self.owner_detail(order.owner_id()).await;
            let lines = self.enrich_lines(order).await;
            views.push(OrderView::new(order, owner, lines));
        }
        Ok(views)
    }

    /// Load one order with full enrichment.
    pub async fn get_order(
        &self,
        token_header: Option<&str>,
        order_id: &OrderId,
    ) -> Result<OrderView, ServiceError> {
        self.authorize(token_header, Role::RoleAdmin).await?;

        let order = self.load_order(order_id).await?;
        let owner = self.owner_detail(order.owner_id()).await;
        let lines = self.enrich_lines(&order).await;
        Ok(OrderView::new(&order, owner, lines))
    }

    /// Create an order on behalf of an owner.
    ///
    /// The owner must exist in the identity system. Line validation and
    /// pricing are identical to [`submit_order`](Self::submit_order).
    pub async fn create_order(
        &self,
        token_header: Option<&str>,
        request: AdminOrderRequest,
    ) -> Result<OrderView, ServiceError> {
        self.authorize(token_header, Role::RoleAdmin).await?;

        let record = self
            .identity
            .lookup_user(&request.owner_id)
            .await
            .map_err(|e| ServiceError::IdentityUnavailable {
                message: e.to_string(),
            })?
            .ok_or_else(|| ServiceError::UnknownOwner {
                owner_id: request.owner_id.clone(),
            })?;

        let validated = self.validate_lines(&request.lines).await?;
        let (drafts, snapshots) = price_drafts(validated);

        let order = Order::new(CreateOrderCommand {
            owner_id: request.owner_id.clone(),
            lines: drafts,
        })
        .map_err(ServiceError::from_order_error)?;

        self.store
            .save(&order)
            .await
            .map_err(ServiceError::from_order_error)?;

        tracing::info!(
            order_id = %order.id(),
            owner_id = %request.owner_id,
            total = %order.total(),
            "Order created for owner"
        );

        let lines = order
            .lines()
            .iter()
            .zip(snapshots)
            .map(|(line, snapshot)| LineView::new(line, Some(snapshot)))
            .collect();

        Ok(OrderView::new(
            &order,
            OwnerDetail::from_user_record(&record),
            lines,
        ))
    }

    /// Replace an order's entire line set.
    ///
    /// Batch validation is identical to submission; the stored aggregate is
    /// only touched after every line validates. Fails on a finalized order.
    pub async fn update_order(
        &self,
        token_header: Option<&str>,
        order_id: &OrderId,
        request: SubmitOrderRequest,
    ) -> Result<OrderView, ServiceError> {
        self.authorize(token_header, Role::RoleAdmin).await?;

        let mut order = self.load_order(order_id).await?;
        if !order.status().is_mutable() {
            return Err(ServiceError::WrongState {
                order_id: order_id.clone(),
                status: order.status(),
            });
        }

        let validated = self.validate_lines(&request.lines).await?;
        let (drafts, snapshots) = price_drafts(validated);

        order
            .replace_lines(drafts)
            .map_err(ServiceError::from_order_error)?;

        self.store
            .save(&order)
            .await
            .map_err(ServiceError::from_order_error)?;

        tracing::info!(
            order_id = %order.id(),
            total = %order.total(),
            lines = order.lines().len(),
            "Order lines replaced"
        );

        let owner = self.owner_detail(order.owner_id()).await;
        let lines = order
            .lines()
            .iter()
            .zip(snapshots)
            .map(|(line, snapshot)| LineView::new(line, Some(snapshot)))
            .collect();

        Ok(OrderView::new(&order, owner, lines))
    }

    /// Delete an order unconditionally, regardless of status.
    pub async fn delete_order(
        &self,
        token_header: Option<&str>,
        order_id: &OrderId,
    ) -> Result<(), ServiceError> {
        self.authorize(token_header, Role::RoleAdmin).await?;

        self.store
            .delete(order_id)
            .await
            .map_err(ServiceError::from_order_error)?;

        tracing::info!(order_id = %order_id, "Order deleted");
        Ok(())
    }

    /// Finalize a pending order: deduct stock for every line, then commit
    /// the `FINALIZED` status.
    ///
    /// Stock deductions are issued sequentially, in line order, never
    /// concurrently. On a mid-sequence failure the already-deducted lines
    /// are compensated best-effort (reverse-order restore), the claim is
    /// released, and the order remains `PENDING`; the error names the
    /// failing item and the compensation outcome.
    pub async fn finalize_order(
        &self,
        token_header: Option<&str>,
        order_id: &OrderId,
    ) -> Result<OrderView, ServiceError> {
        self.authorize(token_header, Role::RoleAdmin).await?;

        let mut order = self
            .store
            .acquire_finalize(order_id)
            .await
            .map_err(ServiceError::from_order_error)?;

        let mut completed: Vec<(ItemId, Quantity)> = Vec::new();
        for line in order.lines() {
            match self
                .inventory
                .decrement_stock(line.item_id(), line.quantity())
                .await
            {
                Ok(()) => completed.push((line.item_id().clone(), line.quantity())),
                Err(e) => {
                    tracing::error!(
                        order_id = %order.id(),
                        item_id = %line.item_id(),
                        error = %e,
                        "Stock deduction failed; compensating prior lines"
                    );
                    let (compensated, unrecovered) = self.compensate(&completed).await;
                    self.abandon_finalize(order_id).await;
                    return Err(ServiceError::StockUpdate {
                        item_id: line.item_id().clone(),
                        compensated,
                        unrecovered,
                    });
                }
            }
        }

        if let Err(e) = order.finalize() {
            self.abandon_finalize(order_id).await;
            return Err(ServiceError::from_order_error(e));
        }
        self.store
            .commit_finalize(&order)
            .await
            .map_err(ServiceError::from_order_error)?;

        tracing::info!(order_id = %order.id(), total = %order.total(), "Order finalized");

        let owner = self.owner_detail(order.owner_id()).await;
        let lines = self.enrich_lines(&order).await;
        Ok(OrderView::new(&order, owner, lines))
    }

    // ========================================================================
    // Private Helpers
    // ========================================================================

    async fn load_order(&self, order_id: &OrderId) -> Result<Order, ServiceError> {
        self.store
            .find_by_id(order_id)
            .await
            .map_err(ServiceError::from_order_error)?
            .ok_or_else(|| ServiceError::NotFound {
                order_id: order_id.clone(),
            })
    }

    /// Validate every requested line against current inventory state.
    ///
    /// Does not fail fast: every line's problem is accumulated so the caller
    /// sees them all in one response. On success returns the snapshot and
    /// quantity per line, in request order.
    async fn validate_lines(
        &self,
        lines: &[LineRequest],
    ) -> Result<Vec<(ItemSnapshot, Quantity)>, ServiceError> {
        let mut errors = Vec::new();
        let mut validated = Vec::with_capacity(lines.len());

        for request in lines {
            let quantity = Quantity::new(request.quantity);
            if quantity.validate_for_line().is_err() {
                errors.push(LineError::InvalidQuantity {
                    item_id: request.item_id.clone(),
                });
                continue;
            }

            match self.inventory.get_item(&request.item_id).await {
                Ok(item) if !item.active => {
                    errors.push(LineError::Inactive {
                        item_id: request.item_id.clone(),
                    });
                }
                Ok(item) if quantity.amount() > item.stock => {
                    errors.push(LineError::InsufficientStock {
                        item_id: request.item_id.clone(),
                        requested: quantity.amount(),
                        available: item.stock,
                    });
                }
                Ok(item) => validated.push((item, quantity)),
                Err(InventoryError::NotFound { .. }) => {
                    errors.push(LineError::NotFound {
                        item_id: request.item_id.clone(),
                    });
                }
                Err(e) => {
                    errors.push(LineError::RemoteUnavailable {
                        item_id: request.item_id.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        if errors.is_empty() {
            Ok(validated)
        } else {
            Err(ServiceError::Validation { errors })
        }
    }

    /// Best-effort reverse-order restoration of already-deducted lines.
    ///
    /// Returns the items restored and the items whose restoration failed
    /// (remote stock stays inconsistent for the latter).
    async fn compensate(&self, completed: &[(ItemId, Quantity)]) -> (Vec<ItemId>, Vec<ItemId>) {
        let mut compensated = Vec::new();
        let mut unrecovered = Vec::new();
        for (item_id, quantity) in completed.iter().rev() {
            match self.inventory.restore_stock(item_id, *quantity).await {
                Ok(()) => compensated.push(item_id.clone()),
                Err(e) => {
                    tracing::error!(
                        item_id = %item_id,
                        quantity = %quantity,
                        error = %e,
                        "Stock compensation failed; remote stock is inconsistent"
                    );
                    unrecovered.push(item_id.clone());
                }
            }
        }
        (compensated, unrecovered)
    }

    async fn abandon_finalize(&self, order_id: &OrderId) {
        if let Err(e) = self.store.release_finalize(order_id).await {
            tracing::error!(order_id = %order_id, error = %e, "Failed to release finalize claim");
        }
    }

    /// Re-resolve every line's current item snapshot for display.
    async fn enrich_lines(&self, order: &Order) -> Vec<LineView> {
        let mut lines = Vec::with_capacity(order.lines().len());
        for line in order.lines() {
            let item = match self.inventory.get_item(line.item_id()).await {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::debug!(
                        item_id = %line.item_id(),
                        error = %e,
                        "Item enrichment degraded"
                    );
                    None
                }
            };
            lines.push(LineView::new(line, item));
        }
        lines
    }

    /// Resolve owner display detail, degrading to "unknown" on any failure.
    async fn owner_detail(&self, owner_id: &OwnerId) -> OwnerDetail {
        match self.identity.lookup_user(owner_id).await {
            Ok(Some(record)) => OwnerDetail::from_user_record(&record),
            Ok(None) => OwnerDetail::unknown(owner_id.clone()),
            Err(e) => {
                tracing::warn!(
                    owner_id = %owner_id,
                    error = %e,
                    "Owner enrichment degraded"
                );
                OwnerDetail::unknown(owner_id.clone())
            }
        }
    }
}

/// Price validated lines from their snapshots, preserving request order.
fn price_drafts(validated: Vec<(ItemSnapshot, Quantity)>) -> (Vec<LineDraft>, Vec<ItemSnapshot>) {
    validated
        .into_iter()
        .map(|(item, quantity)| {
            let priced = PricingPolicy::price_line(item.unit_price, item.discount_percent, quantity);
            (
                LineDraft {
                    item_id: item.id.clone(),
                    quantity,
                    unit_price: priced.net_unit_price,
                },
                item,
            )
        })
        .unzip()
}
