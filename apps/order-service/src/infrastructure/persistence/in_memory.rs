//! In-memory order store.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;

use crate::domain::order_management::{Order, OrderError, OrderStore};
use crate::domain::shared::{OrderId, OwnerId};

/// In-memory implementation of `OrderStore`.
///
/// Suitable for testing and development. Writes are whole-aggregate; the
/// finalize claim is a set of order ids guarded by its own lock, so two
/// concurrent finalize attempts on one order cannot both observe `PENDING`.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<String, Order>>,
    finalizing: Mutex<HashSet<String>>,
}

impl InMemoryOrderStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
            finalizing: Mutex::new(HashSet::new()),
        }
    }

    /// Get the number of stored orders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.read().unwrap().len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.read().unwrap().is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn save(&self, order: &Order) -> Result<(), OrderError> {
        let mut orders = self.orders.write().unwrap();
        orders.insert(order.id().as_str().to_string(), order.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        let orders = self.orders.read().unwrap();
        Ok(orders.get(id.as_str()).cloned())
    }

    async fn find_by_owner(&self, owner_id: &OwnerId) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().unwrap();
        Ok(orders
            .values()
            .filter(|o| o.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.orders.read().unwrap();
        Ok(orders.values().cloned().collect())
    }

    async fn delete(&self, id: &OrderId) -> Result<(), OrderError> {
        // Lock order: claim set before orders, same as acquire_finalize.
        let mut finalizing = self.finalizing.lock().unwrap();
        let mut orders = self.orders.write().unwrap();
        orders
            .remove(id.as_str())
            .ok_or_else(|| OrderError::NotFound {
                order_id: id.as_str().to_string(),
            })?;
        // A dangling claim must not survive the aggregate.
        finalizing.remove(id.as_str());
        Ok(())
    }

    async fn exists(&self, id: &OrderId) -> Result<bool, OrderError> {
        let orders = self.orders.read().unwrap();
        Ok(orders.contains_key(id.as_str()))
    }

    async fn acquire_finalize(&self, id: &OrderId) -> Result<Order, OrderError> {
        // The claim lock is held across the status check so concurrent
        // acquire calls serialize here.
        let mut finalizing = self.finalizing.lock().unwrap();
        if finalizing.contains(id.as_str()) {
            return Err(OrderError::FinalizeInProgress {
                order_id: id.as_str().to_string(),
            });
        }

        let orders = self.orders.read().unwrap();
        let order = orders.get(id.as_str()).ok_or_else(|| OrderError::NotFound {
            order_id: id.as_str().to_string(),
        })?;
        if !order.status().can_finalize() {
            return Err(OrderError::WrongState {
                order_id: id.as_str().to_string(),
                status: order.status(),
            });
        }

        finalizing.insert(id.as_str().to_string());
        Ok(order.clone())
    }

    async fn release_finalize(&self, id: &OrderId) -> Result<(), OrderError> {
        self.finalizing.lock().unwrap().remove(id.as_str());
        Ok(())
    }

    async fn commit_finalize(&self, order: &Order) -> Result<(), OrderError> {
        // Lock order: claim set before orders, same as acquire_finalize.
        let mut finalizing = self.finalizing.lock().unwrap();
        let mut orders = self.orders.write().unwrap();
        orders.insert(order.id().as_str().to_string(), order.clone());
        finalizing.remove(order.id().as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order_management::{CreateOrderCommand, LineDraft, OrderStatus};
    use crate::domain::shared::{ItemId, Money, Quantity};
    use rust_decimal_macros::dec;

    fn make_order(owner: &str) -> Order {
        Order::new(CreateOrderCommand {
            owner_id: OwnerId::new(owner),
            lines: vec![
                LineDraft {
                    item_id: ItemId::new("item-1"),
                    quantity: Quantity::new(2),
                    unit_price: Money::new(dec!(10.00)),
                },
                LineDraft {
                    item_id: ItemId::new("item-2"),
                    quantity: Quantity::new(1),
                    unit_price: Money::new(dec!(4.00)),
                },
            ],
        })
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_reload_roundtrip() {
        let store = InMemoryOrderStore::new();
        let order = make_order("42");

        store.save(&order).await.unwrap();

        let reloaded = store.find_by_id(order.id()).await.unwrap().unwrap();
        assert_eq!(reloaded.lines(), order.lines());
        assert_eq!(reloaded.total(), order.total());
        assert_eq!(reloaded.status(), order.status());
    }

    #[tokio::test]
    async fn save_replaces_whole_aggregate() {
        let store = InMemoryOrderStore::new();
        let mut order = make_order("42");
        store.save(&order).await.unwrap();

        order
            .replace_lines(vec![LineDraft {
                item_id: ItemId::new("item-3"),
                quantity: Quantity::new(1),
                unit_price: Money::new(dec!(1.00)),
            }])
            .unwrap();
        store.save(&order).await.unwrap();

        let reloaded = store.find_by_id(order.id()).await.unwrap().unwrap();
        assert_eq!(reloaded.lines().len(), 1);
        assert_eq!(reloaded.total(), Money::new(dec!(1.00)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn find_by_owner_filters() {
        let store = InMemoryOrderStore::new();
        store.save(&make_order("42")).await.unwrap();
        store.save(&make_order("42")).await.unwrap();
        store.save(&make_order("77")).await.unwrap();

        let owned = store.find_by_owner(&OwnerId::new("42")).await.unwrap();
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|o| o.owner_id().as_str() == "42"));

        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn delete_removes_aggregate() {
        let store = InMemoryOrderStore::new();
        let order = make_order("42");
        store.save(&order).await.unwrap();
        assert!(store.exists(order.id()).await.unwrap());

        store.delete(order.id()).await.unwrap();
        assert!(!store.exists(order.id()).await.unwrap());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn delete_not_found() {
        let store = InMemoryOrderStore::new();
        let result = store.delete(&OrderId::new("nonexistent")).await;
        assert!(matches!(result, Err(OrderError::NotFound { .. })));
    }

    #[tokio::test]
    async fn acquire_finalize_claims_pending_order() {
        let store = InMemoryOrderStore::new();
        let order = make_order("42");
        store.save(&order).await.unwrap();

        let claimed = store.acquire_finalize(order.id()).await.unwrap();
        assert_eq!(claimed.status(), OrderStatus::Pending);

        // A concurrent attempt cannot also observe PENDING.
        let second = store.acquire_finalize(order.id()).await;
        assert!(matches!(second, Err(OrderError::FinalizeInProgress { .. })));
    }

    #[tokio::test]
    async fn acquire_finalize_not_found() {
        let store = InMemoryOrderStore::new();
        let result = store.acquire_finalize(&OrderId::new("nonexistent")).await;
        assert!(matches!(result, Err(OrderError::NotFound { .. })));
    }

    #[tokio::test]
    async fn release_allows_reacquire() {
        let store = InMemoryOrderStore::new();
        let order = make_order("42");
        store.save(&order).await.unwrap();

        store.acquire_finalize(order.id()).await.unwrap();
        store.release_finalize(order.id()).await.unwrap();

        assert!(store.acquire_finalize(order.id()).await.is_ok());
    }

    #[tokio::test]
    async fn commit_finalize_persists_and_frees_claim() {
        let store = InMemoryOrderStore::new();
        let order = make_order("42");
        store.save(&order).await.unwrap();

        let mut claimed = store.acquire_finalize(order.id()).await.unwrap();
        claimed.finalize().unwrap();
        store.commit_finalize(&claimed).await.unwrap();

        let reloaded = store.find_by_id(order.id()).await.unwrap().unwrap();
        assert_eq!(reloaded.status(), OrderStatus::Finalized);

        // The claim is gone; a further acquire now fails on status.
        let result = store.acquire_finalize(order.id()).await;
        assert!(matches!(result, Err(OrderError::WrongState { .. })));
    }

    #[tokio::test]
    async fn delete_drops_dangling_claim() {
        let store = InMemoryOrderStore::new();
        let order = make_order("42");
        store.save(&order).await.unwrap();

        store.acquire_finalize(order.id()).await.unwrap();
        store.delete(order.id()).await.unwrap();

        // Re-inserting the same order id must not inherit the old claim.
        store.save(&order).await.unwrap();
        assert!(store.acquire_finalize(order.id()).await.is_ok());
    }
}
