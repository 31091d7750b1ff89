//! Order Store Trait
//!
//! Defines the persistence abstraction for orders.
//! Implemented by adapters in the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::Order;
use super::errors::OrderError;
use crate::domain::shared::{OrderId, OwnerId};

/// Store trait for Order persistence.
///
/// All writes are whole-aggregate: `save` replaces the complete line set of
/// an existing order (or inserts a new one), and `delete` cascades to the
/// owned lines.
///
/// # Finalize claim
///
/// Concurrent finalize attempts on one aggregate must not both observe
/// `PENDING`. The store serializes them with a claim protocol:
/// [`acquire_finalize`](OrderStore::acquire_finalize) atomically verifies the
/// order is pending and marks a finalize in flight, then exactly one of
/// [`commit_finalize`](OrderStore::commit_finalize) (success) or
/// [`release_finalize`](OrderStore::release_finalize) (failure) drops the
/// claim.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Save an order (whole-aggregate insert or replace).
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn save(&self, order: &Order) -> Result<(), OrderError>;

    /// Find an order by its id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// Find all orders belonging to an owner.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_owner(&self, owner_id: &OwnerId) -> Result<Vec<Order>, OrderError>;

    /// Find all orders.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_all(&self) -> Result<Vec<Order>, OrderError>;

    /// Delete an order and its lines, regardless of status.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order does not exist.
    async fn delete(&self, id: &OrderId) -> Result<(), OrderError>;

    /// Check if an order exists.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn exists(&self, id: &OrderId) -> Result<bool, OrderError>;

    /// Atomically load a pending order and claim it for finalization.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the order does not exist, `WrongState` if it is
    /// not pending, or `FinalizeInProgress` if another finalize holds the
    /// claim.
    async fn acquire_finalize(&self, id: &OrderId) -> Result<Order, OrderError>;

    /// Drop the finalize claim without changing the order (failure path).
    ///
    /// # Errors
    ///
    /// Returns error if the store fails; a missing claim is not an error.
    async fn release_finalize(&self, id: &OrderId) -> Result<(), OrderError>;

    /// Persist the finalized aggregate and drop the claim (success path).
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn commit_finalize(&self, order: &Order) -> Result<(), OrderError>;
}
