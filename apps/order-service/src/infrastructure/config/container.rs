//! Dependency Injection Container
//!
//! Explicit wiring of the two gateways and the store into the orchestrator.
//! No process-wide singletons: callers construct a container with concrete
//! implementations and hand out orchestrators from it.

use std::sync::Arc;

use crate::application::ports::{IdentityPort, InventoryPort};
use crate::application::services::OrderOrchestrator;
use crate::domain::order_management::OrderStore;

/// Dependency injection container.
pub struct Container<I, V, S>
where
    I: IdentityPort + 'static,
    V: InventoryPort + 'static,
    S: OrderStore + 'static,
{
    identity: Arc<I>,
    inventory: Arc<V>,
    store: Arc<S>,
}

impl<I, V, S> Container<I, V, S>
where
    I: IdentityPort + 'static,
    V: InventoryPort + 'static,
    S: OrderStore + 'static,
{
    /// Create a new container with all dependencies.
    pub const fn new(identity: Arc<I>, inventory: Arc<V>, store: Arc<S>) -> Self {
        Self {
            identity,
            inventory,
            store,
        }
    }

    /// Get the identity gateway.
    pub fn identity(&self) -> Arc<I> {
        Arc::clone(&self.identity)
    }

    /// Get the inventory gateway.
    pub fn inventory(&self) -> Arc<V> {
        Arc::clone(&self.inventory)
    }

    /// Get the order store.
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Create an `OrderOrchestrator` wired to this container's dependencies.
    pub fn orchestrator(&self) -> OrderOrchestrator<I, V, S> {
        OrderOrchestrator::new(
            Arc::clone(&self.identity),
            Arc::clone(&self.inventory),
            Arc::clone(&self.store),
        )
    }
}
