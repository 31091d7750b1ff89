//! Application Ports (Driven)
//!
//! Ports define interfaces for the two external systems of record this core
//! consumes. Adapters in the infrastructure layer implement them; retry
//! policy deliberately does NOT live here - a failed call surfaces as an
//! error and the caller decides.

mod identity_port;
mod inventory_port;

pub use identity_port::{AuthContext, IdentityError, IdentityPort, UserRecord};
pub use inventory_port::{InventoryError, InventoryPort, ItemSnapshot};
