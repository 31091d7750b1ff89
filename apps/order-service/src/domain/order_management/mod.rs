//! Order Management Bounded Context
//!
//! Owns the order aggregate and its lifecycle: creation from validated
//! inventory snapshots, whole-line-set replacement, and the irreversible
//! finalize transition.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: The root entity; total is derived from its lines
//! - **Frozen Prices**: line unit prices are captured at creation time and
//!   never re-read from inventory
//! - **Finalize Claim**: store-level serialization of concurrent finalize
//!   attempts on one aggregate

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use aggregate::{CreateOrderCommand, LineDraft, Order, OrderLine};
pub use errors::OrderError;
pub use repository::OrderStore;
pub use services::{PricedLine, PricingPolicy};
pub use value_objects::OrderStatus;
