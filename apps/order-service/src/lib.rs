// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Service - Orchestration Core Library
//!
//! The order-management core for the Storefront system. It sits between two
//! external systems of record: the identity service (request/response RPC)
//! and the inventory service (HTTP), and owns the order aggregate locally.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (aggregates, value objects, store trait)
//!   - `order_management`: Order aggregate, status lifecycle, pricing policy
//!   - `shared`: Money, Quantity, Timestamp, Role, typed identifiers
//!
//! - **Application**: Orchestration and port definitions
//!   - `ports`: Interfaces for external systems (`IdentityPort`, `InventoryPort`)
//!   - `services`: `OrderOrchestrator` - the authorization-gated order protocol
//!   - `dto`: Enriched views returned across the API boundary
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `identity`: RPC-envelope client for the identity service
//!   - `inventory`: HTTP client for the catalog/stock service
//!   - `persistence`: Order store (in-memory)
//!   - `config`: Settings and the dependency injection container
//!
//! The inbound transport (HTTP routing, request validation) is deliberately
//! not part of this crate; the orchestrator's methods and error taxonomy are
//! the contract a transport layer maps onto status codes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Orchestrator and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Observability - tracing subscriber setup.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::order_management::{
    Order, OrderError, OrderLine, OrderStatus, OrderStore, PricingPolicy,
};
pub use domain::shared::{ItemId, LineId, Money, OrderId, OwnerId, Quantity, Role, Timestamp};

// Application re-exports
pub use application::dto::{
    AdminOrderRequest, LineRequest, LineView, OrderView, OwnerDetail, SubmitOrderRequest,
};
pub use application::ports::{
    AuthContext, IdentityError, IdentityPort, InventoryError, InventoryPort, ItemSnapshot,
    UserRecord,
};
pub use application::services::{
    AuthorizationError, LineError, OrderOrchestrator, ServiceError,
};

// Infrastructure re-exports
pub use infrastructure::config::{Container, Settings, SettingsError};
pub use infrastructure::identity::{IdentityConfig, IdentityRpcAdapter, IdentityRpcError};
pub use infrastructure::inventory::{InventoryConfig, InventoryHttpAdapter, InventoryHttpError};
pub use infrastructure::persistence::InMemoryOrderStore;
