//! Inventory service adapter.
//!
//! Plain HTTP client for the catalog/stock service, hidden behind
//! [`crate::application::ports::InventoryPort`]. Stock deduction is
//! per-item atomic at the remote; the adapter performs no retries.

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::InventoryHttpAdapter;
pub use api_types::ItemResponse;
pub use config::InventoryConfig;
pub use error::InventoryHttpError;
pub use http_client::InventoryHttpClient;
