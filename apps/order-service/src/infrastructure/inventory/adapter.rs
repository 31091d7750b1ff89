//! Inventory HTTP adapter implementing InventoryPort.

use async_trait::async_trait;

use crate::application::ports::{InventoryError, InventoryPort, ItemSnapshot};
use crate::domain::shared::{ItemId, Quantity};

use super::api_types::ItemResponse;
use super::config::InventoryConfig;
use super::error::InventoryHttpError;
use super::http_client::InventoryHttpClient;

/// Inventory service adapter.
///
/// Implements `InventoryPort` against the catalog/stock HTTP API:
/// `GET /items/{id}`, `PUT /items/{id}/decrement-stock/{qty}`, and the
/// compensation inverse `PUT /items/{id}/restore-stock/{qty}`.
#[derive(Debug, Clone)]
pub struct InventoryHttpAdapter {
    client: InventoryHttpClient,
}

impl InventoryHttpAdapter {
    /// Create a new inventory adapter.
    pub fn new(config: InventoryConfig) -> Result<Self, InventoryHttpError> {
        Ok(Self {
            client: InventoryHttpClient::new(&config)?,
        })
    }

    fn map_stock_error(err: InventoryHttpError, item_id: &ItemId) -> InventoryError {
        match err {
            InventoryHttpError::Status { code: 404 } => InventoryError::NotFound {
                item_id: item_id.clone(),
            },
            // 409 and 422 both appear in the wild for "not enough stock".
            InventoryHttpError::Status { code: 409 | 422 } => InventoryError::InsufficientStock {
                item_id: item_id.clone(),
            },
            other => InventoryError::Unreachable {
                message: other.to_string(),
            },
        }
    }
}

#[async_trait]
impl InventoryPort for InventoryHttpAdapter {
    async fn get_item(&self, item_id: &ItemId) -> Result<ItemSnapshot, InventoryError> {
        let result: Result<ItemResponse, InventoryHttpError> = self
            .client
            .get(&format!("/items/{}", item_id.as_str()))
            .await;

        match result {
            Ok(response) => Ok(response.into_snapshot()),
            Err(InventoryHttpError::Status { code: 404 }) => Err(InventoryError::NotFound {
                item_id: item_id.clone(),
            }),
            Err(e) => Err(InventoryError::Unreachable {
                message: e.to_string(),
            }),
        }
    }

    async fn decrement_stock(
        &self,
        item_id: &ItemId,
        quantity: Quantity,
    ) -> Result<(), InventoryError> {
        tracing::info!(item_id = %item_id, quantity = %quantity, "Deducting stock");

        self.client
            .put_unit(&format!(
                "/items/{}/decrement-stock/{}",
                item_id.as_str(),
                quantity.amount()
            ))
            .await
            .map_err(|e| Self::map_stock_error(e, item_id))
    }

    async fn restore_stock(
        &self,
        item_id: &ItemId,
        quantity: Quantity,
    ) -> Result<(), InventoryError> {
        tracing::info!(item_id = %item_id, quantity = %quantity, "Restoring stock");

        self.client
            .put_unit(&format!(
                "/items/{}/restore-stock/{}",
                item_id.as_str(),
                quantity.amount()
            ))
            .await
            .map_err(|e| Self::map_stock_error(e, item_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Money;
    use rust_decimal_macros::dec;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter_for(server: &MockServer) -> InventoryHttpAdapter {
        InventoryHttpAdapter::new(InventoryConfig::new(server.uri())).unwrap()
    }

    fn item_body() -> serde_json::Value {
        serde_json::json!({
            "id": "item-1",
            "title": "A Wizard of Earthsea",
            "synopsis": "A young mage",
            "author": "Ursula K. Le Guin",
            "category": "Fantasy",
            "publishDate": "1968-11-01",
            "price": 10.00,
            "discountPercent": 0,
            "stock": 7,
            "active": true
        })
    }

    #[tokio::test]
    async fn get_item_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/item-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(item_body()))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let snapshot = adapter.get_item(&ItemId::new("item-1")).await.unwrap();

        assert_eq!(snapshot.id.as_str(), "item-1");
        assert_eq!(snapshot.unit_price, Money::new(dec!(10.00)));
        assert_eq!(snapshot.stock, 7);
    }

    #[tokio::test]
    async fn get_item_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/item-404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let err = adapter.get_item(&ItemId::new("item-404")).await.unwrap_err();
        assert!(matches!(err, InventoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn get_item_server_error_is_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/item-1"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let err = adapter.get_item(&ItemId::new("item-1")).await.unwrap_err();
        assert!(matches!(err, InventoryError::Unreachable { .. }));
    }

    #[tokio::test]
    async fn get_item_garbage_body_is_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/item-1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let err = adapter.get_item(&ItemId::new("item-1")).await.unwrap_err();
        assert!(matches!(err, InventoryError::Unreachable { .. }));
    }

    #[tokio::test]
    async fn decrement_stock_success_on_204() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/items/item-1/decrement-stock/2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        adapter
            .decrement_stock(&ItemId::new("item-1"), Quantity::new(2))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn decrement_stock_conflict_is_insufficient() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/items/item-1/decrement-stock/5"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let err = adapter
            .decrement_stock(&ItemId::new("item-1"), Quantity::new(5))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::InsufficientStock { .. }));
    }

    #[tokio::test]
    async fn decrement_stock_missing_item() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/items/item-404/decrement-stock/1"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let err = adapter
            .decrement_stock(&ItemId::new("item-404"), Quantity::new(1))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn restore_stock_success() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/items/item-1/restore-stock/2"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        adapter
            .restore_stock(&ItemId::new("item-1"), Quantity::new(2))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn restore_stock_failure_is_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/items/item-1/restore-stock/2"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let adapter = adapter_for(&server);
        let err = adapter
            .restore_stock(&ItemId::new("item-1"), Quantity::new(2))
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::Unreachable { .. }));
    }
}
