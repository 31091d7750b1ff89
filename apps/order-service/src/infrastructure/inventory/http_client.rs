//! HTTP client wrapper for the inventory service.

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::config::InventoryConfig;
use super::error::InventoryHttpError;

/// HTTP client for the inventory API.
///
/// Thin transport layer: success bodies are decoded, non-success statuses
/// surface as [`InventoryHttpError::Status`] for the adapter to map. No
/// retries are performed.
#[derive(Debug, Clone)]
pub struct InventoryHttpClient {
    client: Client,
    base_url: String,
}

impl InventoryHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &InventoryConfig) -> Result<Self, InventoryHttpError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InventoryHttpError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Make a GET request and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, InventoryHttpError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| InventoryHttpError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InventoryHttpError::Status {
                code: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| InventoryHttpError::Network(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| InventoryHttpError::Parse(e.to_string()))
    }

    /// Make a PUT request expecting an empty success body (200/204).
    pub async fn put_unit(&self, path: &str) -> Result<(), InventoryHttpError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .client
            .put(&url)
            .send()
            .await
            .map_err(|e| InventoryHttpError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InventoryHttpError::Status {
                code: status.as_u16(),
            });
        }
        Ok(())
    }
}
