//! HTTP client for the identity RPC endpoint.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::IdentityConfig;
use super::error::IdentityRpcError;

/// Header carrying the RPC action name.
pub(crate) const ACTION_HEADER: &str = "X-Rpc-Action";

/// RPC client: one POST endpoint, action selected by header.
///
/// No retries are performed here; a failed call surfaces as an error and
/// retry policy belongs to the caller.
#[derive(Debug, Clone)]
pub struct IdentityRpcClient {
    client: Client,
    endpoint: String,
}

impl IdentityRpcClient {
    /// Create a new client from config.
    pub fn new(config: &IdentityConfig) -> Result<Self, IdentityRpcError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IdentityRpcError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Invoke one RPC action with a JSON body.
    pub async fn call<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        action: &str,
        body: &B,
    ) -> Result<T, IdentityRpcError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(ACTION_HEADER, action)
            .json(body)
            .send()
            .await
            .map_err(|e| IdentityRpcError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IdentityRpcError::Status {
                code: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| IdentityRpcError::Network(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| IdentityRpcError::Parse(e.to_string()))
    }
}
