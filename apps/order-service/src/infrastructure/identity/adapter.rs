//! Identity RPC adapter implementing IdentityPort.

use async_trait::async_trait;

use crate::application::ports::{AuthContext, IdentityError, IdentityPort, UserRecord};
use crate::domain::shared::OwnerId;

use super::api_types::{
    GetUserByIdRequest, GetUserByIdResponse, ValidateTokenRequest, ValidateTokenResponse,
};
use super::client::IdentityRpcClient;
use super::config::IdentityConfig;
use super::error::IdentityRpcError;

/// Identity service adapter.
///
/// Implements `IdentityPort` over the RPC envelope transport.
#[derive(Debug, Clone)]
pub struct IdentityRpcAdapter {
    client: IdentityRpcClient,
}

impl IdentityRpcAdapter {
    /// Create a new identity adapter.
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityRpcError> {
        Ok(Self {
            client: IdentityRpcClient::new(&config)?,
        })
    }
}

#[async_trait]
impl IdentityPort for IdentityRpcAdapter {
    async fn validate_token(&self, token: &str) -> Result<AuthContext, IdentityError> {
        let response: ValidateTokenResponse = self
            .client
            .call(
                "ValidateToken",
                &ValidateTokenRequest {
                    token: token.to_string(),
                },
            )
            .await
            .map_err(IdentityError::from)?;

        tracing::debug!(valid = response.valid, "Token validation response received");

        response
            .into_auth_context()
            .map_err(|message| IdentityError::Malformed { message })
    }

    async fn lookup_user(&self, id: &OwnerId) -> Result<Option<UserRecord>, IdentityError> {
        let response: GetUserByIdResponse = self
            .client
            .call(
                "GetUserById",
                &GetUserByIdRequest {
                    id: id.as_str().to_string(),
                },
            )
            .await
            .map_err(IdentityError::from)?;

        Ok(response.into_user_record(id))
    }
}
