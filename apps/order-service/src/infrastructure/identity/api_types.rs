//! Wire types for the identity RPC protocol.

use serde::{Deserialize, Serialize};

use crate::application::ports::{AuthContext, UserRecord};
use crate::domain::shared::{OwnerId, Role};

/// `ValidateToken` request body.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateTokenRequest {
    /// The raw token (bearer prefix already stripped).
    pub token: String,
}

/// `ValidateToken` response body.
///
/// On a rejected token the service sends `valid = false` and may omit every
/// other field, so they are all optional on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateTokenResponse {
    /// Whether the token was accepted.
    pub valid: bool,
    /// Subject identifier; present on valid responses.
    #[serde(default)]
    pub subject_id: Option<String>,
    /// Login name.
    #[serde(default)]
    pub username: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Given name.
    #[serde(default)]
    pub given_name: Option<String>,
    /// Family name.
    #[serde(default)]
    pub family_name: Option<String>,
    /// Role string (`ROLE_USER` / `ROLE_ADMIN`).
    #[serde(default)]
    pub role: Option<String>,
}

impl ValidateTokenResponse {
    /// Convert the wire response into an [`AuthContext`].
    ///
    /// # Errors
    ///
    /// Returns a description of the defect when a response claiming
    /// `valid = true` lacks a subject id.
    pub fn into_auth_context(self) -> Result<AuthContext, String> {
        if !self.valid {
            return Ok(AuthContext::invalid());
        }
        let subject_id = self
            .subject_id
            .ok_or_else(|| "valid response without subjectId".to_string())?;

        Ok(AuthContext {
            valid: true,
            subject_id: OwnerId::new(subject_id),
            username: self.username.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            given_name: self.given_name.unwrap_or_default(),
            family_name: self.family_name.unwrap_or_default(),
            role: self.role.as_deref().and_then(Role::parse),
        })
    }
}

/// `GetUserById` request body.
#[derive(Debug, Clone, Serialize)]
pub struct GetUserByIdRequest {
    /// The actor identifier to look up.
    pub id: String,
}

/// `GetUserById` response body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserByIdResponse {
    /// Whether the user exists.
    pub exists: bool,
    /// Actor identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// Login name.
    #[serde(default)]
    pub username: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Role string.
    #[serde(default)]
    pub role: Option<String>,
}

impl GetUserByIdResponse {
    /// Convert the wire response into a [`UserRecord`].
    ///
    /// Returns `None` when the user does not exist. Display attributes are
    /// lenient: absent fields default rather than failing, and a missing id
    /// falls back to the id that was asked for.
    #[must_use]
    pub fn into_user_record(self, requested: &OwnerId) -> Option<UserRecord> {
        if !self.exists {
            return None;
        }
        Some(UserRecord {
            id: self
                .id
                .map_or_else(|| requested.clone(), OwnerId::new),
            username: self.username.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            role: self.role.as_deref().and_then(Role::parse),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_token_response_valid() {
        let json = r#"{
            "valid": true,
            "subjectId": "42",
            "username": "ana",
            "email": "ana@example.com",
            "givenName": "Ana",
            "familyName": "Torres",
            "role": "ROLE_USER"
        }"#;
        let response: ValidateTokenResponse = serde_json::from_str(json).unwrap();
        let ctx = response.into_auth_context().unwrap();

        assert!(ctx.valid);
        assert_eq!(ctx.subject_id.as_str(), "42");
        assert_eq!(ctx.given_name, "Ana");
        assert_eq!(ctx.role, Some(Role::RoleUser));
    }

    #[test]
    fn validate_token_response_invalid_omits_fields() {
        let response: ValidateTokenResponse = serde_json::from_str(r#"{"valid": false}"#).unwrap();
        let ctx = response.into_auth_context().unwrap();
        assert!(!ctx.valid);
        assert!(ctx.role.is_none());
    }

    #[test]
    fn validate_token_response_valid_without_subject_is_defective() {
        let response: ValidateTokenResponse = serde_json::from_str(r#"{"valid": true}"#).unwrap();
        assert!(response.into_auth_context().is_err());
    }

    #[test]
    fn validate_token_response_unknown_role_parses_to_none() {
        let json = r#"{"valid": true, "subjectId": "42", "role": "ROLE_MANAGER"}"#;
        let response: ValidateTokenResponse = serde_json::from_str(json).unwrap();
        let ctx = response.into_auth_context().unwrap();
        assert!(ctx.role.is_none());
    }

    #[test]
    fn get_user_by_id_response_exists() {
        let json = r#"{
            "exists": true,
            "id": "42",
            "username": "ana",
            "email": "ana@example.com",
            "role": "ROLE_USER"
        }"#;
        let response: GetUserByIdResponse = serde_json::from_str(json).unwrap();
        let record = response.into_user_record(&OwnerId::new("42")).unwrap();
        assert_eq!(record.id.as_str(), "42");
        assert_eq!(record.username, "ana");
    }

    #[test]
    fn get_user_by_id_response_missing() {
        let response: GetUserByIdResponse =
            serde_json::from_str(r#"{"exists": false}"#).unwrap();
        assert!(response.into_user_record(&OwnerId::new("42")).is_none());
    }

    #[test]
    fn get_user_by_id_response_missing_id_falls_back() {
        let response: GetUserByIdResponse =
            serde_json::from_str(r#"{"exists": true, "username": "ana"}"#).unwrap();
        let record = response.into_user_record(&OwnerId::new("42")).unwrap();
        assert_eq!(record.id.as_str(), "42");
    }

    #[test]
    fn requests_serialize_plain() {
        let json = serde_json::to_string(&ValidateTokenRequest {
            token: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"token":"abc"}"#);

        let json = serde_json::to_string(&GetUserByIdRequest {
            id: "42".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"id":"42"}"#);
    }
}
