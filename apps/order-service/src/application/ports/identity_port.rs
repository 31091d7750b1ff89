//! Identity Port (Driven Port)
//!
//! Interface for the remote identity/authentication service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{OwnerId, Role};

/// Authentication context produced by token validation.
///
/// A syntactically valid identity response with `valid = false` is a normal
/// result, not an error; callers must check the flag. The user attributes
/// ride along so that a successful authorization needs no second identity
/// round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Whether the token was accepted by the identity service.
    pub valid: bool,
    /// Subject (actor) identifier.
    pub subject_id: OwnerId,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Given name.
    pub given_name: String,
    /// Family name.
    pub family_name: String,
    /// Granted role, if the wire role string was recognized.
    pub role: Option<Role>,
}

impl AuthContext {
    /// Context for a rejected token. Attribute fields are empty.
    #[must_use]
    pub fn invalid() -> Self {
        Self {
            valid: false,
            subject_id: OwnerId::new(""),
            username: String::new(),
            email: String::new(),
            given_name: String::new(),
            family_name: String::new(),
            role: None,
        }
    }
}

/// User record returned by an administrative lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Actor identifier.
    pub id: OwnerId,
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Granted role, if recognized.
    pub role: Option<Role>,
}

/// Identity port error.
///
/// `NotFound` is deliberately absent: a missing user is modeled as
/// `Ok(None)` from [`IdentityPort::lookup_user`], and an invalid token as
/// `valid = false` on the context.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityError {
    /// Transport failure reaching the identity service (includes timeouts).
    #[error("Identity service unreachable: {message}")]
    Unreachable {
        /// Error details.
        message: String,
    },

    /// The identity service answered with an unparseable response.
    #[error("Malformed identity response: {message}")]
    Malformed {
        /// Error details.
        message: String,
    },
}

/// Port for identity service interactions.
///
/// No retries are performed behind this port; retry policy, if any, belongs
/// to the caller.
#[async_trait]
pub trait IdentityPort: Send + Sync {
    /// Validate a bearer token and return the authentication context.
    async fn validate_token(&self, token: &str) -> Result<AuthContext, IdentityError>;

    /// Look up a user by id. Returns `Ok(None)` if the user does not exist.
    async fn lookup_user(&self, id: &OwnerId) -> Result<Option<UserRecord>, IdentityError>;
}
