//! Actor roles granted by the identity service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role carried by a validated token.
///
/// The identity service transmits roles as `ROLE_USER` / `ROLE_ADMIN`
/// strings; parsing is case-insensitive. An unknown role string is not an
/// error - it simply never matches a required role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Self-service customer: submits and lists their own orders.
    RoleUser,
    /// Administrator: manages and finalizes any order.
    RoleAdmin,
}

impl Role {
    /// Parse a wire role string, case-insensitively.
    ///
    /// Returns `None` for unknown or empty strings.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("ROLE_USER") {
            Some(Self::RoleUser)
        } else if value.eq_ignore_ascii_case("ROLE_ADMIN") {
            Some(Self::RoleAdmin)
        } else {
            None
        }
    }

    /// Wire representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RoleUser => "ROLE_USER",
            Self::RoleAdmin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
