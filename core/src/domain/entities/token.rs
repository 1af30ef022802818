//! Claims carried by the JWT issued at registration.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Claims structure for JWT payload
///
/// The identity fields are a snapshot taken at issuance and are not refreshed
/// if the stored record changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// User identifier
    pub id: String,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl TokenClaims {
    /// Snapshot a user's identity into claims valid for `lifetime` from `issued_at`
    ///
    /// Returns `None` when the expiry falls outside the representable date range.
    pub fn for_user(user: &User, issued_at: DateTime<Utc>, lifetime: Duration) -> Option<Self> {
        let expires_at = issued_at.checked_add_signed(lifetime)?;
        Some(Self {
            id: user.id.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.id)
    }
}
