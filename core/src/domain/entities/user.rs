//! User entity representing a registered member of the directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity as stored by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Given name, HTML-escaped at registration
    pub first_name: String,

    /// Family name, HTML-escaped at registration
    pub last_name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Account status flag; `true` once registered
    pub status: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new active User with a fresh identifier
    pub fn new(first_name: String, last_name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            status: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Public projection of a user returned by read endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: bool,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            status: user.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_active() {
        let user = User::new("Ada".to_string(), "Lovelace".to_string(), "ada@example.com".to_string());

        assert!(user.status);
        assert_eq!(user.created_at, user.updated_at);
        assert_eq!(user.email, "ada@example.com");
    }

    #[test]
    fn test_new_users_get_distinct_ids() {
        let a = User::new("A".into(), "B".into(), "a@example.com".into());
        let b = User::new("A".into(), "B".into(), "b@example.com".into());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let user = User::new("Ada".into(), "Lovelace".into(), "ada@example.com".into());
        let value = serde_json::to_value(UserView::from(user.clone())).unwrap();

        assert_eq!(value["id"], user.id.to_string());
        assert_eq!(value["firstName"], "Ada");
        assert_eq!(value["lastName"], "Lovelace");
        assert_eq!(value["status"], true);
        assert!(value.get("createdAt").is_none());
    }
}
