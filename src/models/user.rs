use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization tier controlling which views a session may access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator - may enumerate every registered user.
    Admin,
    /// Regular user - sees only their own identity.
    Regular,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Regular => write!(f, "regular"),
        }
    }
}

/// Represents a user in the system.
#[derive(Clone, Debug)]
pub struct User {
    /// The unique identifier for the user, assigned by the store.
    pub id: i64,
    /// The user's username.
    pub username: String,
    /// The user's email address.
    pub email: String,
    /// The user's hashed password (PHC string).
    pub password_hash: String,
    /// The user's role.
    pub role: Role,
    /// The timestamp when the user was created.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if the user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// The insert payload for a new user. The store assigns the id.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// User information in responses. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
        assert_eq!(
            serde_json::to_string(&Role::Regular).unwrap(),
            r#""regular""#
        );
    }

    #[test]
    fn user_info_omits_password_hash() {
        let user = User {
            id: 7,
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password_hash: "$argon2id$opaque".to_string(),
            role: Role::Regular,
            created_at: Utc::now(),
        };

        let info = UserInfo::from(&user);
        let json = serde_json::to_string(&info).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains(r#""username":"bob""#));
    }
}
