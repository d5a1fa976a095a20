//! Domain entity representing a user.

use chrono::{DateTime, Utc};

/// A stored user.
///
/// Email format and uniqueness are not enforced; two users may share an email.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: String, name: String, email: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            email,
            created_at,
        }
    }
}

/// Input data for creating a new user.
///
/// Both fields are non-empty by the time a `NewUser` exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let now = Utc::now();
        let user = User::new(
            "u-1".to_string(),
            "Alice".to_string(),
            "a@x.com".to_string(),
            now,
        );

        assert_eq!(user.id, "u-1");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.created_at, now);
    }
}
