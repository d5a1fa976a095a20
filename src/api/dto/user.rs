//! DTOs for user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    #[validate(required, length(min = 1))]
    pub email: Option<String>,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = AppError;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        let (Some(name), Some(email)) = (req.name, req.email) else {
            return Err(AppError::bad_request(
                "name and email are required",
                json!({}),
            ));
        };

        Ok(NewUser { name, email })
    }
}

/// JSON representation of a stored user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserItem {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            created_at: u.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: Option<&str>, email: Option<&str>) -> CreateUserRequest {
        CreateUserRequest {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn test_complete_request_converts() {
        let new_user = NewUser::try_from(request(Some("Alice"), Some("a@x.com"))).unwrap();

        assert_eq!(new_user.name, "Alice");
        assert_eq!(new_user.email, "a@x.com");
    }

    #[test]
    fn test_missing_or_empty_fields_are_rejected() {
        for req in [
            request(None, Some("a@x.com")),
            request(Some("Alice"), None),
            request(Some(""), Some("a@x.com")),
            request(Some("Alice"), Some("")),
            request(None, None),
        ] {
            let result = NewUser::try_from(req);
            assert!(matches!(result, Err(AppError::Validation { .. })));
        }
    }

    #[test]
    fn test_user_item_field_names() {
        let item = UserItem::from(User::new(
            "u-1".to_string(),
            "Alice".to_string(),
            "a@x.com".to_string(),
            Utc::now(),
        ));

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["_id"], "u-1");
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["email"], "a@x.com");
        assert!(json.get("createdAt").is_some());
    }
}
