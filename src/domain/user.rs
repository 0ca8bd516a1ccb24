//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::password::Password;

/// Persisted user entity
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
    /// Last modification time (None until the user is modified)
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a freshly persisted user
    pub fn new(id: Uuid, email: String, hashed_password: String) -> Self {
        Self {
            id,
            email,
            hashed_password,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Unpersisted user candidate.
///
/// Carries no identifier or timestamps; those belong to the repository.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewUser {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "hashed password must not be empty"))]
    pub hashed_password: String,
}

impl NewUser {
    /// Build a candidate from a raw email and an already hashed password
    pub fn new(email: impl Into<String>, password: Password) -> Self {
        Self {
            email: email.into(),
            hashed_password: password.into_string(),
        }
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// User email address
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(email: &str, hash: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            hashed_password: hash.to_string(),
        }
    }

    #[test]
    fn test_valid_candidate() {
        assert!(candidate("a@b.com", "$argon2id$hash").validate().is_ok());
    }

    #[test]
    fn test_candidate_rejects_bad_email() {
        let errors = candidate("not-an-email", "$argon2id$hash")
            .validate()
            .unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_candidate_rejects_empty_email() {
        assert!(candidate("", "$argon2id$hash").validate().is_err());
    }

    #[test]
    fn test_candidate_rejects_empty_hash() {
        let errors = candidate("a@b.com", "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("hashed_password"));
    }

    #[test]
    fn test_new_user_has_no_update_time() {
        let user = User::new(Uuid::new_v4(), "a@b.com".into(), "hash".into());
        assert!(user.updated_at.is_none());
    }

    #[test]
    fn test_serialized_user_hides_hash() {
        let user = User::new(Uuid::new_v4(), "a@b.com".into(), "secret-hash".into());
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("hashed_password").is_none());
        assert!(json["updated_at"].is_null());
    }

    #[test]
    fn test_user_response_shape() {
        let user = User::new(Uuid::new_v4(), "a@b.com".into(), "hash".into());
        let id = user.id;
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["created_at", "email", "id", "updated_at"]);
        assert_eq!(json["id"], id.to_string());
    }
}
