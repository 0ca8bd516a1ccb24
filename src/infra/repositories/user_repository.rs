//! In-memory user repository.
//!
//! Placeholder store: assigns identifiers and normalizes emails but keeps
//! nothing between calls. A durable store implements the same contract.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewUser, RepositoryResult, User, UserRepository};

/// Concrete implementation of UserRepository without a backing collection
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryUserStore;

impl InMemoryUserStore {
    /// Create new repository instance
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn create(&self, user: NewUser) -> RepositoryResult<User> {
        let created = User::new(
            Uuid::new_v4(),
            user.email.to_lowercase(),
            user.hashed_password,
        );

        tracing::debug!(user_id = %created.id, "user record created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            hashed_password: "$argon2id$v=19$stub".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_lowercases_email() {
        let store = InMemoryUserStore::new();
        let user = store.create(candidate("Mixed.Case@Example.COM")).await.unwrap();

        assert_eq!(user.email, "mixed.case@example.com");
    }

    #[tokio::test]
    async fn test_create_keeps_hash_and_leaves_updated_at_empty() {
        let store = InMemoryUserStore::new();
        let user = store.create(candidate("a@b.com")).await.unwrap();

        assert_eq!(user.hashed_password, "$argon2id$v=19$stub");
        assert!(user.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = InMemoryUserStore::new();
        let first = store.create(candidate("a@b.com")).await.unwrap();
        let second = store.create(candidate("a@b.com")).await.unwrap();

        assert_ne!(first.id, second.id);
        assert!(!first.id.is_nil());
    }
}
