//! Sign-up use case - Registers a new user.
//!
//! Hashes the password, builds and validates the candidate entity, then hands
//! it to the repository. Nothing is retried and no uniqueness check is made.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

use crate::domain::{
    describe_violations, HashingError, NewUser, Password, RepositoryError, User, UserRepository,
};

/// Sign-up input, detached from the transport request shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpInput {
    pub email: String,
    pub password: String,
}

/// Sign-up failures
#[derive(Debug, Error)]
pub enum SignUpError {
    /// The password could not be hashed
    #[error(transparent)]
    Validation(#[from] HashingError),

    /// The candidate entity broke its own validation rule
    #[error("{0}")]
    DomainValidation(String),

    /// The repository refused the write
    #[error(transparent)]
    Persistence(#[from] RepositoryError),
}

/// Sign-up service trait for dependency injection.
#[async_trait]
pub trait SignUpService: Send + Sync {
    /// Register a new user and return the persisted entity
    async fn execute(&self, input: SignUpInput) -> Result<User, SignUpError>;
}

/// Concrete implementation of SignUpService backed by a repository.
pub struct SignUpUseCase {
    users: Arc<dyn UserRepository>,
}

impl SignUpUseCase {
    /// Create new sign-up use case with repository
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl SignUpService for SignUpUseCase {
    async fn execute(&self, input: SignUpInput) -> Result<User, SignUpError> {
        let password = Password::hash(&input.password)?;

        let candidate = NewUser::new(input.email, password);
        candidate
            .validate()
            .map_err(|e| SignUpError::DomainValidation(describe_violations(&e)))?;

        let user = self.users.create(candidate).await?;

        tracing::info!(user_id = %user.id, "user signed up");
        Ok(user)
    }
}
