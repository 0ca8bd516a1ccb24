//! User repository contract.
//!
//! Orchestration code depends on this trait only; concrete stores live in
//! `infra` and are chosen by the composition root.

use async_trait::async_trait;
use thiserror::Error;

use super::user::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Errors a store may report for a write
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Uniqueness violation
    #[error("{0} already exists")]
    Conflict(String),

    /// Any other refusal of the underlying store
    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// User repository trait for dependency injection.
///
/// Implementations must be safe to call concurrently. Dropping the returned
/// future cancels the call, so a store must not leave partial writes behind
/// across an `.await`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a validated candidate.
    ///
    /// The returned user carries an identifier never issued before.
    async fn create(&self, user: NewUser) -> RepositoryResult<User>;
}
