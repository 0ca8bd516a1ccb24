//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns,
//! plus the repository contract that infrastructure implements.

pub mod password;
pub mod repository;
pub mod user;
pub mod validation;

pub use password::{HashingError, Password};
pub use repository::{RepositoryError, RepositoryResult, UserRepository};
pub use user::{NewUser, User, UserResponse};
pub use validation::describe_violations;

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
