//! Repository layer - Data access implementations
//!
//! Concrete stores behind the domain `UserRepository` contract.

mod user_repository;

pub use user_repository::InMemoryUserStore;
