//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Repository implementations behind the domain contracts
//! - Token signing for the (not yet exposed) login flow

pub mod repositories;
pub mod token;

pub use repositories::InMemoryUserStore;
pub use token::{Claims, TokenClient, TokenError};
