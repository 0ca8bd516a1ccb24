//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

use thiserror::Error;

use crate::bootstrap::{BootstrapError, ServerError};

pub mod serve;

/// Command failures reported by `main`
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("fail to create server container: {0}")]
    Bootstrap(#[from] BootstrapError),

    #[error("starting server: {0}")]
    Server(#[from] ServerError),
}
