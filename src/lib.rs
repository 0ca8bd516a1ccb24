//! Sign-up API - User registration over HTTP
//!
//! A layered service that accepts sign-up requests, hashes the password,
//! persists the user through a swappable repository and answers in JSON.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities, password hashing and the repository contract
//! - **services**: Application use cases
//! - **infra**: Repository adapters and the token client
//! - **api**: HTTP handlers, middleware, codec and routes
//! - **bootstrap**: Composition root and server lifecycle
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Bind a specific address
//! cargo run -- serve --host 127.0.0.1 --port 9000
//! ```

pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use bootstrap::{Container, Server};
pub use config::Config;
pub use domain::{Password, User, UserRepository};
pub use errors::{AppError, AppResult};
