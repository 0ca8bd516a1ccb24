//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - Request handlers
//! - Middleware (request id, client ip, logging, panic recovery)
//! - Custom extractors and the JSON codec
//! - Route definitions

pub mod codec;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::{apply_middleware, create_router};
pub use state::AppState;
