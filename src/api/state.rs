//! Application state - Handler dependencies.

use std::sync::Arc;

use crate::services::SignUpService;

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Sign-up use case
    pub sign_up: Arc<dyn SignUpService>,
}

impl AppState {
    /// Create new application state with injected services.
    pub fn new(sign_up: Arc<dyn SignUpService>) -> Self {
        Self { sign_up }
    }
}
