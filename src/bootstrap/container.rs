//! Composition root - Wires the application object graph.
//!
//! Every dependency is built by explicit constructor chaining:
//! repository, sign-up use case, handler state, router.

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tracing::Span;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::domain::UserRepository;
use crate::infra::InMemoryUserStore;
use crate::services::SignUpUseCase;

/// Container construction failures
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("{stage}: {reason}")]
    Stage { stage: &'static str, reason: String },
}

/// Fully wired application.
pub struct Container {
    router: Router,
    span: Span,
}

impl Container {
    /// Build the container with the default repository adapter.
    ///
    /// The datastore settings are validated by `Config` but the in-memory
    /// adapter does not connect anywhere.
    pub fn build(config: &Config, span: Span) -> Result<Self, BootstrapError> {
        span.in_scope(|| {
            tracing::debug!(
                db_host = %config.db.host,
                db_port = config.db.port,
                db_name = %config.db.name,
                "using in-memory user store"
            )
        });

        Self::from_repository(Arc::new(InMemoryUserStore::new()), span)
    }

    /// Build the container around a caller-chosen repository adapter.
    pub fn from_repository(
        users: Arc<dyn UserRepository>,
        span: Span,
    ) -> Result<Self, BootstrapError> {
        let router = span.in_scope(|| {
            let sign_up = Arc::new(SignUpUseCase::new(users));
            let state = AppState::new(sign_up);
            let router = create_router(state);

            tracing::info!("server container created");
            router
        });

        Ok(Self { router, span })
    }

    /// Application router, ready to serve.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Release container resources.
    pub fn close(self) {
        let _guard = self.span.enter();
        tracing::info!("server container closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::from_lookup(|key| match key {
            "DB_HOST" => Some("localhost".into()),
            "DB_NAME" => Some("users".into()),
            "DB_USERNAME" => Some("app".into()),
            "DB_PASSWORD" => Some("secret".into()),
            _ => None,
        })
        .unwrap()
    }

    #[test]
    fn test_build_and_close() {
        let container = Container::build(&config(), Span::none()).unwrap();
        let _router = container.router();
        container.close();
    }

    #[test]
    fn test_stage_error_message() {
        let err = BootstrapError::Stage {
            stage: "datastore",
            reason: "connection refused".into(),
        };
        assert_eq!(err.to_string(), "datastore: connection refused");
    }
}
