//! HTTP server lifecycle.
//!
//! `Starting -> Listening -> ShuttingDown -> Stopped`, or `Crashed` when the
//! listener dies on its own. Transitions are published on a watch channel.
//!
//! Connections are served on tasks owned by the server, so the ones still
//! open when the grace period runs out can be closed.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{extract::ConnectInfo, http::Request, Router};
use hyper::{body::Incoming, server::conn::http1};
use hyper_util::{
    rt::{TokioIo, TokioTimer},
    service::TowerToHyperService,
};
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::task::JoinSet;
use tower::ServiceExt;
use tracing::{Instrument, Span};

use crate::config::SHUTDOWN_GRACE_PERIOD;

/// Lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Starting,
    Listening,
    ShuttingDown,
    Stopped,
    Crashed,
}

/// Server failures
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("listener failed: {0}")]
    Listener(io::Error),

    #[error("server shutdown: {0}")]
    Shutdown(String),

    #[error("server shutdown: in-flight requests still running after {0:?}")]
    ShutdownTimeout(Duration),
}

/// A bound HTTP server that has not started serving yet.
pub struct Server {
    listener: TcpListener,
    router: Router,
    grace_period: Duration,
    state: watch::Sender<ServerState>,
    span: Span,
}

impl Server {
    /// Bind a listener on `addr`.
    pub async fn bind(addr: SocketAddr, router: Router, span: Span) -> Result<Self, ServerError> {
        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(source) => {
                span.in_scope(|| {
                    tracing::error!(%addr, error = %source, state = ?ServerState::Crashed, "bind failed")
                });
                return Err(ServerError::Bind { addr, source });
            }
        };

        let (state, _) = watch::channel(ServerState::Starting);

        Ok(Self {
            listener,
            router,
            grace_period: SHUTDOWN_GRACE_PERIOD,
            state,
            span,
        })
    }

    /// Override how long in-flight requests get once shutdown starts.
    pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
        self.grace_period = grace_period;
        self
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Watch lifecycle transitions.
    pub fn subscribe(&self) -> watch::Receiver<ServerState> {
        self.state.subscribe()
    }

    /// Serve until `shutdown` completes, then drain in-flight requests.
    ///
    /// Connections still open when the grace period expires are dropped and
    /// their sockets closed before this returns.
    pub async fn run<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send,
    {
        let Server {
            listener,
            router,
            grace_period,
            state,
            span,
        } = self;

        let addr = listener.local_addr().map_err(ServerError::Listener)?;
        let (stop_tx, stop_rx) = watch::channel(false);
        let mut connections = JoinSet::new();

        state.send_replace(ServerState::Listening);
        span.in_scope(|| tracing::info!(%addr, "server listening"));

        tokio::select! {
            _ = shutdown => {}
            err = accept_loop(&listener, &router, &mut connections, &stop_rx, &span) => {
                connections.abort_all();
                state.send_replace(ServerState::Crashed);
                span.in_scope(|| tracing::error!(error = %err, "server crashed"));
                return Err(ServerError::Listener(err));
            }
        }

        drop(listener);
        state.send_replace(ServerState::ShuttingDown);
        span.in_scope(|| {
            tracing::info!(
                grace_period = ?grace_period,
                connections = connections.len(),
                "shutting down server"
            )
        });
        stop_tx.send_replace(true);

        let drained = tokio::time::timeout(grace_period, drain(&mut connections)).await;
        let result = match drained {
            Ok(None) => Ok(()),
            Ok(Some(reason)) => Err(ServerError::Shutdown(reason)),
            Err(_) => {
                connections.abort_all();
                while connections.join_next().await.is_some() {}
                Err(ServerError::ShutdownTimeout(grace_period))
            }
        };

        state.send_replace(ServerState::Stopped);
        span.in_scope(|| match &result {
            Ok(()) => tracing::info!("server stopped"),
            Err(e) => tracing::warn!(error = %e, "server stopped"),
        });

        result
    }
}

/// Accept connections until the listener fails.
async fn accept_loop(
    listener: &TcpListener,
    router: &Router,
    connections: &mut JoinSet<()>,
    stop: &watch::Receiver<bool>,
    span: &Span,
) -> io::Error {
    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    let connection = serve_connection(stream, peer, router.clone(), stop.clone());
                    connections.spawn(connection.instrument(span.clone()));
                }
                Err(e) if is_connection_error(&e) => {
                    span.in_scope(|| tracing::debug!(error = %e, "accept failed"));
                }
                Err(e) => return e,
            },
            Some(finished) = connections.join_next(), if !connections.is_empty() => {
                if let Err(e) = finished {
                    span.in_scope(|| tracing::warn!(error = %e, "connection task failed"));
                }
            }
        }
    }
}

/// Wait for every connection to finish; reports the first failed task.
async fn drain(connections: &mut JoinSet<()>) -> Option<String> {
    let mut failure = None;
    while let Some(finished) = connections.join_next().await {
        if let Err(e) = finished {
            failure.get_or_insert_with(|| e.to_string());
        }
    }
    failure
}

/// Serve one HTTP/1 connection, finishing gracefully once `stop` flips.
async fn serve_connection(
    stream: TcpStream,
    peer: SocketAddr,
    router: Router,
    mut stop: watch::Receiver<bool>,
) {
    let service = router.map_request(move |mut request: Request<Incoming>| {
        request.extensions_mut().insert(ConnectInfo(peer));
        request
    });

    let conn = http1::Builder::new()
        .timer(TokioTimer::new())
        .serve_connection(TokioIo::new(stream), TowerToHyperService::new(service));
    tokio::pin!(conn);

    let mut draining = false;
    loop {
        tokio::select! {
            result = conn.as_mut() => {
                if let Err(e) = result {
                    tracing::debug!(%peer, error = %e, "connection closed with error");
                }
                break;
            }
            _ = stop.changed(), if !draining => {
                draining = true;
                conn.as_mut().graceful_shutdown();
            }
        }
    }
}

fn is_connection_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
    )
}
