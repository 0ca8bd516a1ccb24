//! Serve command - Starts the HTTP server.

use std::net::SocketAddr;

use crate::bootstrap::{shutdown_signal, Container, Server};
use crate::cli::args::ServeArgs;
use crate::commands::CommandError;
use crate::config::Config;

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> Result<(), CommandError> {
    let span = tracing::info_span!("server");
    span.in_scope(|| tracing::info!("starting server..."));

    let container = Container::build(&config, span.clone())?;

    let addr = SocketAddr::new(args.host, args.port.unwrap_or(config.app.port));
    let result = match Server::bind(addr, container.router(), span).await {
        Ok(server) => server.run(shutdown_signal()).await,
        Err(e) => Err(e),
    };

    container.close();
    result.map_err(CommandError::from)
}
