//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::net::IpAddr;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_SERVER_HOST;

/// Sign-up API - User registration over HTTP
#[derive(Parser, Debug)]
#[command(name = "signup-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "APP_HOST")]
    pub host: IpAddr,

    /// Port to listen on (overrides APP_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["signup-api", "serve"]).unwrap();
        assert!(!cli.verbose);
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.port, None);
    }

    #[test]
    fn test_serve_overrides() {
        let cli =
            Cli::try_parse_from(["signup-api", "-v", "serve", "-H", "127.0.0.1", "-p", "9000"])
                .unwrap();
        assert!(cli.verbose);
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.host, "127.0.0.1".parse::<IpAddr>().unwrap());
        assert_eq!(args.port, Some(9000));
    }

    #[test]
    fn test_invalid_host_rejected() {
        assert!(Cli::try_parse_from(["signup-api", "serve", "-H", "nowhere"]).is_err());
    }
}
