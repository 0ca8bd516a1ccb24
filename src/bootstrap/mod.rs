//! Bootstrap - Object graph wiring and process lifecycle.

pub mod container;
pub mod server;
pub mod signal;

pub use container::{BootstrapError, Container};
pub use server::{Server, ServerError, ServerState};
pub use signal::shutdown_signal;
