//! API middleware.

mod real_ip;
mod recover;

pub use real_ip::{client_ip_from_headers, real_ip, ClientIp};
pub use recover::handle_panic;
