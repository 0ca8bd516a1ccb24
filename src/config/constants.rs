//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

use std::time::Duration;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default application port (`APP_PORT`)
pub const DEFAULT_APP_PORT: u16 = 8080;

/// Time in-flight requests get to finish once shutdown starts
pub const SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(10);

// =============================================================================
// Database
// =============================================================================

/// Default datastore port (`DB_PORT`)
pub const DEFAULT_DB_PORT: u16 = 5432;

// =============================================================================
// HTTP
// =============================================================================

/// Largest request body accepted by the decoder (1 MiB)
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Header carrying the per-request identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Password Hashing (Argon2id)
// =============================================================================

/// Argon2 memory cost in KiB
pub const ARGON2_MEMORY_COST_KIB: u32 = 19_456;

/// Argon2 iteration count
pub const ARGON2_TIME_COST: u32 = 2;

/// Argon2 degree of parallelism
pub const ARGON2_PARALLELISM: u32 = 1;

/// Longest plaintext the hasher accepts
pub const MAX_PASSWORD_BYTES: usize = 4096;

// =============================================================================
// Tokens
// =============================================================================

/// Minimum token signing secret length (security requirement)
pub const MIN_TOKEN_SECRET_LENGTH: usize = 32;
