//! Password value object - Domain layer password handling.
//!
//! Argon2id with a fixed work factor. Every hash carries its own random salt,
//! so two hashes of the same plaintext never compare equal; use [`Password::verify`].

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

use crate::config::{
    ARGON2_MEMORY_COST_KIB, ARGON2_PARALLELISM, ARGON2_TIME_COST, MAX_PASSWORD_BYTES,
};

/// Failure of the hashing primitive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashingError {
    #[error("password must not be longer than {max} bytes")]
    TooLong { max: usize },

    #[error("password hashing failed: {0}")]
    Algorithm(String),
}

/// Password value object that handles hashing and verification.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a plaintext password with a freshly generated salt.
    ///
    /// # Errors
    /// Returns [`HashingError::TooLong`] for oversized input and
    /// [`HashingError::Algorithm`] if Argon2 itself fails.
    pub fn hash(plain_text: &str) -> Result<Self, HashingError> {
        if plain_text.len() > MAX_PASSWORD_BYTES {
            return Err(HashingError::TooLong {
                max: MAX_PASSWORD_BYTES,
            });
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| HashingError::Algorithm(e.to_string()))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Create a Password from an existing hash (from storage).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };

        Self::argon2()
            .map(|argon2| argon2.verify_password(plain_text.as_bytes(), &parsed).is_ok())
            .unwrap_or(false)
    }

    #[inline]
    fn argon2() -> Result<Argon2<'static>, HashingError> {
        let params = Params::new(
            ARGON2_MEMORY_COST_KIB,
            ARGON2_TIME_COST,
            ARGON2_PARALLELISM,
            None,
        )
        .map_err(|e| HashingError::Algorithm(e.to_string()))?;

        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}
