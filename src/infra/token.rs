//! HS256 token client.
//!
//! Provisioned for a future login flow; no route issues tokens yet.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::MIN_TOKEN_SECRET_LENGTH;
use crate::domain::User;

/// Token client errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token secret must be at least {min} characters long")]
    WeakSecret { min: usize },

    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),

    #[error("invalid token")]
    Invalid,
}

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
}

/// Signs and verifies HS256 tokens with a shared secret.
#[derive(Clone)]
pub struct TokenClient {
    secret: String,
    ttl: Duration,
}

impl std::fmt::Debug for TokenClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenClient")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenClient {
    /// Create a client; rejects secrets shorter than the minimum length.
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Result<Self, TokenError> {
        let secret = secret.into();
        if secret.len() < MIN_TOKEN_SECRET_LENGTH {
            return Err(TokenError::WeakSecret {
                min: MIN_TOKEN_SECRET_LENGTH,
            });
        }

        Ok(Self { secret, ttl })
    }

    /// Claims for `user`, valid from now for the configured lifetime.
    pub fn claims_for(&self, user: &User) -> Claims {
        let now = Utc::now();
        Claims {
            sub: user.id,
            email: user.email.clone(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Sign claims into a compact token.
    pub fn generate(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Signing)
    }

    /// Verify signature, algorithm and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn client() -> TokenClient {
        TokenClient::new(SECRET, Duration::hours(1)).unwrap()
    }

    fn user() -> User {
        User::new(Uuid::new_v4(), "a@b.com".into(), "hash".into())
    }

    #[test]
    fn test_weak_secret_rejected() {
        let result = TokenClient::new("short", Duration::hours(1));
        assert!(matches!(result, Err(TokenError::WeakSecret { .. })));
    }

    #[test]
    fn test_generated_token_verifies() {
        let client = client();
        let user = user();
        let claims = client.claims_for(&user);

        let token = client.generate(&claims).unwrap();
        let verified = client.verify(&token).unwrap();

        assert_eq!(verified.sub, user.id);
        assert!(verified.exp > verified.iat);
    }

    #[test]
    fn test_other_secret_rejected() {
        let token = client().generate(&client().claims_for(&user())).unwrap();
        let other = TokenClient::new("another-secret-key-for-testing-32chars", Duration::hours(1))
            .unwrap();

        assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let client = client();
        let mut claims = client.claims_for(&user());
        claims.iat -= 7200;
        claims.exp = claims.iat + 60;

        let token = client.generate(&claims).unwrap();
        assert!(matches!(client.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(client().verify("not.a.token"), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains(SECRET));
    }
}
