//! JWT token handling.

use crate::auth::models::Claims;
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

/// Issues and validates HS256 session tokens.
pub struct JwtHandler {
    secret: String,
    ttl: Duration,
}

impl JwtHandler {
    /// Create a handler issuing 1-hour tokens.
    pub fn new(secret: String) -> Self {
        Self {
            secret,
            ttl: Duration::hours(1),
        }
    }

    /// Create a handler with a custom token lifetime (tests use this to
    /// produce already-expired tokens).
    pub fn with_ttl(secret: String, ttl: Duration) -> Self {
        Self { secret, ttl }
    }

    /// Generate a token bound to `username`.
    pub fn generate_token(&self, username: &str) -> Result<String> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.ttl)
            .context("Invalid timestamp")?
            .timestamp() as usize;

        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp() as usize,
            exp: expiration,
        };

        debug!(username, exp = expiration, "Generating JWT");

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .context("Failed to generate JWT")
    }

    /// Validate a token's signature and expiry, returning its claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .context("Invalid or expired token")?;

        debug!(username = %decoded.claims.sub, "Validated JWT");

        Ok(decoded.claims)
    }
}
