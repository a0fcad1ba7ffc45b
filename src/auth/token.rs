//! JWT token issuing and parsing

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use thiserror::Error;
use tracing::error;
use uuid::Uuid;

use super::models::Claims;

/// Why a token failed to issue or validate.
///
/// All parse failures are treated identically by callers (reject the
/// request); the kind only goes to the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("token has expired")]
    Expired,
    #[error("token signature is invalid")]
    SignatureInvalid,
    #[error("token signing failed")]
    Signing,
}

/// A freshly issued token with its expiry timestamp.
#[derive(Debug, Clone)]
pub struct SignedToken {
    pub token: String,
    pub expires_at: i64,
}

/// Capability interface for creating and validating bearer tokens.
///
/// One production implementation ([`JwtIssuer`]); tests substitute their
/// own doubles where the real thing is inconvenient.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: &str) -> Result<SignedToken, TokenError>;
    fn parse(&self, token: &str) -> Result<Claims, TokenError>;
}

/// HS256 issuer backed by `jsonwebtoken`.
pub struct JwtIssuer {
    secret: String,
    issuer: String,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn new(secret: String, issuer: String, ttl_hours: i64) -> Self {
        Self {
            secret,
            issuer,
            ttl: Duration::hours(ttl_hours),
        }
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(&self, subject: &str) -> Result<SignedToken, TokenError> {
        let now = Utc::now();
        let expires_at = (now + self.ttl).timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp() as usize,
            exp: expires_at as usize,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            error!(error = %e, "JWT encoding error during token issuance");
            TokenError::Signing
        })?;

        Ok(SignedToken { token, expires_at })
    }

    fn parse(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
            _ => TokenError::Malformed,
        })
    }
}
