//! Signed session tokens.
//!
//! A session token is an HS256 JWT with two claims:
//!
//! ```json
//! {
//!   "sub": "admin",
//!   "exp": 1735689600
//! }
//! ```
//!
//! A token is valid only when its signature verifies, `exp` is strictly in
//! the future (no leeway) and `sub` is present and non-empty. Issuer,
//! audience and nonce are never checked.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::error::{AuthError, AuthResult};

/// Claims carried by an issued session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (username).
    pub sub: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
}

/// Claims as they arrive from the client; the subject may be missing.
#[derive(Debug, Deserialize)]
struct IncomingClaims {
    #[serde(default)]
    sub: Option<String>,
    exp: i64,
}

/// Issues and verifies session tokens with one process-wide secret.
pub struct SessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionTokens {
    /// Create a token service for an HMAC secret.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Sign a token for `username` expiring `ttl` from now.
    ///
    /// Fails with [`AuthError::Config`] when the expiry does not fit a Unix
    /// timestamp.
    pub fn issue(&self, username: &str) -> AuthResult<String> {
        let exp = i64::try_from(self.ttl.as_secs())
            .ok()
            .and_then(|ttl| Utc::now().timestamp().checked_add(ttl))
            .ok_or_else(|| {
                AuthError::Config(format!("token lifetime of {:?} is out of range", self.ttl))
            })?;

        let claims = SessionClaims {
            sub: username.to_string(),
            exp,
        };
        self.sign(&claims)
    }

    /// Sign an arbitrary claim set.
    pub fn sign(&self, claims: &SessionClaims) -> AuthResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Verify a raw token and return its subject.
    pub fn verify(&self, token: Option<&str>) -> AuthResult<String> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::InvalidToken)?;

        let data = decode::<IncomingClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| {
                tracing::debug!(error = %e, "session token rejected");
                AuthError::InvalidToken
            },
        )?;

        // jsonwebtoken accepts exp == now; expiry must be strictly in the future.
        if data.claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::InvalidToken);
        }

        data.claims
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or(AuthError::InvalidToken)
    }
}
