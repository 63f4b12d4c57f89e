//! Authentication error types.

use thiserror::Error;

/// Authentication errors.
///
/// Rejections carry no detail about why they happened: an unknown user and a
/// wrong password are both [`AuthError::InvalidCredentials`], and a tampered,
/// malformed, expired or subject-less token is always [`AuthError::InvalidToken`].
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login rejected.
    #[error("incorrect username or password")]
    InvalidCredentials,

    /// Session token missing, malformed, forged or expired.
    #[error("invalid token")]
    InvalidToken,

    /// Token could not be signed.
    #[error("token signing failed: {0}")]
    Signing(String),

    /// Authentication configuration is missing or malformed.
    #[error("auth configuration error: {0}")]
    Config(String),
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
