//! Login and session verification.

use super::config::AuthConfig;
use super::credentials::{Credential, CredentialStore};
use super::error::{AuthError, AuthResult};
use super::session::SessionTokens;

/// Checks credentials, issues session tokens and verifies them.
///
/// Holds only immutable state, so one instance can be shared across all
/// request handlers behind an `Arc` without locking.
pub struct Authenticator {
    credentials: CredentialStore,
    tokens: SessionTokens,
}

impl Authenticator {
    /// Build an authenticator from its configuration.
    pub fn new(config: AuthConfig) -> Self {
        Self {
            tokens: SessionTokens::new(&config.secret, config.token_ttl),
            credentials: config.users,
        }
    }

    /// Look up `username` and compare `password` byte-for-byte.
    pub fn authenticate(&self, username: &str, password: &str) -> AuthResult<&Credential> {
        match self.credentials.get(username) {
            Some(credential) if credential.password == password => Ok(credential),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    /// Issue a session token for `username`.
    pub fn issue_token(&self, username: &str) -> AuthResult<String> {
        self.tokens.issue(username)
    }

    /// Verify a session token and return the username it was issued to.
    pub fn verify_token(&self, token: Option<&str>) -> AuthResult<String> {
        self.tokens.verify(token)
    }

    /// Authenticate and, on success, issue a session token.
    pub fn login(&self, username: &str, password: &str) -> AuthResult<String> {
        let credential = self.authenticate(username, password).map_err(|e| {
            tracing::info!("login rejected");
            e
        })?;
        let token = self.issue_token(&credential.username)?;
        tracing::info!(user = %credential.username, "login succeeded");
        Ok(token)
    }
}
