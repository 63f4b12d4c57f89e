//! Authentication configuration.

use std::fmt;
use std::time::Duration;

use super::credentials::CredentialStore;
use super::error::{AuthError, AuthResult};

/// Environment variable holding the HMAC signing secret.
pub const JWT_SECRET_ENV: &str = "FLOWDECK_JWT_SECRET";

/// Environment variable holding the `user:password;...` credential list.
pub const USERS_ENV: &str = "FLOWDECK_USERS";

/// Default session token lifetime (1 hour).
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Secret key, credential table and token lifetime.
///
/// Loaded once at startup and handed to the [`Authenticator`](super::Authenticator);
/// nothing in it changes for the lifetime of the process.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify session tokens.
    pub secret: Vec<u8>,
    /// Users allowed to log in.
    pub users: CredentialStore,
    /// Lifetime of an issued session token.
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Create a configuration from a secret and a credential table.
    pub fn new(secret: impl Into<Vec<u8>>, users: CredentialStore) -> Self {
        Self {
            secret: secret.into(),
            users,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Set the session token lifetime.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Load from environment variables.
    ///
    /// `FLOWDECK_JWT_SECRET` is required and must be non-empty.
    /// `FLOWDECK_USERS` is optional; without it nobody can log in.
    pub fn from_env() -> AuthResult<Self> {
        let secret = std::env::var(JWT_SECRET_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                AuthError::Config(format!("no session secret configured (set {JWT_SECRET_ENV})"))
            })?;

        let users = std::env::var(USERS_ENV)
            .map(|raw| CredentialStore::parse(&raw))
            .unwrap_or_default();

        if users.is_empty() {
            tracing::warn!(env = USERS_ENV, "no users configured, every login will be rejected");
        }

        Ok(Self::new(secret, users))
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("users", &self.users.len())
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
