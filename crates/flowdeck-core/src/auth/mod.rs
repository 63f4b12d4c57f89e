//! Session authentication.
//!
//! Users log in against a flat credential table and receive a signed,
//! time-limited session token (an HS256 JWT). The server keeps no session
//! table: every request re-verifies the token it carries.
//!
//! # Environment Variable Formats
//!
//! ```text
//! FLOWDECK_JWT_SECRET="your-secret-key"
//! FLOWDECK_USERS="admin:secret;operator:hunter2"
//! ```
//!
//! Passwords are compared as plain strings. There is no hashing, salting or
//! rate limiting in front of [`Authenticator::authenticate`].

mod authenticator;
mod config;
mod credentials;
mod error;
mod session;

pub use authenticator::Authenticator;
pub use config::{AuthConfig, DEFAULT_TOKEN_TTL, JWT_SECRET_ENV, USERS_ENV};
pub use credentials::{Credential, CredentialStore};
pub use error::{AuthError, AuthResult};
pub use session::{SessionClaims, SessionTokens};
