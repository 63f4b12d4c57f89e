//! Static credential table.

use std::collections::HashMap;
use std::fmt;

/// A stored username/password pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Unique username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Immutable username -> credential mapping, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    users: HashMap<String, Credential>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user, replacing any previous entry with the same username.
    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        let credential = Credential::new(username, password);
        self.users.insert(credential.username.clone(), credential);
        self
    }

    /// Parse a `user1:password1;user2:password2` list.
    ///
    /// Each entry is split on its first `:`, so passwords may contain colons.
    /// Blank entries and entries with an empty username are skipped.
    pub fn parse(raw: &str) -> Self {
        let mut store = Self::new();

        for entry in raw.split(';') {
            let entry = entry.trim();
            if entry.is_empty() {
                continue;
            }

            if let Some((username, password)) = entry.split_once(':') {
                let username = username.trim();
                if !username.is_empty() {
                    store = store.with_user(username, password);
                }
            }
        }

        store
    }

    /// Look up a user by name.
    pub fn get(&self, username: &str) -> Option<&Credential> {
        self.users.get(username)
    }

    /// Number of configured users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no users are configured.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
