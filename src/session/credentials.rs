use std::fmt;
use std::sync::RwLock;

/// Account credentials for the Patchworks API, holding the current bearer
/// token for the session
///
/// Username and password are fixed at construction. The token starts empty
/// and is written by the authentication flow after each successful login;
/// every client built from the same `Credentials` observes the same token.
/// Concurrent requests that each trigger a reauthentication both write the
/// token they obtained and the last write wins.
pub struct Credentials {
    username: String,
    password: String,
    token: RwLock<String>,
}

impl Credentials {
    /// Creates credentials with an empty token slot
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            token: RwLock::new(String::new()),
        }
    }

    /// Username (email) used for the login exchange
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Password used for the login exchange
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the current bearer token, empty until the first login
    pub fn token(&self) -> String {
        self.token
            .read()
            .map(|token| token.clone())
            .unwrap_or_default()
    }

    /// Returns true once a login has stored a token
    pub fn has_token(&self) -> bool {
        !self.token().is_empty()
    }

    /// Replaces the stored token with the one returned by a login exchange
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut slot) = self.token.write() {
            *slot = token.into();
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("token", &if self.has_token() { "***" } else { "" })
            .finish()
    }
}
