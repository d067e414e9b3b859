use serde::{Deserialize, Serialize};

/// Profile of the logged-in employee, as cached locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredUser {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

/// An authenticated session: bearer token plus the cached profile.
/// Created on successful login, destroyed on logout or HTTP 401.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: Option<StoredUser>,
}

impl Session {
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("you")
    }
}

/// Credentials persisted by `login --remember`.
/// Plaintext at rest, exactly like the system this replaces; the config
/// directory is expected to be user-private.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedCreds {
    pub email: String,
    pub password: String,
}
