//! Vault entry shapes.

use serde::{Deserialize, Serialize};

/// A credential stored in the remote vault.
///
/// `id` is assigned by the server; it is absent when creating an entry and
/// omitted from the request body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPassword {
    /// Server assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Label chosen by the user.
    pub title: String,
    /// Account name; empty when none was given.
    #[serde(default)]
    pub username: String,
    /// Stored secret.
    pub password: String,
}

impl SavedPassword {
    /// Creates a new entry for saving. A missing username is sent as `""`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        username: Option<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            username: username.unwrap_or_default(),
            password: password.into(),
        }
    }

    /// Returns whether this entry carries the given server id.
    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

impl std::fmt::Debug for SavedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SavedPassword")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response of save and delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePasswordResponse {
    /// Server confirmation text.
    pub message: String,
}
