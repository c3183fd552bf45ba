//! Preferences file token storage.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::entities::AuthToken;
use crate::domain::errors::StorageError;
use crate::domain::ports::TokenStoragePort;

/// File holding the application-private key-value preferences.
pub const PREFERENCES_FILE_NAME: &str = "app_prefs.toml";
/// Key the session token is stored under.
pub const TOKEN_KEY: &str = "jwt_token";

type Preferences = BTreeMap<String, String>;

/// Stores the session token in a private key-value file.
///
/// Every read-modify-write cycle holds one lock, so concurrent login and
/// logout inside the process apply one after the other.
pub struct PreferencesTokenStorage {
    path: PathBuf,
    key: String,
    lock: Mutex<()>,
}

impl PreferencesTokenStorage {
    /// Creates storage backed by `app_prefs.toml` inside `dir`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, TOKEN_KEY)
    }

    /// Creates storage using a custom key.
    #[must_use]
    pub fn with_key(dir: impl AsRef<Path>, key: impl Into<String>) -> Self {
        Self {
            path: dir.as_ref().join(PREFERENCES_FILE_NAME),
            key: key.into(),
            lock: Mutex::new(()),
        }
    }

    /// Returns the preferences file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_preferences(&self) -> Result<Preferences, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Preferences::new()),
            Err(e) => return Err(StorageError::ReadFailed(e.to_string())),
        };

        match toml::from_str::<Preferences>(&content) {
            Ok(preferences) => Ok(preferences),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Malformed preferences file, treating as empty");
                Ok(Preferences::new())
            }
        }
    }

    async fn write_preferences(&self, preferences: Preferences) -> Result<(), StorageError> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || save_atomically(&path, &preferences))
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?
    }
}

fn save_atomically(path: &Path, preferences: &Preferences) -> Result<(), StorageError> {
    let content =
        toml::to_string(preferences).map_err(|e| StorageError::WriteFailed(e.to_string()))?;

    let parent = path
        .parent()
        .ok_or_else(|| StorageError::AccessFailed("invalid preferences path".to_string()))?;
    std::fs::create_dir_all(parent).map_err(|e| StorageError::AccessFailed(e.to_string()))?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)
        .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
    temp_file
        .persist(path)
        .map_err(|e| StorageError::WriteFailed(e.error.to_string()))?;

    Ok(())
}

#[async_trait]
impl TokenStoragePort for PreferencesTokenStorage {
    async fn get_token(&self) -> Result<Option<AuthToken>, StorageError> {
        let _guard = self.lock.lock().await;
        debug!(path = %self.path.display(), "Reading token from preferences");

        let preferences = self.read_preferences().await?;
        Ok(preferences.get(&self.key).map(AuthToken::new))
    }

    async fn store_token(&self, token: &AuthToken) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        debug!(path = %self.path.display(), "Storing token in preferences");

        let mut preferences = self.read_preferences().await?;
        preferences.insert(self.key.clone(), token.as_str().to_string());
        self.write_preferences(preferences).await?;

        debug!("Token stored successfully");
        Ok(())
    }

    async fn delete_token(&self) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        debug!(path = %self.path.display(), "Deleting token from preferences");

        let mut preferences = self.read_preferences().await?;
        if preferences.remove(&self.key).is_none() {
            debug!("No token to delete");
            return Ok(());
        }
        self.write_preferences(preferences)
            .await
            .map_err(|e| StorageError::DeleteFailed(e.to_string()))
    }
}
