//! Saved password operations that require a session.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::entities::{AuthToken, SavePasswordResponse, SavedPassword};
use crate::domain::errors::{ApiError, StorageError};
use crate::domain::ports::{PasswordApiPort, TokenStoragePort};

/// Vault operation failure.
#[derive(Debug, Error)]
pub enum VaultError {
    /// No token is stored.
    #[error("You are not logged in.")]
    NotLoggedIn,

    /// The service call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The token could not be read.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Lists, saves and deletes vault entries for the stored session.
#[derive(Clone)]
pub struct VaultUseCase {
    api: Arc<dyn PasswordApiPort>,
    storage_port: Arc<dyn TokenStoragePort>,
}

impl VaultUseCase {
    /// Creates new vault use case.
    #[must_use]
    pub const fn new(api: Arc<dyn PasswordApiPort>, storage_port: Arc<dyn TokenStoragePort>) -> Self {
        Self { api, storage_port }
    }

    /// Fetches every entry.
    ///
    /// # Errors
    /// Returns [`VaultError::NotLoggedIn`] without a network call when no
    /// token is stored.
    pub async fn list(&self) -> Result<Vec<SavedPassword>, VaultError> {
        let token = self.require_token().await?;
        let entries = self.api.saved_passwords(&token).await?;
        debug!(count = entries.len(), "Fetched saved passwords");
        Ok(entries)
    }

    /// Adds an entry.
    ///
    /// # Errors
    /// Returns [`VaultError::NotLoggedIn`] without a network call when no
    /// token is stored.
    pub async fn save(&self, entry: &SavedPassword) -> Result<SavePasswordResponse, VaultError> {
        let token = self.require_token().await?;
        debug!(title = %entry.title, "Saving password");
        Ok(self.api.save_password(&token, entry).await?)
    }

    /// Removes an entry by id.
    ///
    /// # Errors
    /// Returns [`VaultError::NotLoggedIn`] without a network call when no
    /// token is stored.
    pub async fn delete(&self, id: &str) -> Result<SavePasswordResponse, VaultError> {
        let token = self.require_token().await?;
        debug!(%id, "Deleting saved password");
        Ok(self.api.delete_password(&token, id).await?)
    }

    async fn require_token(&self) -> Result<AuthToken, VaultError> {
        self.storage_port
            .get_token()
            .await?
            .ok_or(VaultError::NotLoggedIn)
    }
}
