//! Session inspection and logout.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{AuthToken, SessionIdentity};
use crate::domain::errors::StorageError;
use crate::domain::ports::TokenStoragePort;

/// Reads and ends the current session.
#[derive(Clone)]
pub struct SessionUseCase {
    storage_port: Arc<dyn TokenStoragePort>,
}

impl SessionUseCase {
    /// Creates new session use case.
    #[must_use]
    pub const fn new(storage_port: Arc<dyn TokenStoragePort>) -> Self {
        Self { storage_port }
    }

    /// Returns the stored token, if any.
    ///
    /// # Errors
    /// Returns error if storage cannot be read.
    pub async fn current_token(&self) -> Result<Option<AuthToken>, StorageError> {
        self.storage_port.get_token().await
    }

    /// Resolves the identity behind the stored token.
    ///
    /// # Errors
    /// Returns error if storage cannot be read.
    pub async fn identity(&self) -> Result<SessionIdentity, StorageError> {
        let identity = self.storage_port.identity().await?;
        if let SessionIdentity::Malformed { reason } = &identity {
            warn!(%reason, "Stored token payload could not be decoded");
        }
        Ok(identity)
    }

    /// Deletes the stored token.
    ///
    /// # Errors
    /// Returns error if deletion fails.
    pub async fn logout(&self) -> Result<(), StorageError> {
        debug!("Deleting session token");
        match self.storage_port.delete_token().await {
            Ok(()) => {
                info!("Logged out");
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to delete session token");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockTokenStorage;

    #[tokio::test]
    async fn test_identity_of_guest() {
        let use_case = SessionUseCase::new(Arc::new(MockTokenStorage::new()));
        assert_eq!(use_case.identity().await.unwrap(), SessionIdentity::Guest);
    }

    #[tokio::test]
    async fn test_identity_of_malformed_token() {
        let storage = MockTokenStorage::with_token(AuthToken::new("garbage"));
        let use_case = SessionUseCase::new(Arc::new(storage));

        let identity = use_case.identity().await.unwrap();
        assert!(identity.is_malformed());
        assert_eq!(identity.display_name(), "Unknown User");
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let storage = Arc::new(MockTokenStorage::with_token(AuthToken::new("a.b.c")));
        let use_case = SessionUseCase::new(storage.clone());

        use_case.logout().await.unwrap();

        assert!(!storage.has_token().await.unwrap());
        assert!(use_case.current_token().await.unwrap().is_none());
    }
}
