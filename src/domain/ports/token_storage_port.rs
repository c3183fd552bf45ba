//! Token storage port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthToken, SessionIdentity};
use crate::domain::errors::StorageError;

/// Port for session token persistence.
#[async_trait]
pub trait TokenStoragePort: Send + Sync {
    /// Retrieves stored token.
    async fn get_token(&self) -> Result<Option<AuthToken>, StorageError>;

    /// Stores token, replacing any previous one.
    async fn store_token(&self, token: &AuthToken) -> Result<(), StorageError>;

    /// Deletes stored token.
    async fn delete_token(&self) -> Result<(), StorageError>;

    /// Checks if token exists.
    async fn has_token(&self) -> Result<bool, StorageError> {
        Ok(self.get_token().await?.is_some())
    }

    /// Resolves who the stored token belongs to.
    async fn identity(&self) -> Result<SessionIdentity, StorageError> {
        Ok(SessionIdentity::from_token(self.get_token().await?.as_ref()))
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    /// Mock token storage for testing.
    pub struct MockTokenStorage {
        token: Arc<RwLock<Option<AuthToken>>>,
        fail_writes: AtomicBool,
        fail_reads: AtomicBool,
    }

    impl MockTokenStorage {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self {
                token: Arc::new(RwLock::new(None)),
                fail_writes: AtomicBool::new(false),
                fail_reads: AtomicBool::new(false),
            }
        }

        /// Creates mock storage with token.
        pub fn with_token(token: AuthToken) -> Self {
            Self {
                token: Arc::new(RwLock::new(Some(token))),
                fail_writes: AtomicBool::new(false),
                fail_reads: AtomicBool::new(false),
            }
        }

        /// Makes subsequent writes fail.
        pub fn fail_writes(&self) {
            self.fail_writes.store(true, Ordering::SeqCst);
        }

        /// Makes subsequent reads fail.
        pub fn fail_reads(&self) {
            self.fail_reads.store(true, Ordering::SeqCst);
        }
    }

    impl Default for MockTokenStorage {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl TokenStoragePort for MockTokenStorage {
        async fn get_token(&self) -> Result<Option<AuthToken>, StorageError> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(StorageError::ReadFailed("secret service unavailable".to_string()));
            }
            Ok(self.token.read().await.clone())
        }

        async fn store_token(&self, token: &AuthToken) -> Result<(), StorageError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(StorageError::WriteFailed("mock failure".to_string()));
            }
            *self.token.write().await = Some(token.clone());
            Ok(())
        }

        async fn delete_token(&self) -> Result<(), StorageError> {
            *self.token.write().await = None;
            Ok(())
        }
    }
}
