//! Token storage error types.

use thiserror::Error;

/// Token storage error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Backend could not be opened.
    #[error("failed to access token storage: {0}")]
    AccessFailed(String),

    /// Stored token could not be read.
    #[error("failed to read stored token: {0}")]
    ReadFailed(String),

    /// Token could not be written.
    #[error("failed to store token: {0}")]
    WriteFailed(String),

    /// Token could not be removed.
    #[error("failed to delete token: {0}")]
    DeleteFailed(String),

    /// No backend on this platform.
    #[error("token storage not available: {0}")]
    NotAvailable(String),
}
