//! Domain layer with wire entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{AuthToken, SessionIdentity};
pub use errors::{ApiError, StorageError};
pub use ports::{ClipboardPort, PasswordApiPort, TokenStoragePort};
