//! Token storage adapters.

#[cfg(feature = "keyring")]
mod keyring_storage;
#[cfg(not(feature = "keyring"))]
mod keyring_storage_stub;
mod preferences_storage;

#[cfg(feature = "keyring")]
pub use keyring_storage::KeyringTokenStorage;
#[cfg(not(feature = "keyring"))]
pub use keyring_storage_stub::KeyringTokenStorage;
pub use preferences_storage::{PREFERENCES_FILE_NAME, PreferencesTokenStorage, TOKEN_KEY};
