mod api_port;
mod clipboard_port;
mod token_storage_port;

pub use api_port::PasswordApiPort;
#[cfg(test)]
pub use clipboard_port::MockClipboardPort;
pub use clipboard_port::{ClipboardError, ClipboardLease, ClipboardPort};
pub use token_storage_port::TokenStoragePort;

#[cfg(test)]
pub mod mocks {
    pub use super::api_port::mock::{ApiCall, MockPasswordApi};
    pub use super::token_storage_port::mock::MockTokenStorage;
}
