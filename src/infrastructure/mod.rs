//! Infrastructure layer with external service adapters.

/// Password service HTTP client.
pub mod api;
/// System clipboard adapter.
pub mod clipboard;
/// Application configuration.
pub mod config;
/// Token storage adapters.
pub mod storage;

pub use api::HttpPasswordApi;
pub use clipboard::ClipboardService;
pub use config::{AppConfig, ConfigFile, ConfigOverrides, LogLevel, TokenBackend};
pub use storage::{KeyringTokenStorage, PreferencesTokenStorage};
