//! Application configuration.

pub mod app_config;
pub mod args;
pub mod file;

pub use app_config::{
    ApiConfig, AppConfig, ClipboardConfig, LogLevel, RegisterConfig, SessionConfig, TokenBackend,
};
pub use args::ConfigOverrides;
pub use file::{ConfigError, ConfigFile};
