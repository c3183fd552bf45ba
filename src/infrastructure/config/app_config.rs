//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::args::ConfigOverrides;
use crate::application::use_cases::RegisterSuccessPolicy;
use crate::infrastructure::api::{DEFAULT_API_BASE, DEFAULT_TIMEOUT};
use crate::infrastructure::clipboard::DEFAULT_CLIPBOARD_HOLD;

pub(crate) const APP_NAME: &str = "passforge";
pub(crate) const APP_QUALIFIER: &str = "ua";
pub(crate) const APP_ORGANIZATION: &str = "asparian";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Where the session token is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TokenBackend {
    /// Private preferences file in the data directory.
    #[default]
    Preferences,
    /// System keyring.
    Keyring,
}

/// Application configuration, from `config.toml` merged with CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// File this configuration was loaded from.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Remote service settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Session persistence settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// Registration settings.
    #[serde(default)]
    pub register: RegisterConfig,

    /// Clipboard settings.
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Remote service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Service base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Session persistence configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Token storage backend.
    #[serde(default)]
    pub token_backend: TokenBackend,

    /// Directory holding the preferences file. Defaults to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Registration configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterConfig {
    /// How a registration response is judged successful.
    #[serde(default)]
    pub success_policy: RegisterSuccessPolicy,
}

/// Clipboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Seconds copied text is served where the clipboard needs a live owner.
    #[serde(default = "default_hold_secs")]
    pub hold_secs: u64,
}

impl ClipboardConfig {
    /// Returns the hold duration.
    #[must_use]
    pub const fn hold(&self) -> Duration {
        Duration::from_secs(self.hold_secs)
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            hold_secs: default_hold_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

const fn default_hold_secs() -> u64 {
    DEFAULT_CLIPBOARD_HOLD.as_secs()
}

impl AppConfig {
    /// Applies command line overrides on top of the file values.
    pub fn merge_overrides(&mut self, args: &ConfigOverrides) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = &args.api_url {
            self.api.base_url.clone_from(api_url);
        }
        if let Some(timeout) = args.timeout {
            self.api.timeout_secs = timeout;
        }
        if let Some(backend) = args.token_backend {
            self.session.token_backend = backend;
        }
        if let Some(data_dir) = &args.data_dir {
            self.session.data_dir = Some(data_dir.clone());
        }
        if let Some(policy) = args.register_success {
            self.register.success_policy = policy;
        }
        if let Some(hold) = args.clipboard_hold {
            self.clipboard.hold_secs = hold;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default data directory.
    #[must_use]
    pub fn default_data_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        Self::default_data_dir().map(|dir| dir.join("passforge.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Returns effective preferences directory.
    #[must_use]
    pub fn effective_data_dir(&self) -> Option<PathBuf> {
        self.session.data_dir.clone().or_else(Self::default_data_dir)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            register: RegisterConfig::default(),
            clipboard: ClipboardConfig::default(),
        }
    }
}
