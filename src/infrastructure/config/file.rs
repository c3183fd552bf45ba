//! `config.toml` discovery and loading.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use super::app_config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Failures that stop the configuration from loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `--config` was given and the platform has no config directory.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// The file or its directory could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Defaults could not be serialized for the first-run file.
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Location of the configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Uses `path_override` when given, else `config.toml` in the platform
    /// config directory.
    ///
    /// # Errors
    /// Returns `ConfigDirNotFound` when there is no override and no platform
    /// config directory.
    pub fn locate(path_override: Option<&Path>) -> Result<Self, ConfigError> {
        match path_override {
            Some(path) => Ok(Self::at(path)),
            None => AppConfig::default_config_dir()
                .map(|dir| Self::at(dir.join(CONFIG_FILE_NAME)))
                .ok_or(ConfigError::ConfigDirNotFound),
        }
    }

    /// Points at an explicit file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the configuration.
    ///
    /// A missing file is written with defaults. A file that does not parse
    /// is left untouched and defaults are used. Out-of-range values are
    /// reset to their defaults. The returned config remembers its path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or the defaults cannot be
    /// written.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut config = if self.path.exists() {
            self.read()?
        } else {
            info!(path = %self.path.display(), "Config file not found, writing defaults");
            let defaults = AppConfig::default();
            self.write(&defaults)?;
            defaults
        };

        let defaults = AppConfig::default();
        if config.api.timeout_secs == 0 {
            warn!(path = %self.path.display(), "api.timeout_secs must be at least 1, using default");
            config.api.timeout_secs = defaults.api.timeout_secs;
        }
        if config.clipboard.hold_secs == 0 {
            warn!(path = %self.path.display(), "clipboard.hold_secs must be at least 1, using default");
            config.clipboard.hold_secs = defaults.clipboard.hold_secs;
        }
        config.config = Some(self.path.clone());
        Ok(config)
    }

    fn read(&self) -> Result<AppConfig, ConfigError> {
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Malformed config file, using defaults");
            AppConfig::default()
        }))
    }

    fn write(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let content = toml::to_string_pretty(config)?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_written_with_defaults() {
        let dir = tempdir().unwrap();
        let file = ConfigFile::at(dir.path().join("nested").join(CONFIG_FILE_NAME));

        let config = file.load().unwrap();

        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.config.as_deref(), Some(file.path()));
        let written = fs::read_to_string(file.path()).unwrap();
        assert!(written.contains("base_url"));
    }

    #[test]
    fn test_malformed_file_falls_back_untouched() {
        let dir = tempdir().unwrap();
        let file = ConfigFile::at(dir.path().join(CONFIG_FILE_NAME));
        fs::write(file.path(), "invalid_toml = [").unwrap();

        let config = file.load().unwrap();

        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(fs::read_to_string(file.path()).unwrap(), "invalid_toml = [");
    }

    #[test]
    fn test_explicit_path_is_read() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "[api]\nbase_url = \"http://localhost:3000\"\n").unwrap();

        let file = ConfigFile::locate(Some(&custom)).unwrap();
        let config = file.load().unwrap();

        assert_eq!(file.path(), custom.as_path());
        assert_eq!(config.api.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_zero_durations_are_reset() {
        let dir = tempdir().unwrap();
        let file = ConfigFile::at(dir.path().join(CONFIG_FILE_NAME));
        fs::write(
            file.path(),
            "[api]\ntimeout_secs = 0\n\n[clipboard]\nhold_secs = 0\n",
        )
        .unwrap();

        let config = file.load().unwrap();

        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.clipboard.hold_secs, 30);
    }
}
