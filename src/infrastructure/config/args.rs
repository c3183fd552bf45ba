use std::path::PathBuf;

use clap::Args;

use super::app_config::{LogLevel, TokenBackend};
use crate::application::use_cases::RegisterSuccessPolicy;

/// Global flags that override `config.toml`.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Password service base URL.
    #[arg(long, value_name = "URL", env = "PASSFORGE_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..), global = true)]
    pub timeout: Option<u64>,

    /// Where the session token is kept.
    #[arg(long, value_enum, global = true)]
    pub token_backend: Option<TokenBackend>,

    /// Directory holding the preferences file.
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// How a registration response is judged successful.
    #[arg(long, value_enum, global = true)]
    pub register_success: Option<RegisterSuccessPolicy>,

    /// Seconds copied text stays available where the clipboard needs an owner.
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..), global = true)]
    pub clipboard_hold: Option<u64>,
}
