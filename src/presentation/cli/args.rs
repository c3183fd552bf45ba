use clap::Parser;

use super::command::Command;
use crate::infrastructure::config::ConfigOverrides;

/// Command line of the `passforge` binary.
#[derive(Debug, Parser)]
#[command(
    name = "passforge",
    version,
    about = "Password generator, strength checker and vault client",
    long_about = None
)]
pub struct CliArgs {
    /// Flags layered over `config.toml`.
    #[command(flatten)]
    pub overrides: ConfigOverrides,

    /// Screen to run.
    #[command(subcommand)]
    pub command: Command,
}
