//! Command line front end.

mod app;
mod args;
mod command;
mod render;

pub use app::{App, ExitStatus};
pub use args::CliArgs;
pub use command::{Command, CredentialArgs, EntryField, GenerateArgs};
