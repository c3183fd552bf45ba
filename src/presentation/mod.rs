//! Presentation layer with screen state and the command line front end.

/// Command line controller and rendering.
pub mod cli;
/// Screen lifetime and request cancellation.
pub mod lifecycle;
/// Reducer driven screen state.
pub mod state;
/// Screen view-models.
pub mod view_models;

pub use cli::{App, CliArgs, Command, ExitStatus};
