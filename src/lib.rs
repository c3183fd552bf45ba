//! Passforge - a terminal client for a remote password service.
//!
//! This crate generates and scores passwords on the server, manages an
//! account session and a vault of saved credentials, with clean
//! architecture separating the wire client and token storage from screen
//! state and the command line front end.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and input validation.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing view-models and the command line front end.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "passforge";
