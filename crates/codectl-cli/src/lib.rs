//! Command-line front end for codectl.
//!
//! `main.rs` parses arguments, calls [`bootstrap`] to wire the system
//! runner into an [`codectl_core::Editor`], and dispatches to one handler
//! per subcommand. Handlers stay thin: they turn clap arguments into core
//! calls and format the results.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod extension_commands;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, WindowArgs};
pub use error::{CliError, exit_code_for};
pub use extension_commands::ExtensionCommand;
pub use parser::Cli;
