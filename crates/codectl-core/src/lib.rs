//! Core of codectl: a typed driver for an editor's command-line interface.
//!
//! This crate owns everything that can be decided without touching the
//! operating system:
//!
//! - `domain` - value types (`EditorVersion`, `Extension`, `CommandOptions`, ...)
//! - `invocation` - argument vectors for every supported editor call
//! - `parse` - parsers for the captured output of query calls
//! - `ports` - the `CommandRunner` trait and the error types
//! - `services` - the `Editor` facade (presence guard, launches, queries)
//! - `request` - loosely typed requests decoded from JSON
//!
//! Spawning processes lives in `codectl-runtime`, which implements
//! [`ports::CommandRunner`].

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod invocation;
pub mod parse;
pub mod ports;
pub mod request;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{DEFAULT_EDITOR_BINARY, EDITOR_ENV_VAR, EditorConfig};
pub use domain::{
    CommandOptions, EditorVersion, Extension, ExtensionCategory, ExtensionId, ExtensionToken,
    Locale, OpenTarget, build_flags,
};
pub use invocation::Invocation;
pub use ports::{CapturedOutput, CommandRunner, EditorError, RunnerError};
pub use request::{EditorRequest, Outcome};
pub use services::Editor;

#[cfg(any(test, feature = "test-utils"))]
pub use ports::MockCommandRunner;
