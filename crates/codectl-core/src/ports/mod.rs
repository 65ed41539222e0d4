//! Port definitions (trait abstractions) for external systems.
//!
//! The only external system codectl talks to is the editor binary, reached
//! through [`CommandRunner`]. This module also holds the error types shared by
//! the core and its adapters.
//!
//! # Design Rules
//!
//! - No `std::process` types in any signature
//! - Runners receive a finished [`crate::Invocation`]; they never build arguments
//! - Intent-based methods: probe, capture, launch

pub mod command_runner;

use thiserror::Error;

pub use command_runner::{CapturedOutput, CommandRunner};

#[cfg(any(test, feature = "test-utils"))]
pub use command_runner::MockCommandRunner;

/// Errors raised by a [`CommandRunner`] implementation.
///
/// These describe the operating system refusing to run the editor, not the
/// editor reporting a failure (launch exit codes are never observed).
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The program could not be located.
    #[error("Cannot resolve `{program}`: {reason}")]
    Resolve { program: String, reason: String },

    /// The program was located but the process could not be started or read.
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Core error type for every public editor operation.
///
/// Adapters map this to their own representation (CLI exit codes,
/// serialized batch results).
#[derive(Debug, Error)]
pub enum EditorError {
    /// The editor binary is absent or its version query failed.
    #[error("Editor `{binary}` was not found or does not support the command-line interface")]
    EditorNotFound { binary: String },

    /// A caller-supplied value has the wrong type or shape.
    #[error("Invalid argument `{argument}`: expected {expected}, got {actual}")]
    InvalidArgumentType {
        argument: String,
        expected: String,
        actual: String,
    },

    /// An extension identifier does not match `publisher.name[@version]`.
    #[error("Invalid extension `{0}`: expected `publisher.name` or `publisher.name@version`")]
    InvalidExtensionToken(String),

    /// Captured output does not have the expected fixed format.
    #[error("Malformed output from `{command}`: {reason}")]
    MalformedOutput { command: String, reason: String },

    /// The process could not be run after the presence check passed.
    #[error(transparent)]
    Process(#[from] RunnerError),
}

impl EditorError {
    /// Shorthand for [`EditorError::InvalidArgumentType`].
    pub fn invalid_argument(
        argument: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidArgumentType {
            argument: argument.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Shorthand for [`EditorError::MalformedOutput`].
    pub fn malformed(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedOutput {
            command: command.into(),
            reason: reason.into(),
        }
    }
}
