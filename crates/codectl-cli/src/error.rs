//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `EditorError` to exit codes and user-facing messages.

use codectl_core::EditorError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The editor is not installed or did not answer.
    #[error("{0}")]
    Unavailable(String),

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Input document (batch file) could not be decoded.
    #[error("Invalid input: {0}")]
    Data(String),

    /// The editor printed something we could not parse.
    #[error("Unexpected editor output: {0}")]
    Protocol(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Process execution error.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Arguments(_) => 2,     // EX_USAGE
            CliError::Data(_) => 65,         // EX_DATAERR
            CliError::Unavailable(_) => 69,  // EX_UNAVAILABLE
            CliError::Process(_) => 71,      // EX_OSERR
            CliError::Io(_) => 74,           // EX_IOERR
            CliError::Protocol(_) => 76,     // EX_PROTOCOL
        }
    }
}

impl From<&EditorError> for CliError {
    fn from(err: &EditorError) -> Self {
        let message = err.to_string();
        match err {
            EditorError::EditorNotFound { .. } => CliError::Unavailable(message),
            EditorError::InvalidArgumentType { .. } | EditorError::InvalidExtensionToken(_) => {
                CliError::Arguments(message)
            }
            EditorError::MalformedOutput { .. } => CliError::Protocol(message),
            EditorError::Process(_) => CliError::Process(message),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

/// Exit code for an error that reached `main`.
///
/// Looks through `anyhow` context for the first `CliError` or
/// `EditorError`; anything else is a general failure.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| {
            if let Some(cli) = cause.downcast_ref::<CliError>() {
                return Some(cli.exit_code());
            }
            cause
                .downcast_ref::<EditorError>()
                .map(|editor| CliError::from(editor).exit_code())
        })
        .unwrap_or(1)
}
