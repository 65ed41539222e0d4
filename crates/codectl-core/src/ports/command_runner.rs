//! Command runner trait definition.
//!
//! This port defines how the core reaches the editor binary. Implementations
//! own the program name, binary lookup and platform process flags; the core
//! only hands them a finished argument vector.

use super::RunnerError;
use crate::invocation::Invocation;

/// Result of a capturing call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Raw standard output. Decoding is the caller's job.
    pub stdout: Vec<u8>,
}

impl CapturedOutput {
    /// Successful output with the given stdout.
    pub fn success(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
        }
    }

    /// Failed output with empty stdout.
    pub fn failure() -> Self {
        Self::default()
    }

    /// Stdout decoded as UTF-8 with invalid sequences dropped.
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).replace(char::REPLACEMENT_CHARACTER, "")
    }
}

/// Runs editor invocations.
///
/// This trait abstracts process management for testability. All methods
/// block; none of them cache anything between calls.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Name of the program this runner invokes, for error messages.
    fn program(&self) -> String;

    /// Run to completion with output discarded and report whether it exited
    /// with status zero. A program that cannot be started counts as failed.
    fn succeeds(&self, invocation: &Invocation) -> bool;

    /// Run to completion and capture standard output.
    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput, RunnerError>;

    /// Start the process and return without waiting for it to exit.
    fn launch(&self, invocation: &Invocation) -> Result<(), RunnerError>;
}
