//! `std::process` implementation of the command runner port.

use std::process::{Child, Command, Stdio};

use codectl_core::{CapturedOutput, CommandRunner, EditorConfig, Invocation, RunnerError};
use tracing::{debug, warn};

use crate::platform::suppress_console;
use crate::resolve::resolve_editor;

/// Runs the editor as a child process of the current process.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use codectl_core::Editor;
/// use codectl_runtime::SystemCommandRunner;
///
/// let editor = Editor::new(Arc::new(SystemCommandRunner::new("code")));
/// editor.open("README.md", Default::default())?;
/// ```
#[derive(Debug, Clone)]
pub struct SystemCommandRunner {
    program: String,
}

impl SystemCommandRunner {
    /// Create a runner for the given program name or path.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Create a runner for the configured editor.
    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(config.binary.clone())
    }

    fn command(&self, invocation: &Invocation) -> Result<Command, RunnerError> {
        let binary = resolve_editor(&self.program)?;
        let mut cmd = Command::new(binary);
        cmd.args(invocation.as_args()).stdin(Stdio::null());
        Ok(cmd)
    }

    fn spawn_error(&self, source: std::io::Error) -> RunnerError {
        RunnerError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn program(&self) -> String {
        self.program.clone()
    }

    fn succeeds(&self, invocation: &Invocation) -> bool {
        let mut cmd = match self.command(invocation) {
            Ok(cmd) => cmd,
            Err(e) => {
                debug!(error = %e, "Editor not resolvable");
                return false;
            }
        };
        suppress_console(&mut cmd);
        cmd.stdout(Stdio::null()).stderr(Stdio::null());

        match cmd.status() {
            Ok(status) => status.success(),
            Err(e) => {
                debug!(program = %self.program, error = %e, "Editor probe failed to start");
                false
            }
        }
    }

    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput, RunnerError> {
        let mut cmd = self.command(invocation)?;
        suppress_console(&mut cmd);

        let output = cmd.output().map_err(|e| self.spawn_error(e))?;
        debug!(
            program = %self.program,
            args = %invocation,
            status = ?output.status.code(),
            bytes = output.stdout.len(),
            "Captured editor output"
        );
        Ok(CapturedOutput {
            success: output.status.success(),
            stdout: output.stdout,
        })
    }

    /// Start the editor with its stdout sent to our stderr, so callers
    /// printing machine-readable output on stdout are not interleaved with
    /// editor chatter.
    fn launch(&self, invocation: &Invocation) -> Result<(), RunnerError> {
        let child = self
            .command(invocation)?
            .stdout(Stdio::from(std::io::stderr()))
            .spawn()
            .map_err(|e| self.spawn_error(e))?;
        debug!(program = %self.program, pid = child.id(), "Editor launched");
        reap_in_background(child);
        Ok(())
    }
}

/// Wait for a launched child off the caller's thread so it does not linger
/// as a zombie in long-running hosts. The caller never sees its status.
fn reap_in_background(mut child: Child) {
    let spawned = std::thread::Builder::new()
        .name("codectl-reaper".to_string())
        .spawn(move || {
            if let Err(e) = child.wait() {
                debug!(error = %e, "Failed to reap editor process");
            }
        });
    if let Err(e) = spawned {
        warn!(error = %e, "Could not start reaper thread; editor process left unreaped");
    }
}
