//! Editor facade construction and the presence guard.

use std::sync::Arc;
use tracing::debug;

use crate::invocation::Invocation;
use crate::ports::{CommandRunner, EditorError};

/// Typed access to the editor's command-line interface.
///
/// Stateless apart from the runner: every call re-checks presence, since the
/// editor can be installed or removed between calls.
#[derive(Clone)]
pub struct Editor {
    runner: Arc<dyn CommandRunner>,
}

impl Editor {
    /// Create an editor facade over the given runner.
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Access the underlying runner.
    pub fn runner(&self) -> &Arc<dyn CommandRunner> {
        &self.runner
    }

    /// Whether the editor answers `-v` with exit status zero.
    pub fn is_present(&self) -> bool {
        let present = self.runner.succeeds(&Invocation::version_query());
        debug!(program = %self.runner.program(), present, "Presence check");
        present
    }

    /// Run `op` only if the editor is present.
    ///
    /// This is the single absence policy: every public entry point is
    /// wrapped in it and absence is always `EditorNotFound`.
    pub(crate) fn guarded<T>(
        &self,
        op: impl FnOnce(&dyn CommandRunner) -> Result<T, EditorError>,
    ) -> Result<T, EditorError> {
        if !self.is_present() {
            return Err(EditorError::EditorNotFound {
                binary: self.runner.program(),
            });
        }
        op(self.runner.as_ref())
    }

    /// Guarded fire-and-forget launch.
    pub(crate) fn launch(&self, invocation: &Invocation) -> Result<(), EditorError> {
        self.guarded(|runner| spawn_detached(runner, invocation))
    }
}

/// Start the editor without waiting. Callers must already hold the guard.
pub(crate) fn spawn_detached(
    runner: &dyn CommandRunner,
    invocation: &Invocation,
) -> Result<(), EditorError> {
    debug!(program = %runner.program(), args = %invocation, "Launching editor");
    runner.launch(invocation).map_err(EditorError::from)
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("program", &self.runner.program())
            .finish()
    }
}
