//! Editor binary resolution.
//!
//! Resolution runs on every call: the editor may be installed, removed or
//! moved between calls, so nothing is cached.

use codectl_core::RunnerError;
use std::path::PathBuf;
use tracing::debug;

/// Resolve `program` to an executable path.
///
/// Bare names are searched on `PATH` (honouring `PATHEXT` on Windows, which
/// is how `code` resolves to `code.cmd`). Names containing a path separator
/// are checked in place.
///
/// # Errors
///
/// Returns [`RunnerError::Resolve`] when no executable matches.
pub fn resolve_editor(program: &str) -> Result<PathBuf, RunnerError> {
    if program.trim().is_empty() {
        return Err(RunnerError::Resolve {
            program: program.to_string(),
            reason: "empty program name".to_string(),
        });
    }

    let path = which::which(program).map_err(|e| RunnerError::Resolve {
        program: program.to_string(),
        reason: e.to_string(),
    })?;
    debug!(program, path = %path.display(), "Resolved editor binary");
    Ok(path)
}
