//! Open command handler.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::commands::WindowArgs;

/// Execute the open command.
///
/// A single path opens as-is (file or folder); several paths are passed
/// together so the editor opens them in one window.
pub fn execute(ctx: &CliContext, paths: Vec<PathBuf>, window: WindowArgs) -> Result<()> {
    debug!(count = paths.len(), "Opening paths");
    ctx.editor().open(paths, window.into())?;
    Ok(())
}
