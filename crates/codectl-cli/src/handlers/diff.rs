//! Diff command handler.

use std::path::Path;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::WindowArgs;

/// Execute the diff command.
pub fn execute(ctx: &CliContext, first: &Path, second: &Path, window: WindowArgs) -> Result<()> {
    ctx.editor().open_difference(first, second, window.into())?;
    Ok(())
}
