//! Goto command handler.

use std::path::Path;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::WindowArgs;

/// Execute the goto command.
pub fn execute(
    ctx: &CliContext,
    path: &Path,
    line: u32,
    character: Option<u32>,
    window: WindowArgs,
) -> Result<()> {
    ctx.editor()
        .goto_file(path, line, character, window.into())?;
    Ok(())
}
