//! Folder command handler.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::WindowArgs;

/// Execute the folder command.
///
/// `files` are relative to `folder`.
pub fn execute(
    ctx: &CliContext,
    folder: &Path,
    files: &[PathBuf],
    window: WindowArgs,
) -> Result<()> {
    ctx.editor().open_folder(folder, files, window.into())?;
    Ok(())
}
