//! Status command handler.
//!
//! Reports whether the editor binary answers its version query.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the status command.
///
/// # Errors
///
/// Returns `CliError::Unavailable` when the editor is absent, so scripts
/// can test the exit status.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let program = ctx.program();
    if !ctx.editor().is_present() {
        return Err(CliError::Unavailable(format!("{program}: not found")).into());
    }
    println!("{program}: available");
    Ok(())
}
