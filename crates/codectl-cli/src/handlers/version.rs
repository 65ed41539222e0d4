//! Version command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::version_lines;

/// Execute the version command.
///
/// Prints version, commit and architecture, or a JSON object with
/// `--json`.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let version = ctx.editor().get_version()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&version)?);
    } else {
        for line in version_lines(&version) {
            println!("{line}");
        }
    }
    Ok(())
}
