//! New-window command handler.

use anyhow::Result;
use codectl_core::{CommandOptions, Locale};

use crate::bootstrap::CliContext;

/// Execute the new-window command.
pub fn execute(ctx: &CliContext, locale: Option<Locale>) -> Result<()> {
    let options = match locale {
        Some(locale) => CommandOptions::new().with_locale(locale),
        None => CommandOptions::new(),
    };
    ctx.editor().open_empty_session(options)?;
    Ok(())
}
