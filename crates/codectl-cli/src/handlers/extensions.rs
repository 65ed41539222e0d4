//! Extension command handlers.

use anyhow::Result;
use codectl_core::ExtensionCategory;

use crate::bootstrap::CliContext;
use crate::extension_commands::ExtensionCommand;
use crate::presentation::extension_table;

/// Execute an extension subcommand.
pub fn execute(ctx: &CliContext, command: ExtensionCommand) -> Result<()> {
    match command {
        ExtensionCommand::List { category, json } => list(ctx, category, json),
        ExtensionCommand::Install { extension, force } => {
            ctx.editor().install_extension(&extension, force)?;
            println!("Installing {extension}...");
            Ok(())
        }
        ExtensionCommand::Uninstall { extension, force } => {
            ctx.editor().uninstall_extension(&extension, force)?;
            println!("Uninstalling {extension}...");
            Ok(())
        }
    }
}

fn list(ctx: &CliContext, category: Option<ExtensionCategory>, json: bool) -> Result<()> {
    let extensions = ctx.editor().get_installed_extensions(category)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&extensions)?);
        return Ok(());
    }

    if extensions.is_empty() {
        match category {
            Some(category) => println!("No extensions installed in category '{category}'."),
            None => println!("No extensions installed."),
        }
        return Ok(());
    }

    for line in extension_table(&extensions) {
        println!("{line}");
    }
    println!("\n{} extension(s)", extensions.len());
    Ok(())
}
