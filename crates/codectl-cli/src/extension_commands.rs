//! Extension management subcommands.

use clap::Subcommand;
use codectl_core::ExtensionCategory;

/// Extension management commands.
#[derive(Subcommand)]
pub enum ExtensionCommand {
    /// List installed extensions with their versions
    List {
        /// Only extensions in this marketplace category (e.g. "themes", "scm-providers")
        #[arg(long)]
        category: Option<ExtensionCategory>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Install an extension by `publisher.name[@version]`
    Install {
        /// Extension identifier
        extension: String,
        /// Install even if the editor would prompt (e.g. downgrades)
        #[arg(short, long)]
        force: bool,
    },

    /// Uninstall an extension by `publisher.name[@version]`
    Uninstall {
        /// Extension identifier
        extension: String,
        /// Uninstall even if other extensions depend on it
        #[arg(short, long)]
        force: bool,
    },
}
