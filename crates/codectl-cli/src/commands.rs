//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use codectl_core::{CommandOptions, Locale};

use crate::extension_commands::ExtensionCommand;

/// Available commands.
///
/// Launch commands (`open`, `diff`, `goto`, `folder`, `new-window`) return
/// as soon as the editor has been started.
#[derive(Subcommand)]
pub enum Commands {
    /// Check whether the editor is installed and answering
    Status,

    /// Show the editor's version, commit and architecture
    Version {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open files or folders
    Open {
        /// Files or folders to open
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Open a diff view between two files
    Diff {
        /// Left-hand file
        first: PathBuf,
        /// Right-hand file
        second: PathBuf,
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Open a file with the caret at a line and optional character
    Goto {
        /// File to open
        path: PathBuf,
        /// 1-based line
        line: u32,
        /// 1-based character within the line
        character: Option<u32>,
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Open a folder along with files inside it
    Folder {
        /// Folder to open
        folder: PathBuf,
        /// Files relative to the folder
        files: Vec<PathBuf>,
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Open a new empty window
    NewWindow {
        /// Display language
        #[arg(long)]
        locale: Option<Locale>,
    },

    /// Manage editor extensions
    #[command(subcommand)]
    Extensions(ExtensionCommand),

    /// Run JSON-described requests, one outcome per output line
    Batch {
        /// JSON file holding one request or an array of them (`-` for stdin)
        #[arg(default_value = "-")]
        file: PathBuf,
    },
}

/// Window flags shared by every launch command.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct WindowArgs {
    /// Force a new window
    #[arg(short = 'n', long)]
    pub new_window: bool,

    /// Reuse the last active window
    #[arg(short = 'r', long)]
    pub reuse_window: bool,

    /// Display language
    #[arg(long)]
    pub locale: Option<Locale>,
}

impl From<WindowArgs> for CommandOptions {
    fn from(args: WindowArgs) -> Self {
        let options = Self::new()
            .with_new_window(args.new_window)
            .with_reuse_window(args.reuse_window);
        match args.locale {
            Some(locale) => options.with_locale(locale),
            None => options,
        }
    }
}
