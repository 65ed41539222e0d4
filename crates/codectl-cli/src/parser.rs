//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use codectl_core::EDITOR_ENV_VAR;

use crate::commands::Commands;

/// Drive a code editor through its command-line interface.
#[derive(Parser)]
#[command(name = "codectl")]
#[command(about = "Open files, diffs and extensions in a code editor from the command line")]
#[command(version)]
pub struct Cli {
    /// Editor binary name or path (defaults to `code`)
    #[arg(long, global = true, env = EDITOR_ENV_VAR, value_name = "BINARY")]
    pub editor: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension_commands::ExtensionCommand;
    use clap::CommandFactory;
    use codectl_core::{ExtensionCategory, Locale};
    use std::path::PathBuf;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from(["codectl", "--verbose", "--editor", "codium", "status"]);
        assert!(cli.verbose);
        assert_eq!(cli.editor.as_deref(), Some("codium"));
        assert!(matches!(cli.command, Some(Commands::Status)));
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["codectl", "version", "-v", "--editor", "/opt/code"]);
        assert!(cli.verbose);
        assert_eq!(cli.editor.as_deref(), Some("/opt/code"));
    }

    #[test]
    fn test_goto_with_window_flags() {
        let cli = Cli::parse_from([
            "codectl", "goto", "src/main.rs", "68", "12", "-r", "--locale", "fr",
        ]);
        let Some(Commands::Goto {
            path,
            line,
            character,
            window,
        }) = cli.command
        else {
            panic!("expected goto");
        };
        assert_eq!(path, PathBuf::from("src/main.rs"));
        assert_eq!(line, 68);
        assert_eq!(character, Some(12));
        assert!(window.reuse_window);
        assert!(!window.new_window);
        assert_eq!(window.locale, Some(Locale::Fr));
    }

    #[test]
    fn test_goto_rejects_non_numeric_line() {
        assert!(Cli::try_parse_from(["codectl", "goto", "main.rs", "first"]).is_err());
    }

    #[test]
    fn test_open_requires_a_path() {
        assert!(Cli::try_parse_from(["codectl", "open"]).is_err());
    }

    #[test]
    fn test_unknown_locale_rejected() {
        assert!(Cli::try_parse_from(["codectl", "open", "a.txt", "--locale", "xx"]).is_err());
    }

    #[test]
    fn test_extension_list_category() {
        let cli = Cli::parse_from([
            "codectl",
            "extensions",
            "list",
            "--category",
            "programming-languages",
            "--json",
        ]);
        let Some(Commands::Extensions(ExtensionCommand::List { category, json })) = cli.command
        else {
            panic!("expected extensions list");
        };
        assert_eq!(category, Some(ExtensionCategory::ProgrammingLanguages));
        assert!(json);
    }

    #[test]
    fn test_extension_install_force() {
        let cli = Cli::parse_from([
            "codectl",
            "extensions",
            "install",
            "ms-python.python@2024.1.0",
            "--force",
        ]);
        let Some(Commands::Extensions(ExtensionCommand::Install { extension, force })) =
            cli.command
        else {
            panic!("expected extensions install");
        };
        assert_eq!(extension, "ms-python.python@2024.1.0");
        assert!(force);
    }

    #[test]
    fn test_batch_defaults_to_stdin() {
        let cli = Cli::parse_from(["codectl", "batch"]);
        let Some(Commands::Batch { file }) = cli.command else {
            panic!("expected batch");
        };
        assert_eq!(file, PathBuf::from("-"));
    }
}
