//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, initialises logging, bootstraps the
//! editor context and dispatches to a handler. Errors are printed once here
//! and mapped to sysexits-style exit codes.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use codectl_cli::bootstrap::load_dotenv;
use codectl_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers, logging};

fn main() -> ExitCode {
    // Before parsing, so `.env` can supply CODECTL_EDITOR
    load_dotenv();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = exit_code_for(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(config);

    match command {
        Commands::Status => handlers::status::execute(&ctx),
        Commands::Version { json } => handlers::version::execute(&ctx, json),
        Commands::Open { paths, window } => handlers::open::execute(&ctx, paths, window),
        Commands::Diff {
            first,
            second,
            window,
        } => handlers::diff::execute(&ctx, &first, &second, window),
        Commands::Goto {
            path,
            line,
            character,
            window,
        } => handlers::goto::execute(&ctx, &path, line, character, window),
        Commands::Folder {
            folder,
            files,
            window,
        } => handlers::folder::execute(&ctx, &folder, &files, window),
        Commands::NewWindow { locale } => handlers::new_window::execute(&ctx, locale),
        Commands::Extensions(command) => handlers::extensions::execute(&ctx, command),
        Commands::Batch { file } => handlers::batch::execute(&ctx, &file),
    }
}
