//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the system runner is wired into
//! the core. Handlers receive a `CliContext` and never construct runners
//! themselves.

use std::sync::Arc;

use codectl_core::{CommandRunner, Editor, EditorConfig};
use codectl_runtime::SystemCommandRunner;
use tracing::debug;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Which editor binary to drive.
    pub editor: EditorConfig,
}

impl CliConfig {
    /// Config from parsed arguments.
    ///
    /// clap has already folded `CODECTL_EDITOR` into `--editor`; a blank
    /// value falls back to the default binary.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            editor: EditorConfig::default().with_binary(cli.editor.as_deref()),
        }
    }
}

/// Composed context handed to command handlers.
pub struct CliContext {
    /// The editor facade.
    pub editor: Editor,
}

impl CliContext {
    /// Context over an arbitrary runner.
    pub fn with_runner(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            editor: Editor::new(runner),
        }
    }

    /// Access the editor facade.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Name of the editor program, for messages.
    pub fn program(&self) -> String {
        self.editor.runner().program()
    }
}

/// Load a `.env` file from the working directory or its parents, if any.
///
/// Must run before argument parsing so `CODECTL_EDITOR` from the file is
/// visible to clap. Variables already set in the environment win.
pub fn load_dotenv() {
    // A missing file is the common case.
    dotenvy::dotenv().ok();
}

/// Bootstrap the CLI application.
pub fn bootstrap(config: CliConfig) -> CliContext {
    debug!(editor = %config.editor.binary, "Bootstrapping CLI");
    let runner: Arc<dyn CommandRunner> = Arc::new(SystemCommandRunner::from_config(&config.editor));
    CliContext::with_runner(runner)
}
