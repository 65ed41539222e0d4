//! Editor selection.
//!
//! The editor binary is the only piece of configuration codectl has. The CLI
//! reads it from `--editor` or [`EDITOR_ENV_VAR`] at the composition root
//! and hands it to the runner.

use serde::{Deserialize, Serialize};

/// Binary invoked when nothing else is configured.
pub const DEFAULT_EDITOR_BINARY: &str = "code";

/// Environment variable that overrides the editor binary.
pub const EDITOR_ENV_VAR: &str = "CODECTL_EDITOR";

/// Which editor executable to drive.
///
/// `binary` is either a bare command name looked up on `PATH`
/// (`code`, `code-insiders`, `codium`) or an explicit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    pub binary: String,
}

impl EditorConfig {
    /// Create a config for the given binary.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Replace the binary, ignoring blank overrides.
    #[must_use]
    pub fn with_binary(mut self, binary: Option<&str>) -> Self {
        if let Some(binary) = binary.map(str::trim).filter(|b| !b.is_empty()) {
            self.binary = binary.to_string();
        }
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EDITOR_BINARY)
    }
}
