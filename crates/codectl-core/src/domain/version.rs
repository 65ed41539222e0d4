//! Parsed output of the version query.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::ports::EditorError;

/// Installed editor version: release, source revision, architecture.
///
/// Only obtainable by parsing `-v` output, e.g.
///
/// ```text
/// 1.85.0
/// 8b3775030ed1a69b13e4f4c628c612102e30a681
/// x64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EditorVersion {
    version: String,
    revision: String,
    architecture: String,
}

impl EditorVersion {
    /// Release identifier, e.g. `1.85.0`.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Source-control revision the release was built from.
    #[must_use]
    pub fn revision(&self) -> &str {
        &self.revision
    }

    /// Architecture label, e.g. `x64` or `arm64`.
    #[must_use]
    pub fn architecture(&self) -> &str {
        &self.architecture
    }
}

impl fmt::Display for EditorVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}

impl FromStr for EditorVersion {
    type Err = EditorError;

    /// Lines 0, 1 and 2 map to version, revision and architecture.
    /// Anything after the third line is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = crate::parse::output_lines(s);
        match lines.as_slice() {
            [version, revision, architecture, ..] => Ok(Self {
                version: (*version).to_string(),
                revision: (*revision).to_string(),
                architecture: (*architecture).to_string(),
            }),
            _ => Err(EditorError::malformed(
                "-v",
                format!("expected 3 lines, got {}", lines.len()),
            )),
        }
    }
}
