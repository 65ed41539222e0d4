//! Text rendering of version and extension query results.

use codectl_core::{EditorVersion, Extension};

use super::tables::{separator, truncate_string};

const PUBLISHER_WIDTH: usize = 24;
const NAME_WIDTH: usize = 32;

/// `Version`, `Commit` and `Architecture` rows for the `version` command.
pub fn version_lines(version: &EditorVersion) -> Vec<String> {
    vec![
        format!("Version:      {}", version.version()),
        format!("Commit:       {}", version.revision()),
        format!("Architecture: {}", version.architecture()),
    ]
}

/// Header, separator and one row per extension.
pub fn extension_table(extensions: &[Extension]) -> Vec<String> {
    let mut lines = Vec::with_capacity(extensions.len() + 2);
    lines.push(format!(
        "{:<pw$} {:<nw$} Version",
        "Publisher",
        "Name",
        pw = PUBLISHER_WIDTH,
        nw = NAME_WIDTH
    ));
    lines.push(separator(PUBLISHER_WIDTH + NAME_WIDTH + 12));
    lines.extend(extensions.iter().map(|ext| {
        format!(
            "{:<pw$} {:<nw$} {}",
            truncate_string(ext.publisher(), PUBLISHER_WIDTH),
            truncate_string(ext.name(), NAME_WIDTH),
            ext.version(),
            pw = PUBLISHER_WIDTH,
            nw = NAME_WIDTH
        )
    }));
    lines
}
