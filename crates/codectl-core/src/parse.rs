//! Parsers for captured editor output.
//!
//! Output is newline-delimited text. A trailing empty line is discarded and
//! `\r` is stripped so Windows output parses the same way.

use crate::domain::Extension;
use crate::ports::EditorError;

/// Command name used in `MalformedOutput` errors for the listing.
const LIST_COMMAND: &str = "--list-extensions";

/// Split output into lines, dropping the trailing empty one.
///
/// Interior empty lines are kept so line positions stay meaningful.
#[must_use]
pub fn output_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Parse `--list-extensions --show-versions` output.
///
/// Blank lines are skipped. The first line that is not
/// `publisher.name@version` fails the whole listing.
pub fn parse_extension_listing(text: &str) -> Result<Vec<Extension>, EditorError> {
    output_lines(text)
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            Extension::from_listing_line(line).ok_or_else(|| {
                EditorError::malformed(
                    LIST_COMMAND,
                    format!("line {}: `{}` is not publisher.name@version", index + 1, line.trim()),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_lines_drops_trailing_empty() {
        assert_eq!(output_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(output_lines("a\n\nb"), vec!["a", "", "b"]);
        assert!(output_lines("").is_empty());
    }

    #[test]
    fn test_single_extension() {
        let extensions = parse_extension_listing("ms-python.python@2024.1.0\n").unwrap();
        assert_eq!(
            extensions,
            vec![Extension::new("ms-python", "python", "2024.1.0")]
        );
    }

    #[test]
    fn test_listing_keeps_tool_order() {
        let text = "rust-lang.rust-analyzer@0.3.1\r\nesbenp.prettier-vscode@10.1.0\r\n\r\nms-python.python@2024.1.0\r\n";
        let ids: Vec<String> = parse_extension_listing(text)
            .unwrap()
            .iter()
            .map(Extension::full_id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "rust-lang.rust-analyzer@0.3.1",
                "esbenp.prettier-vscode@10.1.0",
                "ms-python.python@2024.1.0",
            ]
        );
    }

    #[test]
    fn test_empty_listing() {
        assert!(parse_extension_listing("").unwrap().is_empty());
        assert!(parse_extension_listing("\n").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_aborts() {
        let err = parse_extension_listing("ms-python.python@2024.1.0\nnot an extension\n")
            .unwrap_err();
        match err {
            EditorError::MalformedOutput { command, reason } => {
                assert_eq!(command, "--list-extensions");
                assert!(reason.starts_with("line 2:"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
