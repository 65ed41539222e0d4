//! Capturing calls: the editor runs to completion and its stdout is parsed.

use tracing::debug;

use super::Editor;
use crate::domain::{EditorVersion, Extension, ExtensionCategory};
use crate::invocation::Invocation;
use crate::parse::parse_extension_listing;
use crate::ports::EditorError;

impl Editor {
    /// Installed editor version, revision and architecture.
    pub fn get_version(&self) -> Result<EditorVersion, EditorError> {
        self.guarded(|runner| {
            let invocation = Invocation::version_query();
            let output = runner.capture(&invocation)?;
            if !output.success {
                return Err(EditorError::EditorNotFound {
                    binary: runner.program(),
                });
            }
            output.stdout_text().parse()
        })
    }

    /// Installed extensions in the editor's listing order.
    ///
    /// `category` narrows the listing to one marketplace category.
    pub fn get_installed_extensions(
        &self,
        category: Option<ExtensionCategory>,
    ) -> Result<Vec<Extension>, EditorError> {
        self.guarded(|runner| {
            let invocation = Invocation::list_extensions(category);
            debug!(program = %runner.program(), args = %invocation, "Listing extensions");
            let output = runner.capture(&invocation)?;
            let extensions = parse_extension_listing(&output.stdout_text())?;
            debug!(count = extensions.len(), "Parsed extension listing");
            Ok(extensions)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CapturedOutput, MockCommandRunner};
    use std::sync::Arc;

    fn editor_capturing(expected_args: &'static str, output: CapturedOutput) -> Editor {
        let mut runner = MockCommandRunner::new();
        runner.expect_program().return_const("code".to_string());
        runner.expect_succeeds().return_const(true);
        runner
            .expect_capture()
            .withf(move |inv| inv.to_string() == expected_args)
            .times(1)
            .returning(move |_| Ok(output.clone()));
        Editor::new(Arc::new(runner))
    }

    #[test]
    fn test_get_version() {
        let editor = editor_capturing("-v", CapturedOutput::success("1.85.0\nabc123\nx64\n"));
        let version = editor.get_version().unwrap();
        assert_eq!(version, "1.85.0\nabc123\nx64".parse().unwrap());
        assert_eq!(version.revision(), "abc123");
    }

    #[test]
    fn test_get_version_short_output() {
        let editor = editor_capturing("-v", CapturedOutput::success("1.85.0\n"));
        assert!(matches!(
            editor.get_version().unwrap_err(),
            EditorError::MalformedOutput { .. }
        ));
    }

    #[test]
    fn test_get_version_failing_query_is_not_found() {
        let editor = editor_capturing("-v", CapturedOutput::failure());
        assert!(matches!(
            editor.get_version().unwrap_err(),
            EditorError::EditorNotFound { .. }
        ));
    }

    #[test]
    fn test_get_installed_extensions() {
        let editor = editor_capturing(
            "--list-extensions --show-versions",
            CapturedOutput::success("ms-python.python@2024.1.0\n"),
        );
        let extensions = editor.get_installed_extensions(None).unwrap();
        assert_eq!(
            extensions,
            vec![Extension::new("ms-python", "python", "2024.1.0")]
        );
    }

    #[test]
    fn test_get_installed_extensions_by_category() {
        let editor = editor_capturing(
            "--list-extensions --show-versions --category themes",
            CapturedOutput::success("dracula-theme.theme-dracula@2.24.3\n"),
        );
        let extensions = editor
            .get_installed_extensions(Some(ExtensionCategory::Themes))
            .unwrap();
        assert_eq!(extensions[0].name(), "theme-dracula");
    }

    #[test]
    fn test_get_installed_extensions_malformed() {
        let editor = editor_capturing(
            "--list-extensions --show-versions",
            CapturedOutput::success("garbage\n"),
        );
        assert!(matches!(
            editor.get_installed_extensions(None).unwrap_err(),
            EditorError::MalformedOutput { .. }
        ));
    }

    #[test]
    fn test_queries_require_presence() {
        let mut runner = MockCommandRunner::new();
        runner.expect_program().return_const("code".to_string());
        runner.expect_succeeds().return_const(false);
        runner.expect_capture().never();
        let editor = Editor::new(Arc::new(runner));

        assert!(matches!(
            editor.get_version().unwrap_err(),
            EditorError::EditorNotFound { .. }
        ));
        assert!(matches!(
            editor.get_installed_extensions(None).unwrap_err(),
            EditorError::EditorNotFound { .. }
        ));
    }
}
