//! Extension install/uninstall.

use super::Editor;
use super::editor::spawn_detached;
use crate::domain::ExtensionToken;
use crate::invocation::Invocation;
use crate::ports::EditorError;

impl Editor {
    /// Install an extension given as `publisher.name[@version]`.
    ///
    /// `force` updates an already installed extension without prompting.
    pub fn install_extension(&self, token: &str, force: bool) -> Result<(), EditorError> {
        self.guarded(|runner| {
            let token = ExtensionToken::parse(token)?;
            spawn_detached(runner, &Invocation::install_extension(&token, force))
        })
    }

    /// Uninstall an extension given as `publisher.name[@version]`.
    pub fn uninstall_extension(&self, token: &str, force: bool) -> Result<(), EditorError> {
        self.guarded(|runner| {
            let token = ExtensionToken::parse(token)?;
            spawn_detached(runner, &Invocation::uninstall_extension(&token, force))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockCommandRunner;
    use std::sync::Arc;

    fn editor_expecting(expected: &'static str) -> Editor {
        let mut runner = MockCommandRunner::new();
        runner.expect_program().return_const("code".to_string());
        runner.expect_succeeds().times(1).return_const(true);
        runner
            .expect_launch()
            .withf(move |inv| inv.to_string() == expected)
            .times(1)
            .returning(|_| Ok(()));
        Editor::new(Arc::new(runner))
    }

    fn editor_rejecting() -> Editor {
        let mut runner = MockCommandRunner::new();
        runner.expect_program().return_const("code".to_string());
        runner.expect_succeeds().return_const(true);
        runner.expect_launch().never();
        Editor::new(Arc::new(runner))
    }

    #[test]
    fn test_install_short_token() {
        editor_expecting("--install-extension ms-python.python")
            .install_extension("ms-python.python", false)
            .unwrap();
    }

    #[test]
    fn test_install_pinned_token_with_force() {
        editor_expecting("--force --install-extension ms-python.python@2024.1.0")
            .install_extension("ms-python.python@2024.1.0", true)
            .unwrap();
    }

    #[test]
    fn test_uninstall() {
        editor_expecting("--uninstall-extension esbenp.prettier-vscode")
            .uninstall_extension("esbenp.prettier-vscode", false)
            .unwrap();
    }

    #[test]
    fn test_space_in_token_rejected() {
        let editor = editor_rejecting();
        assert!(matches!(
            editor.install_extension("publisher name", false).unwrap_err(),
            EditorError::InvalidExtensionToken(_)
        ));
        assert!(matches!(
            editor.uninstall_extension("publisher name", false).unwrap_err(),
            EditorError::InvalidExtensionToken(_)
        ));
    }

    #[test]
    fn test_presence_checked_before_token() {
        let mut runner = MockCommandRunner::new();
        runner.expect_program().return_const("code".to_string());
        runner.expect_succeeds().return_const(false);
        let editor = Editor::new(Arc::new(runner));

        assert!(matches!(
            editor.install_extension("publisher name", false).unwrap_err(),
            EditorError::EditorNotFound { .. }
        ));
    }
}
