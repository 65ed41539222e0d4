//! Fire-and-forget launches.
//!
//! Arguments are validated before the presence guard runs, so a bad call
//! never spawns a process. The launched editor outlives the call and its
//! exit status is not observed.

use std::path::{Path, PathBuf};

use super::Editor;
use crate::domain::{CommandOptions, OpenTarget};
use crate::invocation::Invocation;
use crate::ports::EditorError;

/// `folder` followed by each relative file joined onto it.
pub fn folder_paths<I, P>(folder: &Path, relative_files: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    std::iter::once(folder.to_path_buf())
        .chain(relative_files.into_iter().map(|file| folder.join(file)))
        .collect()
}

impl Editor {
    /// Open one file or folder, or several files, in the editor.
    ///
    /// Files that do not exist yet are created by the editor on save;
    /// folders must exist.
    pub fn open(
        &self,
        target: impl Into<OpenTarget>,
        options: CommandOptions,
    ) -> Result<(), EditorError> {
        let paths = target.into().into_paths()?;
        self.launch(&Invocation::open(&paths, &options))
    }

    /// Open a diff view between two files.
    pub fn open_difference(
        &self,
        first: impl AsRef<Path>,
        second: impl AsRef<Path>,
        options: CommandOptions,
    ) -> Result<(), EditorError> {
        let invocation = Invocation::diff(first.as_ref(), second.as_ref(), &options);
        self.launch(&invocation)
    }

    /// Open `path` with the caret at `line` and optionally `character`.
    ///
    /// Both are 1-based. Out-of-range positions are left to the editor.
    pub fn goto_file(
        &self,
        path: impl AsRef<Path>,
        line: u32,
        character: Option<u32>,
        options: CommandOptions,
    ) -> Result<(), EditorError> {
        self.launch(&Invocation::goto(path.as_ref(), line, character, &options))
    }

    /// Open a new, empty window.
    ///
    /// The new-window flag is always set, whatever `options` says.
    pub fn open_empty_session(&self, options: CommandOptions) -> Result<(), EditorError> {
        self.open(PathBuf::new(), options.with_new_window(true))
    }

    /// Open a folder plus files relative to it.
    pub fn open_folder<I, P>(
        &self,
        folder: impl AsRef<Path>,
        relative_files: I,
        options: CommandOptions,
    ) -> Result<(), EditorError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.open(folder_paths(folder.as_ref(), relative_files), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Locale;
    use crate::ports::{MockCommandRunner, RunnerError};
    use std::sync::Arc;

    /// Present editor that expects exactly one launch with `expected` args.
    fn expect_launch(expected: &'static str) -> Editor {
        let mut runner = MockCommandRunner::new();
        runner.expect_program().return_const("code".to_string());
        runner.expect_succeeds().return_const(true);
        runner
            .expect_launch()
            .withf(move |inv| inv.to_string() == expected)
            .times(1)
            .returning(|_| Ok(()));
        Editor::new(Arc::new(runner))
    }

    /// Runner with no expectations: any call panics.
    fn untouched() -> Editor {
        Editor::new(Arc::new(MockCommandRunner::new()))
    }

    #[test]
    fn test_open_single_path() {
        expect_launch("main.rs")
            .open("main.rs", CommandOptions::new())
            .unwrap();
    }

    #[test]
    fn test_open_many_paths_with_flags() {
        let options = CommandOptions::new()
            .with_reuse_window(true)
            .with_locale(Locale::Ja);
        expect_launch("-r --locale ja a.txt b.txt")
            .open(vec!["a.txt", "b.txt"], options)
            .unwrap();
    }

    #[test]
    fn test_open_empty_sequence_spawns_nothing() {
        let err = untouched()
            .open(Vec::<PathBuf>::new(), CommandOptions::new())
            .unwrap_err();
        assert!(matches!(err, EditorError::InvalidArgumentType { .. }));
    }

    #[test]
    fn test_open_difference() {
        expect_launch("-d -n left.txt right.txt")
            .open_difference(
                "left.txt",
                "right.txt",
                CommandOptions::new().with_new_window(true),
            )
            .unwrap();
    }

    #[test]
    fn test_open_difference_passes_empty_operand() {
        let mut runner = MockCommandRunner::new();
        runner.expect_program().return_const("code".to_string());
        runner.expect_succeeds().return_const(true);
        runner
            .expect_launch()
            .withf(|inv| inv.as_args().len() == 3 && inv.as_args()[1].is_empty())
            .times(1)
            .returning(|_| Ok(()));
        Editor::new(Arc::new(runner))
            .open_difference("", "b.txt", CommandOptions::new())
            .unwrap();
    }

    #[test]
    fn test_goto_file_line_and_character() {
        expect_launch("-g path:68:12")
            .goto_file("path", 68, Some(12), CommandOptions::new())
            .unwrap();
    }

    #[test]
    fn test_empty_session_forces_new_window() {
        expect_launch("-n --locale ko")
            .open_empty_session(CommandOptions::new().with_locale(Locale::Ko))
            .unwrap();
    }

    #[test]
    fn test_folder_paths_join() {
        let paths = folder_paths(Path::new("proj"), ["a.txt", "b.txt"]);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("proj"),
                Path::new("proj").join("a.txt"),
                Path::new("proj").join("b.txt"),
            ]
        );
    }

    #[test]
    #[cfg(unix)]
    fn test_open_folder_delegates_to_open() {
        expect_launch("proj proj/a.txt proj/b.txt")
            .open_folder("proj", ["a.txt", "b.txt"], CommandOptions::new())
            .unwrap();
    }

    #[test]
    fn test_open_folder_without_files() {
        expect_launch("proj")
            .open_folder("proj", Vec::<PathBuf>::new(), CommandOptions::new())
            .unwrap();
    }

    #[test]
    fn test_absent_editor_is_not_launched() {
        let mut runner = MockCommandRunner::new();
        runner.expect_program().return_const("code".to_string());
        runner.expect_succeeds().return_const(false);
        runner.expect_launch().never();
        let editor = Editor::new(Arc::new(runner));

        let err = editor.open("main.rs", CommandOptions::new()).unwrap_err();
        assert!(matches!(err, EditorError::EditorNotFound { .. }));
    }

    #[test]
    fn test_spawn_failure_after_presence_is_reported() {
        let mut runner = MockCommandRunner::new();
        runner.expect_program().return_const("code".to_string());
        runner.expect_succeeds().return_const(true);
        runner.expect_launch().returning(|_| {
            Err(RunnerError::Resolve {
                program: "code".to_string(),
                reason: "uninstalled".to_string(),
            })
        });
        let editor = Editor::new(Arc::new(runner));

        let err = editor.open("main.rs", CommandOptions::new()).unwrap_err();
        assert!(matches!(err, EditorError::Process(_)));
    }
}
