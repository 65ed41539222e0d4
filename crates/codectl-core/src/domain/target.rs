//! What `open` accepts: one path or an ordered list of paths.

use std::path::{Path, PathBuf};

use crate::ports::EditorError;

/// Paths handed to the editor by `open`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    /// A single file or folder. May be empty (bare session).
    Single(PathBuf),
    /// Several files or folders, in the order given.
    Many(Vec<PathBuf>),
}

impl OpenTarget {
    /// Flatten into the argument list, rejecting an empty sequence.
    pub fn into_paths(self) -> Result<Vec<PathBuf>, EditorError> {
        match self {
            Self::Single(path) => Ok(vec![path]),
            Self::Many(paths) if paths.is_empty() => Err(EditorError::invalid_argument(
                "paths",
                "path or non-empty sequence of paths",
                "empty sequence",
            )),
            Self::Many(paths) => Ok(paths),
        }
    }
}

impl From<PathBuf> for OpenTarget {
    fn from(path: PathBuf) -> Self {
        Self::Single(path)
    }
}

impl From<&Path> for OpenTarget {
    fn from(path: &Path) -> Self {
        Self::Single(path.to_path_buf())
    }
}

impl From<&str> for OpenTarget {
    fn from(path: &str) -> Self {
        Self::Single(PathBuf::from(path))
    }
}

impl From<String> for OpenTarget {
    fn from(path: String) -> Self {
        Self::Single(PathBuf::from(path))
    }
}

impl From<Vec<PathBuf>> for OpenTarget {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::Many(paths)
    }
}

impl From<Vec<String>> for OpenTarget {
    fn from(paths: Vec<String>) -> Self {
        Self::Many(paths.into_iter().map(PathBuf::from).collect())
    }
}

impl From<Vec<&str>> for OpenTarget {
    fn from(paths: Vec<&str>) -> Self {
        Self::Many(paths.into_iter().map(PathBuf::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_path_flattens() {
        let paths = OpenTarget::from("notes.md").into_paths().unwrap();
        assert_eq!(paths, vec![PathBuf::from("notes.md")]);
    }

    #[test]
    fn test_many_keeps_order() {
        let paths = OpenTarget::from(vec!["b.txt", "a.txt"]).into_paths().unwrap();
        assert_eq!(paths, vec![PathBuf::from("b.txt"), PathBuf::from("a.txt")]);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let err = OpenTarget::Many(Vec::new()).into_paths().unwrap_err();
        assert!(matches!(
            err,
            EditorError::InvalidArgumentType { ref actual, .. } if actual == "empty sequence"
        ));
    }
}
