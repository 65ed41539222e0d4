//! Loosely typed requests.
//!
//! Scripts and batch files describe calls as JSON objects such as
//!
//! ```json
//! {"action": "goto_file", "path": "src/main.rs", "line": 68, "character": 12}
//! ```
//!
//! Arguments arrive as untyped JSON values. They are checked here and
//! turned into typed [`Editor`] calls; a value of the wrong kind fails with
//! `InvalidArgumentType` naming what was expected and what was given.
//! A path is a JSON string; a line or character is a JSON integer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::domain::{CommandOptions, EditorVersion, Extension, ExtensionCategory, OpenTarget};
use crate::ports::EditorError;
use crate::services::Editor;

/// One editor call described as data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum EditorRequest {
    IsPresent,
    GetVersion,
    Open {
        paths: Value,
        #[serde(default)]
        options: CommandOptions,
    },
    OpenDifference {
        first: Value,
        second: Value,
        #[serde(default)]
        options: CommandOptions,
    },
    GotoFile {
        path: Value,
        line: Value,
        #[serde(default)]
        character: Value,
        #[serde(default)]
        options: CommandOptions,
    },
    OpenEmptySession {
        #[serde(default)]
        options: CommandOptions,
    },
    OpenFolder {
        folder: Value,
        #[serde(default)]
        files: Value,
        #[serde(default)]
        options: CommandOptions,
    },
    GetInstalledExtensions {
        #[serde(default)]
        category: Option<ExtensionCategory>,
    },
    InstallExtension {
        extension: Value,
        #[serde(default)]
        force: bool,
    },
    UninstallExtension {
        extension: Value,
        #[serde(default)]
        force: bool,
    },
}

/// Result of an executed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// A fire-and-forget call was issued.
    Launched,
    Presence { present: bool },
    Version(EditorVersion),
    Extensions { extensions: Vec<Extension> },
}

impl EditorRequest {
    /// Short name of the action, as written in the `action` field.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::IsPresent => "is_present",
            Self::GetVersion => "get_version",
            Self::Open { .. } => "open",
            Self::OpenDifference { .. } => "open_difference",
            Self::GotoFile { .. } => "goto_file",
            Self::OpenEmptySession { .. } => "open_empty_session",
            Self::OpenFolder { .. } => "open_folder",
            Self::GetInstalledExtensions { .. } => "get_installed_extensions",
            Self::InstallExtension { .. } => "install_extension",
            Self::UninstallExtension { .. } => "uninstall_extension",
        }
    }

    /// Validate the arguments and run the call against `editor`.
    pub fn execute(&self, editor: &Editor) -> Result<Outcome, EditorError> {
        match self {
            Self::IsPresent => Ok(Outcome::Presence {
                present: editor.is_present(),
            }),
            Self::GetVersion => editor.get_version().map(Outcome::Version),
            Self::Open { paths, options } => {
                editor.open(open_target(paths)?, *options)?;
                Ok(Outcome::Launched)
            }
            Self::OpenDifference {
                first,
                second,
                options,
            } => {
                let first = path_arg("first", first)?;
                let second = path_arg("second", second)?;
                editor.open_difference(first, second, *options)?;
                Ok(Outcome::Launched)
            }
            Self::GotoFile {
                path,
                line,
                character,
                options,
            } => {
                let path = path_arg("path", path)?;
                let line = integer_arg("line", line)?;
                let character = match character {
                    Value::Null => None,
                    value => Some(integer_arg("character", value)?),
                };
                editor.goto_file(path, line, character, *options)?;
                Ok(Outcome::Launched)
            }
            Self::OpenEmptySession { options } => {
                editor.open_empty_session(*options)?;
                Ok(Outcome::Launched)
            }
            Self::OpenFolder {
                folder,
                files,
                options,
            } => {
                let folder = path_arg("folder", folder)?;
                let files = match files {
                    Value::Null => Vec::new(),
                    Value::Array(items) => path_list("files", items)?,
                    other => {
                        return Err(EditorError::invalid_argument(
                            "files",
                            "sequence of paths",
                            kind_of(other),
                        ));
                    }
                };
                editor.open_folder(folder, files, *options)?;
                Ok(Outcome::Launched)
            }
            Self::GetInstalledExtensions { category } => editor
                .get_installed_extensions(*category)
                .map(|extensions| Outcome::Extensions { extensions }),
            Self::InstallExtension { extension, force } => {
                editor.install_extension(string_arg("extension", extension)?, *force)?;
                Ok(Outcome::Launched)
            }
            Self::UninstallExtension { extension, force } => {
                editor.uninstall_extension(string_arg("extension", extension)?, *force)?;
                Ok(Outcome::Launched)
            }
        }
    }
}

/// JSON kind of a value, used as the "actual type" in errors.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(n) if n.is_i64() && n.as_i64().is_some_and(|v| v < 0) => "negative integer",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "object",
    }
}

fn string_arg<'a>(argument: &str, value: &'a Value) -> Result<&'a str, EditorError> {
    value
        .as_str()
        .ok_or_else(|| EditorError::invalid_argument(argument, "string", kind_of(value)))
}

fn path_arg(argument: &str, value: &Value) -> Result<PathBuf, EditorError> {
    value
        .as_str()
        .map(PathBuf::from)
        .ok_or_else(|| EditorError::invalid_argument(argument, "path", kind_of(value)))
}

fn path_list(argument: &str, items: &[Value]) -> Result<Vec<PathBuf>, EditorError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str().map(PathBuf::from).ok_or_else(|| {
                EditorError::invalid_argument(
                    format!("{argument}[{index}]"),
                    "path",
                    kind_of(item),
                )
            })
        })
        .collect()
}

fn integer_arg(argument: &str, value: &Value) -> Result<u32, EditorError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| {
            let actual = match value {
                Value::Number(n) if n.as_u64().is_some() => "integer out of range",
                other => kind_of(other),
            };
            EditorError::invalid_argument(argument, "integer", actual)
        })
}

fn open_target(paths: &Value) -> Result<OpenTarget, EditorError> {
    match paths {
        Value::String(path) => Ok(OpenTarget::Single(PathBuf::from(path))),
        Value::Array(items) => path_list("paths", items).map(OpenTarget::Many),
        other => Err(EditorError::invalid_argument(
            "paths",
            "path or sequence of paths",
            kind_of(other),
        )),
    }
}
