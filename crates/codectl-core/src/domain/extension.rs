//! Extension types: installed records, marketplace categories and the tokens
//! accepted by install/uninstall.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::ports::EditorError;

/// `publisher.name[@version]` where version is dot-separated digit groups.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_-]+)\.([A-Za-z0-9_-]+)(?:@([0-9]+(?:\.[0-9]+)*))?$")
        .expect("extension token pattern is valid")
});

/// One line of `--list-extensions --show-versions`.
static LISTING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([a-z0-9_-]+)\.([a-z0-9_-]+)@(.+)$")
        .expect("extension listing pattern is valid")
});

/// Identity of an extension: the `(publisher, name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ExtensionId {
    pub publisher: String,
    pub name: String,
}

impl fmt::Display for ExtensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.publisher, self.name)
    }
}

/// An installed extension.
///
/// Displays as `publisher.name`; [`Extension::full_id`] adds the version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Extension {
    publisher: String,
    name: String,
    version: String,
}

impl Extension {
    /// Create an extension record.
    pub fn new(
        publisher: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            publisher: publisher.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parse one listing line (`publisher.name@version`).
    ///
    /// Returns `None` when the line does not match.
    #[must_use]
    pub fn from_listing_line(line: &str) -> Option<Self> {
        let caps = LISTING_PATTERN.captures(line.trim())?;
        Some(Self::new(&caps[1], &caps[2], &caps[3]))
    }

    #[must_use]
    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The `(publisher, name)` identity, without version.
    #[must_use]
    pub fn id(&self) -> ExtensionId {
        ExtensionId {
            publisher: self.publisher.clone(),
            name: self.name.clone(),
        }
    }

    /// `publisher.name@version`.
    #[must_use]
    pub fn full_id(&self) -> String {
        format!("{}.{}@{}", self.publisher, self.name, self.version)
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.publisher, self.name)
    }
}

/// Validated extension identifier for install/uninstall.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionToken {
    raw: String,
    publisher_len: usize,
    name_len: usize,
}

impl ExtensionToken {
    /// Validate `token` against `publisher.name[@version]`.
    pub fn parse(token: &str) -> Result<Self, EditorError> {
        let caps = TOKEN_PATTERN
            .captures(token)
            .ok_or_else(|| EditorError::InvalidExtensionToken(token.to_string()))?;
        Ok(Self {
            raw: token.to_string(),
            publisher_len: caps[1].len(),
            name_len: caps[2].len(),
        })
    }

    #[must_use]
    pub fn publisher(&self) -> &str {
        &self.raw[..self.publisher_len]
    }

    #[must_use]
    pub fn name(&self) -> &str {
        let start = self.publisher_len + 1;
        &self.raw[start..start + self.name_len]
    }

    /// Pinned version, if the token carries one.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.raw
            .get(self.publisher_len + 1 + self.name_len..)
            .and_then(|rest| rest.strip_prefix('@'))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ExtensionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ExtensionToken {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Marketplace category used to filter the installed-extension listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExtensionCategory {
    #[serde(rename = "azure")]
    Azure,
    #[serde(rename = "debuggers")]
    Debuggers,
    #[serde(rename = "education")]
    Education,
    #[serde(rename = "extension packs")]
    ExtensionPacks,
    #[serde(rename = "formatters")]
    Formatters,
    #[serde(rename = "keymaps")]
    Keymaps,
    #[serde(rename = "language packs")]
    LanguagePacks,
    #[serde(rename = "linters")]
    Linters,
    #[serde(rename = "machine learning")]
    MachineLearning,
    #[serde(rename = "notebooks")]
    Notebooks,
    #[serde(rename = "other")]
    Other,
    #[serde(rename = "programming languages")]
    ProgrammingLanguages,
    #[serde(rename = "scm providers")]
    ScmProviders,
    #[serde(rename = "snippets")]
    Snippets,
    #[serde(rename = "testing")]
    Testing,
    #[serde(rename = "themes")]
    Themes,
    #[serde(rename = "visualization")]
    Visualization,
}

impl ExtensionCategory {
    pub const ALL: [Self; 17] = [
        Self::Azure,
        Self::Debuggers,
        Self::Education,
        Self::ExtensionPacks,
        Self::Formatters,
        Self::Keymaps,
        Self::LanguagePacks,
        Self::Linters,
        Self::MachineLearning,
        Self::Notebooks,
        Self::Other,
        Self::ProgrammingLanguages,
        Self::ScmProviders,
        Self::Snippets,
        Self::Testing,
        Self::Themes,
        Self::Visualization,
    ];

    /// Label passed to `--category`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Azure => "azure",
            Self::Debuggers => "debuggers",
            Self::Education => "education",
            Self::ExtensionPacks => "extension packs",
            Self::Formatters => "formatters",
            Self::Keymaps => "keymaps",
            Self::LanguagePacks => "language packs",
            Self::Linters => "linters",
            Self::MachineLearning => "machine learning",
            Self::Notebooks => "notebooks",
            Self::Other => "other",
            Self::ProgrammingLanguages => "programming languages",
            Self::ScmProviders => "scm providers",
            Self::Snippets => "snippets",
            Self::Testing => "testing",
            Self::Themes => "themes",
            Self::Visualization => "visualization",
        }
    }
}

impl fmt::Display for ExtensionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExtensionCategory {
    type Err = EditorError;

    /// Case-insensitive; `-` and `_` stand in for spaces (`scm-providers`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .iter()
            .find(|category| category.label() == wanted)
            .copied()
            .ok_or_else(|| {
                EditorError::invalid_argument("category", "extension category", format!("`{s}`"))
            })
    }
}
