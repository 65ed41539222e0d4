//! Window and display-language flags shared by every launch call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ports::EditorError;

/// Display language accepted by `--locale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    En,
    ZhCn,
    ZhTw,
    Fr,
    De,
    It,
    Es,
    Ja,
    Ko,
    Ru,
    PtBr,
    Tr,
    Pl,
    Cs,
}

impl Locale {
    /// Every supported locale, in documentation order.
    pub const ALL: [Self; 14] = [
        Self::En,
        Self::ZhCn,
        Self::ZhTw,
        Self::Fr,
        Self::De,
        Self::It,
        Self::Es,
        Self::Ja,
        Self::Ko,
        Self::Ru,
        Self::PtBr,
        Self::Tr,
        Self::Pl,
        Self::Cs,
    ];

    /// The IETF-style tag passed on the command line.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-cn",
            Self::ZhTw => "zh-tw",
            Self::Fr => "fr",
            Self::De => "de",
            Self::It => "it",
            Self::Es => "es",
            Self::Ja => "ja",
            Self::Ko => "ko",
            Self::Ru => "ru",
            Self::PtBr => "pt-br",
            Self::Tr => "tr",
            Self::Pl => "pl",
            Self::Cs => "cs",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .find(|locale| locale.code() == wanted)
            .copied()
            .ok_or_else(|| {
                EditorError::invalid_argument("locale", "supported locale code", format!("`{s}`"))
            })
    }
}

/// Options shared by every launch call.
///
/// Built per call, turned into flags by [`CommandOptions::flags`], then dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandOptions {
    /// Open a new session instead of restoring the previous one.
    pub new_window: bool,
    /// Force opening in the last active window.
    pub reuse_window: bool,
    /// Display language for the session.
    pub locale: Option<Locale>,
}

impl CommandOptions {
    /// Options with every flag off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            new_window: false,
            reuse_window: false,
            locale: None,
        }
    }

    /// Set the new-window flag.
    #[must_use]
    pub const fn with_new_window(mut self, enabled: bool) -> Self {
        self.new_window = enabled;
        self
    }

    /// Set the reuse-window flag.
    #[must_use]
    pub const fn with_reuse_window(mut self, enabled: bool) -> Self {
        self.reuse_window = enabled;
        self
    }

    /// Set the display language.
    #[must_use]
    pub const fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Flags in fixed order: `-n`, `-r`, `--locale <code>`.
    ///
    /// `-r` is emitted whenever requested, even alongside `-n`.
    #[must_use]
    pub fn flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::with_capacity(4);
        if self.new_window {
            flags.push("-n");
        }
        if self.reuse_window {
            flags.push("-r");
        }
        if let Some(locale) = self.locale {
            flags.push("--locale");
            flags.push(locale.code());
        }
        flags
    }
}

/// Space-joined flag fragment for the given options.
#[must_use]
pub fn build_flags(new_window: bool, reuse_window: bool, locale: Option<Locale>) -> String {
    CommandOptions {
        new_window,
        reuse_window,
        locale,
    }
    .flags()
    .join(" ")
}
