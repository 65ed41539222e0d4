//! Argument vectors for every editor call.
//!
//! An [`Invocation`] is everything after the program name. Runners prepend
//! the program; nothing here touches the operating system.
//!
//! | Call | Arguments |
//! |---|---|
//! | version / presence | `-v` |
//! | open | `[flags] <path>...` |
//! | diff | `-d [flags] <a> <b>` |
//! | goto | `-g [flags] <path>:<line>[:<character>]` |
//! | list extensions | `--list-extensions --show-versions [--category <cat>]` |
//! | install | `[--force] --install-extension <token>` |
//! | uninstall | `[--force] --uninstall-extension <token>` |

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::Path;

use crate::domain::{CommandOptions, ExtensionCategory, ExtensionToken};

/// Flag that prints version, revision and architecture.
pub const VERSION_FLAG: &str = "-v";

/// Program arguments for one editor call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<OsString>,
}

impl Invocation {
    /// Empty argument list.
    #[must_use]
    pub const fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Append one argument, verbatim.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        args.into_iter().fold(self, |invocation, arg| invocation.arg(arg))
    }

    /// Append the window/locale flags.
    #[must_use]
    pub fn options(self, options: &CommandOptions) -> Self {
        self.args(options.flags())
    }

    /// The arguments, without the program.
    #[must_use]
    pub fn as_args(&self) -> &[OsString] {
        &self.args
    }

    /// `<editor> -v`, used for both presence checks and version queries.
    #[must_use]
    pub fn version_query() -> Self {
        Self::new().arg(VERSION_FLAG)
    }

    /// `<editor> [flags] <path>...`
    ///
    /// Empty paths are left out, so opening `""` starts a bare session.
    #[must_use]
    pub fn open<P: AsRef<Path>>(paths: &[P], options: &CommandOptions) -> Self {
        Self::new().options(options).args(
            paths
                .iter()
                .map(|p| p.as_ref().as_os_str())
                .filter(|p| !p.is_empty()),
        )
    }

    /// `<editor> -d [flags] <first> <second>`
    #[must_use]
    pub fn diff(first: &Path, second: &Path, options: &CommandOptions) -> Self {
        Self::new()
            .arg("-d")
            .options(options)
            .arg(first)
            .arg(second)
    }

    /// `<editor> -g [flags] <path>:<line>[:<character>]`
    #[must_use]
    pub fn goto(path: &Path, line: u32, character: Option<u32>, options: &CommandOptions) -> Self {
        let mut location = path.as_os_str().to_os_string();
        location.push(format!(":{line}"));
        if let Some(character) = character {
            location.push(format!(":{character}"));
        }
        Self::new().arg("-g").options(options).arg(location)
    }

    /// `<editor> --list-extensions --show-versions [--category <cat>]`
    #[must_use]
    pub fn list_extensions(category: Option<ExtensionCategory>) -> Self {
        let invocation = Self::new().arg("--list-extensions").arg("--show-versions");
        match category {
            Some(category) => invocation.arg("--category").arg(category.label()),
            None => invocation,
        }
    }

    /// `<editor> [--force] --install-extension <token>`
    #[must_use]
    pub fn install_extension(token: &ExtensionToken, force: bool) -> Self {
        Self::force(force)
            .arg("--install-extension")
            .arg(token.as_str())
    }

    /// `<editor> [--force] --uninstall-extension <token>`
    #[must_use]
    pub fn uninstall_extension(token: &ExtensionToken, force: bool) -> Self {
        Self::force(force)
            .arg("--uninstall-extension")
            .arg(token.as_str())
    }

    fn force(force: bool) -> Self {
        if force {
            Self::new().arg("--force")
        } else {
            Self::new()
        }
    }
}

/// Space-joined arguments, lossily decoded. For logs and messages only.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arg in &self.args {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            write!(f, "{}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
