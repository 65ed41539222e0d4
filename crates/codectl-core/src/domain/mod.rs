//! Core domain types.
//!
//! These types are transient: built for a single call and dropped after it.
//!
//! # Structure
//!
//! - `options` - window and locale flags (`CommandOptions`, `Locale`)
//! - `target` - what `open` accepts (`OpenTarget`)
//! - `version` - parsed version query (`EditorVersion`)
//! - `extension` - installed extensions, categories and install tokens

mod extension;
mod options;
mod target;
mod version;

pub use extension::{Extension, ExtensionCategory, ExtensionId, ExtensionToken};
pub use options::{CommandOptions, Locale, build_flags};
pub use target::OpenTarget;
pub use version::EditorVersion;
