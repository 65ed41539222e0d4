//! The `Editor` facade.
//!
//! Every public operation goes through [`Editor::guarded`], which fails with
//! `EditorNotFound` when the presence check does not pass.
//!
//! - `editor` - construction, presence check and the guard
//! - `launch` - fire-and-forget calls (open, diff, goto, folder, session)
//! - `query` - capturing calls (version, extension listing)
//! - `extensions` - install/uninstall

mod editor;
mod extensions;
mod launch;
mod query;

pub use editor::Editor;
pub use launch::folder_paths;
