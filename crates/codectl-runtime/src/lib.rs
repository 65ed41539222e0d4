//! Process runtime for codectl.
//!
//! Implements `codectl_core::ports::CommandRunner` on top of
//! `std::process`, including PATH lookup of the editor binary and
//! suppression of console windows on Windows.

#![deny(unsafe_code)]

mod platform;
mod resolve;
mod runner;

pub use resolve::resolve_editor;
pub use runner::SystemCommandRunner;
