//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no editor calls
//! - Functions return strings; handlers decide where to print them

pub mod editor_display;
pub mod tables;

// Re-export commonly used items
pub use editor_display::{extension_table, version_lines};
pub use tables::{separator, truncate_string};
