//! Utility modules for file discovery and path handling.
//!
//! # Modules
//!
//! - [`files`]: Recursive Markdown file discovery
//! - [`paths`]: Path display and tilde expansion helpers

pub mod files;
pub mod paths;
