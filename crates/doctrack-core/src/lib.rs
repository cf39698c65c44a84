//! doctrack Core — shared errors and filesystem utilities.
//!
//! This crate provides the foundational pieces used across the doctrack
//! crates. It has no internal doctrack dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: Markdown file discovery and path helpers

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::files::{
    DiscoveryOptions, MARKDOWN_EXTENSIONS, MarkdownFiles, discover_markdown_files,
    is_markdown_file,
};
pub use util::paths::{expand_tilde, relative_display};
