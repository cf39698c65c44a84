//! Title extraction for Markdown documents.
//!
//! This crate turns the raw text of a Markdown document into a
//! human-readable title. It has no filesystem access; callers read the file
//! and hand over its contents.
//!
//! # Modules
//!
//! - [`markdown`]: Markdown content utilities
//!   - [`markdown::frontmatter`]: YAML frontmatter block location and parsing
//!   - [`markdown::heading`]: First-level heading search
//!   - [`markdown::title`]: Title resolution (frontmatter, then heading)
//!
//! # Example
//!
//! ```rust
//! use doctrack_content::extract_title;
//!
//! let doc = "---\ntitle: Release Notes\n---\n\n# Something Else\n";
//! assert_eq!(extract_title(doc).as_deref(), Some("Release Notes"));
//!
//! let doc = "Intro text\n\n# Getting Started\n";
//! assert_eq!(extract_title(doc).as_deref(), Some("Getting Started"));
//!
//! assert_eq!(extract_title("no title here\n"), None);
//! ```

pub mod markdown;

// Re-export commonly used types
pub use markdown::{
    FrontmatterResult, TitleSource, extract_first_h1, extract_frontmatter, extract_title,
    extract_title_with_source, find_frontmatter_block,
};
