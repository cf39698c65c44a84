//! Markdown content utilities.
//!
//! - [`frontmatter`]: YAML frontmatter extraction
//! - [`heading`]: First-level (`#`) heading search
//! - [`title`]: Title resolution combining both

pub mod frontmatter;
pub mod heading;
pub mod title;

// Re-export key types and functions
pub use frontmatter::{FrontmatterResult, extract_frontmatter, find_frontmatter_block};
pub use heading::extract_first_h1;
pub use title::{TitleSource, extract_title, extract_title_with_source};
