//! First-level heading search.
//!
//! A first-level heading is a line that starts with a single `#` followed by
//! at least one space or tab. The heading text runs to the end of the line,
//! with surrounding whitespace trimmed. Deeper headings (`##`, `###`, ...)
//! never match because their second character is not whitespace.

use std::sync::LazyLock;

use regex::Regex;

static H1_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^#[ \t]+(?P<title>.*?)[ \t]*$").expect("Invalid heading regex")
});

/// Return the text of the first non-empty `#` heading in `content`.
///
/// The whole text is scanned, frontmatter included. Headings whose text is
/// blank are skipped.
///
/// # Example
///
/// ```rust
/// use doctrack_content::markdown::extract_first_h1;
///
/// let content = "## Overview\n\n# Install Guide   \n\n# Later\n";
/// assert_eq!(extract_first_h1(content).as_deref(), Some("Install Guide"));
/// assert_eq!(extract_first_h1("No heading"), None);
/// ```
pub fn extract_first_h1(content: &str) -> Option<String> {
    H1_RE
        .captures_iter(content)
        .filter_map(|caps| caps.name("title"))
        .map(|m| m.as_str().trim())
        .find(|title| !title.is_empty())
        .map(String::from)
}
