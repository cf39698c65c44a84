//! Document title resolution.
//!
//! Precedence:
//!
//! 1. A `title` key in parsed YAML frontmatter. A present key always wins,
//!    even when its value is `null` (the title is then absent).
//! 2. The first non-empty first-level (`#`) heading anywhere in the text.
//! 3. Otherwise there is no title.
//!
//! Malformed frontmatter is treated as if there were none.

use std::fmt;

use serde_yaml::Value;

use super::frontmatter::extract_frontmatter;
use super::heading::extract_first_h1;

/// Where a document's title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    /// The `title` key of the YAML frontmatter.
    Frontmatter,
    /// The first `#` heading.
    Heading,
}

impl fmt::Display for TitleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frontmatter => f.write_str("frontmatter"),
            Self::Heading => f.write_str("heading"),
        }
    }
}

/// Extract a document title, or `None` when the document has none.
pub fn extract_title(content: &str) -> Option<String> {
    extract_title_with_source(content).and_then(|(title, _)| title)
}

/// Extract a document title along with the rule that produced it.
///
/// Returns `Some((None, TitleSource::Frontmatter))` for a frontmatter
/// `title` key holding `null`, and `None` when no rule applied at all.
///
/// # Example
///
/// ```rust
/// use doctrack_content::{extract_title_with_source, TitleSource};
///
/// let (title, source) = extract_title_with_source("# Heading\n").unwrap();
/// assert_eq!(title.as_deref(), Some("Heading"));
/// assert_eq!(source, TitleSource::Heading);
/// ```
pub fn extract_title_with_source(content: &str) -> Option<(Option<String>, TitleSource)> {
    let frontmatter = extract_frontmatter(content);
    if let Some(value) = frontmatter.title() {
        return Some((render_value(value), TitleSource::Frontmatter));
    }

    extract_first_h1(content).map(|title| (Some(title), TitleSource::Heading))
}

/// Render a YAML value as title text.
///
/// Numbers are formatted from the parsed value, so `1e3` renders as
/// `1000.0`. Lists and mappings are flattened onto one line, and `null` is
/// absent.
fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Sequence(items) => Some(
            items
                .iter()
                .map(|item| render_value(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Mapping(map) => Some(
            map.iter()
                .map(|(k, v)| {
                    format!(
                        "{}: {}",
                        render_value(k).unwrap_or_default(),
                        render_value(v).unwrap_or_default()
                    )
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Tagged(tagged) => render_value(&tagged.value),
    }
}

// ============================================================================
// Tests
// ============================================================================
