//! YAML frontmatter extraction from markdown files.
//!
//! Frontmatter is a YAML block delimited by lines containing exactly `---`:
//!
//! ```markdown
//! ---
//! title: Sprint Planning
//! owner: docs-team
//! ---
//!
//! # Document Content
//! ```
//!
//! The block is located with a non-greedy, multi-line match anchored at line
//! boundaries, so the first pair of `---` lines in the document delimits it.
//! YAML that fails to parse is logged and otherwise ignored.
//!
//! # Usage
//!
//! ```rust
//! use doctrack_content::markdown::extract_frontmatter;
//!
//! let content = "---\ntitle: Test\n---\n\nBody";
//! let result = extract_frontmatter(content);
//!
//! assert!(result.has_frontmatter());
//! assert_eq!(result.get_str("title"), Some("Test"));
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

/// Key looked up for a document title.
pub const TITLE_KEY: &str = "title";

static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?msR)^---$(?P<yaml>.*?)^---$").expect("Invalid frontmatter regex")
});

/// Result of frontmatter extraction.
#[derive(Debug, Clone, Default)]
pub struct FrontmatterResult {
    /// Parsed YAML frontmatter, if present and valid.
    value: Option<Value>,
    /// Whether frontmatter delimiters were found (even if parsing failed).
    had_delimiters: bool,
}

impl FrontmatterResult {
    /// Check if valid frontmatter was found and parsed.
    pub fn has_frontmatter(&self) -> bool {
        self.value.is_some()
    }

    /// Check if frontmatter delimiters were present (even if parsing failed).
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// Get the raw YAML value, if present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Take ownership of the YAML value, if present.
    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    /// Look up a top-level key.
    ///
    /// Frontmatter that parsed to anything other than a mapping (a scalar,
    /// a list, or an empty block) has no keys.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.as_ref()?.as_mapping()?.get(key)
    }

    /// Get a string field from the frontmatter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// The value stored under `title`, if the key is present.
    ///
    /// A present key holding `null` yields `Some(&Value::Null)`.
    pub fn title(&self) -> Option<&Value> {
        self.get(TITLE_KEY)
    }
}

/// Locate the raw frontmatter block, without the delimiter lines.
///
/// ```rust
/// use doctrack_content::markdown::find_frontmatter_block;
///
/// assert_eq!(find_frontmatter_block("---\na: 1\n---\n"), Some("\na: 1\n"));
/// assert_eq!(find_frontmatter_block("# No frontmatter"), None);
/// ```
pub fn find_frontmatter_block(content: &str) -> Option<&str> {
    FRONTMATTER_RE
        .captures(content)
        .and_then(|caps| caps.name("yaml"))
        .map(|m| m.as_str())
}

/// Extract and parse YAML frontmatter from markdown content.
///
/// # Behavior
///
/// - No delimiter pair: `has_frontmatter() == false`, `had_delimiters() == false`
/// - Delimiters but invalid YAML: logs a warning, `has_frontmatter() == false`,
///   `had_delimiters() == true`
/// - Valid YAML: the parsed value is available through [`FrontmatterResult::value`]
pub fn extract_frontmatter(content: &str) -> FrontmatterResult {
    let Some(yaml) = find_frontmatter_block(content) else {
        return FrontmatterResult::default();
    };

    match serde_yaml::from_str::<Value>(yaml) {
        Ok(value) => FrontmatterResult {
            value: Some(value),
            had_delimiters: true,
        },
        Err(e) => {
            log::warn!("Failed to parse frontmatter YAML: {e}");
            FrontmatterResult {
                value: None,
                had_delimiters: true,
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
