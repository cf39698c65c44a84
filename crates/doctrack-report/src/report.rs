//! Report rows, the report table, and the builder that produces them.
//!
//! The builder walks the scan root, reads every discovered Markdown file in
//! discovery order, extracts its title, and appends one row per file. Row
//! identifiers are positions in discovery order, starting at 0. Any walk or
//! read failure aborts the build; there are no partial reports.

use std::path::{Path, PathBuf};

use doctrack_content::extract_title_with_source;
use doctrack_core::{DiscoveryOptions, discover_markdown_files, relative_display};
use serde::Serialize;

use crate::Result;
use crate::status::{DEFAULT_ASSIGNEE, DEFAULT_STATUS, Status};

/// One tracked document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Position in discovery order.
    #[serde(rename = "Id")]
    pub id: usize,
    /// Path relative to the scan root, `/`-separated.
    #[serde(rename = "Path")]
    pub path: String,
    /// Extracted title; `None` when the document has none.
    #[serde(rename = "Title")]
    pub title: Option<String>,
    /// R-A-G status flag.
    #[serde(rename = "R-A-G")]
    pub status: Status,
    /// Person responsible for the document.
    #[serde(rename = "Assignee")]
    pub assignee: Option<String>,
}

impl ReportRow {
    /// Create a row carrying the default status and assignee.
    pub fn new(id: usize, path: impl Into<String>, title: Option<String>) -> Self {
        Self {
            id,
            path: path.into(),
            title,
            status: DEFAULT_STATUS,
            assignee: DEFAULT_ASSIGNEE.map(String::from),
        }
    }
}

/// Ordered table of report rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    rows: Vec<ReportRow>,
}

impl Report {
    /// Number of rows (one per discovered document).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no documents were found.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in discovery order.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Iterate rows in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, ReportRow> {
        self.rows.iter()
    }
}

impl From<Vec<ReportRow>> for Report {
    fn from(rows: Vec<ReportRow>) -> Self {
        Self { rows }
    }
}

impl IntoIterator for Report {
    type Item = ReportRow;
    type IntoIter = std::vec::IntoIter<ReportRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a ReportRow;
    type IntoIter = std::slice::Iter<'a, ReportRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Builder for a [`Report`] over one scan root.
///
/// # Example
///
/// ```no_run
/// use doctrack_report::ReportBuilder;
///
/// let report = ReportBuilder::new("docs").sorted(true).build()?;
/// println!("{} documents", report.len());
/// # Ok::<(), doctrack_report::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    root: PathBuf,
    options: DiscoveryOptions,
}

impl ReportBuilder {
    /// Create a builder with default discovery options.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: DiscoveryOptions::default(),
        }
    }

    /// Replace the discovery options wholesale.
    pub fn with_options(mut self, options: DiscoveryOptions) -> Self {
        self.options = options;
        self
    }

    /// Sort directory entries by name.
    pub fn sorted(mut self, sorted: bool) -> Self {
        self.options = self.options.with_sorted(sorted);
        self
    }

    /// Follow directory symlinks during the walk.
    pub fn follow_links(mut self, follow_links: bool) -> Self {
        self.options = self.options.with_follow_links(follow_links);
        self
    }

    /// The directory being scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root, read every document, and assemble the report.
    pub fn build(&self) -> Result<Report> {
        let files = discover_markdown_files(&self.root, &self.options)?;
        let mut rows = Vec::new();

        for (id, path) in files.enumerate() {
            let path = path?;
            let content = std::fs::read_to_string(&path)
                .map_err(|e| doctrack_core::Error::io_with_path(e, &path))?;

            let relative = relative_display(&path, &self.root);
            let title = match extract_title_with_source(&content) {
                Some((title, source)) => {
                    log::debug!("{relative}: title from {source}");
                    title
                }
                None => {
                    log::debug!("{relative}: no title");
                    None
                }
            };

            rows.push(ReportRow::new(id, relative, title));
        }

        log::info!(
            "Built report for {} with {} document(s)",
            self.root.display(),
            rows.len()
        );
        Ok(Report::from(rows))
    }
}

/// Build a report for `root` with default discovery options.
pub fn build_report(root: impl AsRef<Path>) -> Result<Report> {
    ReportBuilder::new(root.as_ref()).build()
}

// ============================================================================
// Tests
// ============================================================================
