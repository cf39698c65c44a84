//! Recursive Markdown file discovery.
//!
//! [`discover_markdown_files`] walks a directory tree and lazily yields every
//! file whose name ends in a Markdown suffix (case-insensitive). The walk is
//! top-down: within a directory, files are yielded before any subdirectory
//! is descended into. Otherwise entries keep the order the directory listing
//! returns them in, unless [`DiscoveryOptions::sorted`] is set.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use doctrack_core::util::files::{discover_markdown_files, DiscoveryOptions};
//!
//! let files = discover_markdown_files(Path::new("docs"), &DiscoveryOptions::default())?;
//! for path in files {
//!     println!("{}", path?.display());
//! }
//! # Ok::<(), doctrack_core::Error>(())
//! ```

use std::cmp::Ordering;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::{Error, Result};

/// File name suffixes recognized as Markdown, compared against the
/// lowercased file name.
pub const MARKDOWN_EXTENSIONS: &[&str] = &[".md", ".markdown"];

/// Options controlling how the directory tree is walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Sort entries by file name within each directory.
    pub sorted: bool,
    /// Descend into symlinked directories.
    pub follow_links: bool,
}

impl DiscoveryOptions {
    /// Enable or disable per-directory name sorting.
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Enable or disable following directory symlinks.
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

/// Check whether a file name carries a recognized Markdown suffix.
///
/// ```
/// use doctrack_core::util::files::is_markdown_file;
///
/// assert!(is_markdown_file("README.md"));
/// assert!(is_markdown_file("notes.MARKDOWN"));
/// assert!(!is_markdown_file("main.rs"));
/// ```
pub fn is_markdown_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    MARKDOWN_EXTENSIONS
        .iter()
        .any(|suffix| lower.ends_with(suffix))
}

/// Lazy, single-pass sequence of discovered Markdown file paths.
///
/// Yields paths joined onto the scan root. After the first error the
/// iterator is exhausted.
pub struct MarkdownFiles {
    root: PathBuf,
    inner: walkdir::IntoIter,
    failed: bool,
}

impl MarkdownFiles {
    /// The directory this walk started from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl std::fmt::Debug for MarkdownFiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkdownFiles")
            .field("root", &self.root)
            .field("failed", &self.failed)
            .finish()
    }
}

impl Iterator for MarkdownFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for entry in self.inner.by_ref() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(Error::walk(e, &self.root)));
                }
            };

            if is_directory_like(&entry) {
                continue;
            }

            if is_markdown_file(&entry.file_name().to_string_lossy()) {
                log::trace!("Discovered {}", entry.path().display());
                return Some(Ok(entry.into_path()));
            }
        }

        None
    }
}

impl FusedIterator for MarkdownFiles {}

/// Start a recursive walk for Markdown files under `root`.
///
/// Fails immediately if `root` does not exist, cannot be inspected, or is
/// not a directory. Errors encountered later in the walk are yielded by the
/// iterator.
pub fn discover_markdown_files(root: &Path, options: &DiscoveryOptions) -> Result<MarkdownFiles> {
    let metadata = std::fs::metadata(root).map_err(|e| Error::io_with_path(e, root))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(root.to_path_buf()));
    }

    log::debug!(
        "Walking {} (sorted: {}, follow_links: {})",
        root.display(),
        options.sorted,
        options.follow_links
    );

    let sorted = options.sorted;
    let inner = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by(move |a, b| compare_entries(a, b, sorted))
        .into_iter();

    Ok(MarkdownFiles {
        root: root.to_path_buf(),
        inner,
        failed: false,
    })
}

/// Files before directories; by name as well when `sorted` is set.
fn compare_entries(a: &DirEntry, b: &DirEntry, sorted: bool) -> Ordering {
    let by_kind = a.file_type().is_dir().cmp(&b.file_type().is_dir());
    if sorted {
        by_kind.then_with(|| a.file_name().cmp(b.file_name()))
    } else {
        by_kind
    }
}

/// Directories, and symlinks pointing at directories, are never reported.
fn is_directory_like(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

// ============================================================================
// Tests
// ============================================================================
