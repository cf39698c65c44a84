//! Error types for doctrack-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for doctrack-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in doctrack-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure on a specific path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The scan root exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Directory traversal failed below the scan root
    #[error("Failed to walk {}: {source}", path.display())]
    Walk {
        /// Path at which the walk failed
        path: PathBuf,
        /// Underlying walk error
        #[source]
        source: walkdir::Error,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Wrap an I/O error together with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a walk error, keeping the path walkdir reports when it has one.
    pub fn walk(source: walkdir::Error, fallback: &Path) -> Self {
        let path = source
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf());
        Self::Walk { path, source }
    }
}
