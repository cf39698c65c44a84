//! Error types for doctrack-report

use thiserror::Error;

/// Result type alias for doctrack-report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or writing a report
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Discovery or read failure
    #[error(transparent)]
    Core(#[from] doctrack_core::Error),

    /// CSV serialization failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure flushing the output sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized output was not valid UTF-8
    #[error("Output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
