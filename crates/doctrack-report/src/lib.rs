//! Document tracking reports.
//!
//! Builds one [`ReportRow`] per Markdown document found under a root
//! directory and serializes the resulting [`Report`] as CSV.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`status`]: R-A-G status flag and column defaults
//! - [`report`]: Row/table types and the report builder
//! - [`csv_output`]: CSV serialization
//!
//! # Example
//!
//! ```no_run
//! use doctrack_report::{build_report, write_csv};
//!
//! let report = build_report("docs")?;
//! write_csv(&report, std::io::stdout().lock())?;
//! # Ok::<(), doctrack_report::Error>(())
//! ```

pub mod csv_output;
pub mod error;
pub mod report;
pub mod status;

pub use csv_output::{COLUMNS, to_csv_string, write_csv};
pub use error::{Error, Result};
pub use report::{Report, ReportBuilder, ReportRow, build_report};
pub use status::{DEFAULT_ASSIGNEE, DEFAULT_STATUS, Status};
