//! R-A-G status flag and column defaults.

use std::fmt;

use serde::Serialize;

/// Red-Amber-Green progress indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    /// Not started or blocked.
    #[default]
    #[serde(rename = "R")]
    Red,
    /// In progress.
    #[serde(rename = "A")]
    Amber,
    /// Done.
    #[serde(rename = "G")]
    Green,
}

impl Status {
    /// Single-letter code used in reports.
    pub fn code(self) -> &'static str {
        match self {
            Self::Red => "R",
            Self::Amber => "A",
            Self::Green => "G",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Status given to every newly tracked document.
pub const DEFAULT_STATUS: Status = Status::Red;

/// Assignee given to every newly tracked document.
pub const DEFAULT_ASSIGNEE: Option<&str> = None;
