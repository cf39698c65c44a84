//! CSV serialization of a [`Report`].
//!
//! Output always starts with the header row, even for an empty report.
//! Fields are quoted only when needed, absent values become empty fields,
//! and records end with `\n`.

use std::io;

use crate::Result;
use crate::report::Report;

/// Column labels, in output order.
pub const COLUMNS: [&str; 5] = ["Id", "Path", "Title", "R-A-G", "Assignee"];

/// Serialize `report` as CSV into `sink`.
pub fn write_csv<W: io::Write>(report: &Report, sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);

    writer.write_record(COLUMNS)?;
    for row in report {
        writer.serialize(row)?;
    }
    writer.flush()?;

    log::debug!("Wrote {} CSV row(s)", report.len());
    Ok(())
}

/// Serialize `report` as a CSV string.
pub fn to_csv_string(report: &Report) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(report, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}
