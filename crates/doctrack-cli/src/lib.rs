//! # doctrack-cli
//!
//! Command-line driver for doctrack.
//!
//! Builds a tracking report for a directory of Markdown documents and writes
//! it as CSV to a file or to standard output.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use doctrack_report::{ReportBuilder, write_csv};

pub use cli::Args;
pub use config::DoctrackConfig;

/// Run the CLI with parsed arguments.
///
/// The report is built completely before the destination is opened, so a
/// failed scan never creates or truncates the output file.
pub fn run(args: Args) -> Result<()> {
    let config =
        DoctrackConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    logging::init(args.verbose, config.log.level.as_deref())?;

    let options = config.discovery_options(args.sorted, args.follow_links);
    tracing::debug!(root = %args.root_dir.display(), ?options, "Scanning");

    let report = ReportBuilder::new(&args.root_dir)
        .with_options(options)
        .build()
        .with_context(|| format!("failed to build report for {}", args.root_dir.display()))?;

    match &args.output_csv {
        Some(path) => {
            println!("Writing output CSV to {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_csv(&report, BufWriter::new(file))
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            write_csv(&report, io::stdout().lock())
                .context("failed to write CSV to standard output")?;
        }
    }

    tracing::info!(rows = report.len(), "Report written");
    Ok(())
}
