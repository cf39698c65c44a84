#![forbid(unsafe_code)]

//! doctrack CLI
//!
//! Scan a directory tree for Markdown documents and emit a tracking report
//! as CSV.

use anyhow::Result;
use clap::Parser;
use doctrack_cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    doctrack_cli::run(args)
}
