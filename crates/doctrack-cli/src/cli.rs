//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// doctrack - Markdown document tracking reports
#[derive(Parser, Debug)]
#[command(name = "doctrack", author, version)]
#[command(about = "Build a CSV tracking report of the Markdown documents under a directory", long_about = None)]
pub struct Args {
    /// Root directory to recursively search for Markdown documents
    pub root_dir: PathBuf,

    /// Optional path for the output CSV file (standard output if omitted)
    pub output_csv: Option<PathBuf>,

    /// Sort directory entries by name for a reproducible row order
    #[arg(long, env = "DOCTRACK_SORTED")]
    pub sorted: bool,

    /// Descend into symlinked directories
    #[arg(long, env = "DOCTRACK_FOLLOW_LINKS")]
    pub follow_links: bool,

    /// Configuration file path
    #[arg(short, long, env = "DOCTRACK_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_debug_assert() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_positional_only() {
        let args = Args::try_parse_from(["doctrack", "docs"]).unwrap();
        assert_eq!(args.root_dir, PathBuf::from("docs"));
        assert!(args.output_csv.is_none());
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_output_and_flags() {
        let args = Args::try_parse_from([
            "doctrack",
            "docs",
            "out.csv",
            "--sorted",
            "--follow-links",
            "-vv",
            "--config",
            "doctrack.toml",
        ])
        .unwrap();
        assert_eq!(args.output_csv, Some(PathBuf::from("out.csv")));
        assert!(args.sorted);
        assert!(args.follow_links);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.config.as_deref(), Some("doctrack.toml"));
    }

    #[test]
    fn test_root_is_required() {
        assert!(Args::try_parse_from(["doctrack"]).is_err());
    }
}
