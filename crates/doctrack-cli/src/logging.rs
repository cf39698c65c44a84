//! Log subscriber setup.
//!
//! Everything is written to stderr so log lines never mix with CSV on
//! stdout. Library crates log through `log`; those records are bridged into
//! the tracing subscriber.

use tracing_subscriber::EnvFilter;

/// Filter used when nothing else is configured.
pub const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter directive for a given `-v` count and configured level.
///
/// `-v` flags take precedence over the configuration file.
pub fn filter_directive(verbosity: u8, configured: Option<&str>) -> &str {
    match verbosity {
        0 => configured.unwrap_or(DEFAULT_LEVEL),
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides everything.
pub fn init(verbosity: u8, configured: Option<&str>) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity, configured)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
