//! Optional TOML configuration.
//!
//! ```toml
//! [scan]
//! sorted = true
//! follow_links = false
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every key is optional. Command-line flags can switch scan options on but
//! never off.

use doctrack_core::{DiscoveryOptions, Error, Result, expand_tilde};
use serde::Deserialize;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoctrackConfig {
    /// Directory walk settings.
    pub scan: ScanConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// `[scan]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Sort directory entries by name.
    pub sorted: bool,
    /// Descend into symlinked directories.
    pub follow_links: bool,
}

/// `[log]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset and no `-v` is given.
    pub level: Option<String>,
}

impl DoctrackConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// `~` in the path is expanded. A path that cannot be read or parsed is
    /// an error.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let path = expand_tilde(path);
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Discovery options after applying command-line flags.
    pub fn discovery_options(&self, sorted: bool, follow_links: bool) -> DiscoveryOptions {
        DiscoveryOptions::default()
            .with_sorted(self.scan.sorted || sorted)
            .with_follow_links(self.scan.follow_links || follow_links)
    }
}
