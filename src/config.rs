//! Application configuration with persistence.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/entigraph/config.json`
//! - macOS: `~/Library/Application Support/entigraph/config.json`
//! - Windows: `%APPDATA%/entigraph/config.json`
//!
//! Command-line flags override whatever the file says; see
//! [`AppConfig::apply_overrides`].

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::graph::AngularPartition;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for configuration and data directories.
pub const APP_NAME: &str = "entigraph";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "entigraph.log";

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Entity opened at startup; the first directory entry when unset.
    pub default_entity: Option<String>,
    /// JSON fixture file replacing the built-in directory.
    pub fixtures: Option<PathBuf>,
    /// Account spacing on the inner ring.
    pub angular_partition: AngularPartition,
    /// `tracing` filter directive used when `ENTIGRAPH_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_entity: None,
            fixtures: None,
            angular_partition: AngularPartition::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub entity: Option<String>,
    pub fixtures: Option<PathBuf>,
    pub partition: Option<AngularPartition>,
}

impl AppConfig {
    /// Returns the path to the configuration file, creating its directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads from `explicit`, or from [`config_path`](Self::config_path)
    /// when no path is given.
    ///
    /// Callers fall back to [`AppConfig::default`] on error; the error is
    /// returned so it can be logged once a subscriber is installed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::config_path()?),
        }
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Writes the configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Applies command-line values on top of the file settings.
    #[must_use]
    pub fn apply_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(entity) = overrides.entity {
            self.default_entity = Some(entity);
        }
        if let Some(fixtures) = overrides.fixtures {
            self.fixtures = Some(fixtures);
        }
        if let Some(partition) = overrides.partition {
            self.angular_partition = partition;
        }
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
