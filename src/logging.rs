//! Log file setup.
//!
//! The TUI owns the terminal, so `tracing` output goes to
//! `<data dir>/entigraph/entigraph.log` instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::config::{APP_NAME, LOG_FILE};

/// Environment variable holding a filter directive, e.g. `entigraph=debug`.
pub const LOG_ENV: &str = "ENTIGRAPH_LOG";

/// Builds the filter: [`LOG_ENV`] first, then `fallback`, then `info`.
#[must_use]
pub fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Path of the log file, creating its directory.
///
/// # Errors
///
/// Returns an error if no data directory exists or it cannot be created.
pub fn log_path() -> Result<PathBuf> {
    let mut path = dirs::data_local_dir()
        .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine data directory"))?;
    path.push(APP_NAME);
    fs::create_dir_all(&path)?;
    path.push(LOG_FILE);
    Ok(path)
}

/// Installs the global subscriber writing to the log file.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(fallback_level: &str) -> Result<PathBuf> {
    let path = log_path()?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter(fallback_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| color_eyre::eyre::eyre!("Failed to install log subscriber: {err}"))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fallback_uses_info() {
        if std::env::var(LOG_ENV).is_ok() {
            return;
        }
        assert_eq!(filter("entigraph=loudest").to_string(), "info");
    }

    #[test]
    fn test_fallback_directive_applied() {
        if std::env::var(LOG_ENV).is_ok() {
            return;
        }
        assert_eq!(filter("debug").to_string(), "debug");
    }
}
