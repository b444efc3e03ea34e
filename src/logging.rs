//! Logging setup.
//!
//! The TUI owns the terminal, so log output goes to a file. The filter comes
//! from the config (`POSTPAGER_LOG`), e.g. `debug` or `postpager=trace`.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::startup::AppConfig;

/// Install the global tracing subscriber writing to the configured log file.
///
/// Returns the path written to, or `None` when no log location could be
/// determined (logging is then disabled).
pub fn init_logging(config: &AppConfig) -> Result<Option<PathBuf>> {
    let Some(path) = config.resolved_log_file() else {
        return Ok(None);
    };
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .or_else(|_| EnvFilter::try_new(crate::startup::config::DEFAULT_LOG_FILTER))
        .wrap_err("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| eyre!("failed to install tracing subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "Logging initialized");
    Ok(Some(path))
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))
}
