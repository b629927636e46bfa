//! Logging to `~/.newsdeck/newsdeck.log`.
//!
//! The terminal belongs to the TUI, so tracing output goes to a file that
//! is truncated on every start. Without a home directory logs are dropped.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{DeckError, DeckResult};
use crate::startup::config::DEFAULT_LOG_FILTER;

/// Location of the log file, if a home directory exists.
pub fn log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".newsdeck").join("newsdeck.log"))
}

/// Parse a filter directive, falling back to the default on bad input.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Returns the log file path in use.
pub fn init(directive: &str) -> DeckResult<Option<PathBuf>> {
    let filter = build_filter(directive);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true);

    let path = log_path();
    let result = match &path {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            let file = File::create(path)?;
            builder.with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::sink).try_init(),
    };
    result.map_err(|e| DeckError::Config(format!("failed to install logger: {}", e)))?;

    tracing::info!("newsdeck {} starting", crate::cli::VERSION);
    Ok(path)
}
