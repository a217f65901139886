//! Log setup for the terminal front end. The alternate screen owns stderr, so
//! records go to a file instead.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::error::LoggingError;

/// Logging settings, loadable from the `[logging]` table.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    pub level: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: PathBuf::from("four_in_a_row.log"),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level
    pub fn level_filter(&self) -> Option<LevelFilter> {
        LevelFilter::from_str(&self.level).ok()
    }
}

/// Build a logger that appends to the configured file. `RUST_LOG` overrides
/// the configured level.
pub fn build_logger(config: &LoggingConfig) -> Result<env_logger::Logger, LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .map_err(|e| LoggingError::FileOpen {
            path: config.file.clone(),
            source: e,
        })?;

    let logger = Builder::from_env(Env::default().default_filter_or(config.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .build();
    Ok(logger)
}

/// Install the file logger as the global logger.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let logger = build_logger(config)?;
    let max_level = logger.filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}
