//! Configuration management for the agenda.
//!
//! This module handles loading configuration from environment variables,
//! with a `.env` file honored when present.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Configuration for the agenda binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the persisted collection file
    pub data_dir: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `AGENDA_DATA_DIR`: Directory for the collection file (default:
    ///   the platform data directory for "agenda")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_dir = match env::var("AGENDA_DATA_DIR") {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "AGENDA_DATA_DIR".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                PathBuf::from(val)
            }
            Err(_) => ProjectDirs::from("", "", "agenda")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    ConfigError::NoDataDir("no home directory available".to_string())
                })?,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_dir,
            log_level,
        })
    }
}
