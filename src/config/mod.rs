//! Configuration module for the roster browser.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::path::PathBuf;

use crate::errors::AppError;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Console rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Read a `text`/`json` switch; returns whether JSON was selected.
fn json_selected(var: &str) -> Result<bool, AppError> {
    let value = match env::var(var) {
        Ok(value) => value,
        Err(_) => return Ok(false),
    };
    match value.to_ascii_lowercase().as_str() {
        "text" => Ok(false),
        "json" => Ok(true),
        other => Err(AppError::Config(format!(
            "{} must be 'text' or 'json' (got '{}')",
            var, other
        ))),
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Roster JSON file; the embedded sample roster is used when unset
    pub data_path: Option<PathBuf>,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    pub log_format: LogFormat,
    pub output_format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("ROSTER_DATA_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("ROSTER_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let log_format = if json_selected("ROSTER_LOG_FORMAT")? {
            LogFormat::Json
        } else {
            LogFormat::Text
        };

        let output_format = if json_selected("ROSTER_OUTPUT")? {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(Self {
            data_path,
            log_level,
            log_format,
            output_format,
        })
    }
}
