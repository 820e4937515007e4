//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, after reading a `.env` file if one is present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Default storage file, relative to the working directory.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Largest accepted default look-ahead window, in days.
pub const MAX_WINDOW_DAYS: i64 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address book storage file (default: "addressbook.json")
    pub book_path: PathBuf,

    /// Look-ahead used by `birthdays` without an argument (default: 7)
    pub birthday_window_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Storage file (default: "addressbook.json")
    /// - `BIRTHDAY_WINDOW_DAYS`: Default look-ahead in days, 0-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path = match env::var("CONTACT_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let birthday_window_days =
            Self::parse_env_i64("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;

        if !(0..=MAX_WINDOW_DAYS).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
            log_level: "error".to_string(),
        }
    }
}
