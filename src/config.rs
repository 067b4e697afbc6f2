//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, after loading a `.env` file if one is present.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::CaseMode;
use std::env;

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Whether email uniqueness compares case-sensitively (default: true)
    pub email_case_sensitive: bool,

    /// Whether `by_letter` matches the last-name prefix case-sensitively (default: true)
    pub letter_case_sensitive: bool,

    /// Log level (default: "info")
    pub log_level: String,
}

/// How the contact service compares strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Comparison used for the email uniqueness rule
    pub email: CaseMode,

    /// Comparison used for the last-name prefix filter
    pub letter: CaseMode,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            email: CaseMode::Sensitive,
            letter: CaseMode::Sensitive,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_EMAIL_CASE_SENSITIVE`: exact-case email uniqueness (default: true)
    /// - `CONTACTS_LETTER_CASE_SENSITIVE`: exact-case last-name filter (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let email_case_sensitive = Self::parse_env_bool("CONTACTS_EMAIL_CASE_SENSITIVE", true)?;
        let letter_case_sensitive = Self::parse_env_bool("CONTACTS_LETTER_CASE_SENSITIVE", true)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            email_case_sensitive,
            letter_case_sensitive,
            log_level,
        })
    }

    /// Comparison modes for the contact service.
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            email: CaseMode::from_sensitive(self.email_case_sensitive),
            letter: CaseMode::from_sensitive(self.letter_case_sensitive),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            email_case_sensitive: true,
            letter_case_sensitive: true,
            log_level: "info".to_string(),
        }
    }
}
