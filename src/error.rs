//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationErrors;
use thiserror::Error;

/// Errors that can occur when creating or looking up contacts.
#[derive(Error, Debug)]
pub enum ContactError {
    /// The contact failed validation; nothing was written.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Record not found
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The persistence collaborator failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Failed to parse JSON input
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContactError {
    /// The validation error map, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
