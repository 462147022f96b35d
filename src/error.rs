//! Error types and handling.

use thiserror::Error;

use crate::auth::AuthError;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Authentication failed
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// CSV read or write failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Session serialization error
    #[error("Session storage error: {0}")]
    Storage(#[from] serde_json::Error),

    /// Data parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Export error
    #[error("Export error: {0}")]
    Export(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a parse error with message
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a config error with message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an export error with message
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
