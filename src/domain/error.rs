//! Domain error types

use thiserror::Error;

/// Error when user-submitted text fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Text must contain at least 1 character")]
pub struct EmptyTextError;

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("{0} not found. Set it in the environment, a .env file, or the config file")]
    MissingKey(&'static str),

    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },
}
