//! Error handling for ShadowKZ
//!
//! This module defines the error types raised while building and
//! validating the bot configuration. Every configuration error is fatal
//! to startup: the process must not run with a partially-valid config.

use thiserror::Error;

/// Main error type for the ShadowKZ configuration subsystem
#[derive(Error, Debug)]
pub enum ShadowKzError {
    #[error("Missing required value: {0}")]
    MissingRequiredValue(String),

    #[error("Value out of range: {0}")]
    OutOfRangeValue(String),

    #[error("Environment file error: {0}")]
    EnvFile(#[from] dotenv::Error),
}

/// Result type alias for ShadowKZ operations
pub type Result<T> = std::result::Result<T, ShadowKzError>;
