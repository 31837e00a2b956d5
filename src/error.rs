//! Structured error handling for bootstrap and server plumbing.
//!
//! The probe contract itself has no error path: any dependency failure is
//! classified at the handler boundary and folded into the `503` response.
//! These variants only cover the paths where the process cannot serve at
//! all: bad configuration, pool construction, or the listener failing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadyzError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl From<config::ConfigError> for ReadyzError {
    fn from(err: config::ConfigError) -> Self {
        ReadyzError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ReadyzError>;
