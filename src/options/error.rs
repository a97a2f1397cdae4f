//! Configuration error types.

use thiserror::Error;

/// Errors that can occur when building or loading history options.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Capacity must be a positive integer. Call .unbounded() to disable the limit")]
    ZeroCapacity,

    #[error("Failed to parse history options: {0}")]
    Parse(String),
}
