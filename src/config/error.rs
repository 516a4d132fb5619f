//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Solver tolerance must be positive and finite")]
    InvalidTolerance,

    #[error("Solver max_iterations must be at least 1")]
    InvalidMaxIterations,

    #[error("Report precision exceeds maximum allowed (12)")]
    PrecisionTooLarge,

    #[error("Consistency threshold must be in (0, 1]")]
    InvalidThreshold,

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}
