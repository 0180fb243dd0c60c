//! Error types for wordstat-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by the word statistics engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatisticsError {
    /// A word was required but none was supplied.
    #[error("invalid argument: word must not be absent")]
    InvalidArgument,
}

/// Result type alias using [`StatisticsError`].
pub type StatisticsResult<T> = Result<T, StatisticsError>;

/// Errors raised when constructing a [`NumberValidator`](crate::number::NumberValidator).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidatorError {
    /// Precision must be a positive number.
    #[error("precision must be a positive number, got {0}")]
    InvalidPrecision(usize),

    /// Scale must be non-negative and strictly less than precision.
    #[error("scale must be less than precision (scale: {scale}, precision: {precision})")]
    InvalidScale {
        /// The requested scale.
        scale: usize,
        /// The requested precision.
        precision: usize,
    },
}

/// Result type alias using [`ValidatorError`].
pub type ValidatorResult<T> = Result<T, ValidatorError>;
