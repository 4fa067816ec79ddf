//! Error types for xover-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("both series must have at minimum 3 points ({fast}, {slow})")]
    SeriesTooShort { fast: usize, slow: usize },

    #[error("both series must have the same size (1st: {fast} vs. 2nd: {slow})")]
    LengthMismatch { fast: usize, slow: usize },

    #[error("{series} series has a non-finite value at index {index}: {value}")]
    NonFiniteValue {
        series: &'static str,
        index: usize,
        value: f64,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
