//! Error types for region partitioning and dynamics
//!
//! Provides a unified error type for all region-dynamics crates.

use crate::point::Axis;
use thiserror::Error;

/// Core error type for region operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} points, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A coordinate fell outside the bin boundaries of its axis
    #[error("Value {value} on {axis} axis (point {index}) is outside [{lower}, {upper}]")]
    OutOfRange {
        axis: Axis,
        index: usize,
        value: f64,
        lower: f64,
        upper: f64,
    },

    /// A region identifier could not be parsed
    #[error("Invalid region label: {0:?}")]
    InvalidLabel(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}
