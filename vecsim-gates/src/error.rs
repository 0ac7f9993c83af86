//! Error types for gate registry operations

use thiserror::Error;

/// Errors that can occur while looking up or registering gates
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GateError {
    /// No gate is registered under this name
    #[error("Unknown gate '{name}'")]
    UnknownGate { name: String },

    /// Matrix is not square with a power-of-two side
    #[error("Invalid matrix dimensions: expected {expected} elements, got {actual}")]
    InvalidDimensions { expected: usize, actual: usize },

    /// Matrix fails the U†U = I check
    #[error("Matrix is not unitary: max deviation {max_deviation:.2e} exceeds tolerance {tolerance:.2e}")]
    NotUnitary { max_deviation: f64, tolerance: f64 },
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;
