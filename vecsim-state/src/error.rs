//! Error types for state vector operations

use thiserror::Error;
use vecsim_gates::GateError;

/// Errors that can occur during state vector operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Gate name not registered, or registered for a different qubit count
    #[error("Unknown gate '{name}' on {num_qubits} qubit(s)")]
    UnknownGate { name: String, num_qubits: usize },

    /// Malformed textual Pauli string
    #[error("Invalid Pauli string {input:?}: unexpected character at position {position}")]
    InvalidPauliSyntax { input: String, position: usize },

    /// A stabilizer projection landed in a zero-probability outcome
    #[error("Inconsistent stabilizers: projecting onto generator {index} ({stabilizer}) has zero probability")]
    InconsistentStabilizers { index: usize, stabilizer: String },

    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Qubit index out of range or repeated within one operation
    #[error("Invalid qubit index {index} for {num_qubits}-qubit state")]
    InvalidQubitIndex { index: usize, num_qubits: usize },

    /// Gate matrix construction failed
    #[error(transparent)]
    Gate(#[from] GateError),
}

/// Result type for state vector operations
pub type Result<T> = std::result::Result<T, StateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconsistent_stabilizers_message() {
        let err = StateError::InconsistentStabilizers {
            index: 1,
            stabilizer: "-ZI".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("generator 1"));
        assert!(msg.contains("-ZI"));
    }

    #[test]
    fn test_from_gate_error() {
        let err: StateError = GateError::InvalidDimensions {
            expected: 4,
            actual: 3,
        }
        .into();
        assert!(matches!(err, StateError::Gate(_)));
        assert!(err.to_string().contains("expected 4"));
    }
}
