//! Dense state-vector simulation with Pauli projection
//!
//! This crate holds an explicit 2^n complex amplitude vector and supports:
//!
//! - **Gate application**: named unitaries from the
//!   [`vecsim_gates::GateRegistry`] or any [`vecsim_gates::GateMatrix`]
//! - **Pauli application**: signed Pauli strings at an arbitrary qubit offset
//! - **Projection**: collapse onto a Pauli eigenspace, returning the outcome
//!   probability
//! - **Comparison**: amplitude-wise equality within a tolerance, optionally up
//!   to global phase
//! - **Stabilizer states**: the joint +1 eigenstate of commuting generators
//!
//! Bit `q` of an amplitude index is qubit `q` (qubit 0 least significant).
//! Amplitudes are generic over [`Real`] (`f32` or `f64`).
//!
//! # Example
//!
//! ```
//! use vecsim_state::{PauliString, StateVector};
//!
//! let mut state = StateVector::<f64>::uniform(2);
//! let zi: PauliString = "ZI".parse().unwrap();
//!
//! let p = state.project(&zi).unwrap();
//! assert!((p - 0.5).abs() < 1e-12);
//!
//! // Already an eigenstate: certain outcome, unchanged state
//! let before = state.clone();
//! assert!((state.project(&zi).unwrap() - 1.0).abs() < 1e-12);
//! assert!(state.approximate_equals(&before, false));
//! ```

pub mod config;
pub mod error;
pub mod kernels;
pub mod pauli;
pub mod scalar;
pub mod state_vector;

pub use config::CompareConfig;
pub use error::{Result, StateError};
pub use pauli::{Pauli, PauliString};
pub use scalar::Real;
pub use state_vector::StateVector;
