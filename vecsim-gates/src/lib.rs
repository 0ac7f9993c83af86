//! Gate library for vecsim
//!
//! Exact unitary matrices for the standard named gates and a registry that
//! resolves names to matrices.
//!
//! # Features
//!
//! - **Exact constants**: every matrix entry is a closed-form value (±1, ±i,
//!   ±1/√2, (±1±i)/2) computed at compile time
//! - **Process-wide registry**: [`GateRegistry::standard`] is built once on
//!   first use and never mutated afterwards
//! - **Extensible**: clone the standard registry and [`GateRegistry::register`]
//!   further unitaries
//!
//! # Example
//!
//! ```
//! use vecsim_gates::{matrices, GateMatrix, GateRegistry};
//!
//! let h = GateRegistry::standard().lookup("H").unwrap();
//! assert_eq!(h, &GateMatrix::from_2x2(&matrices::HADAMARD));
//! ```

pub mod error;
pub mod gate_registry;
pub mod matrices;

pub use error::{GateError, Result};
pub use gate_registry::{GateMatrix, GateRegistry, UNITARY_TOLERANCE};
