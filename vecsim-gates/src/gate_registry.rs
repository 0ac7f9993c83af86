//! Named gate registry
//!
//! Maps gate names to unitary matrices. The standard registry is built once on
//! first use and is read-only for the rest of the process, so lookups from
//! any thread need no locking.
//!
//! # Example
//!
//! ```rust
//! use vecsim_gates::gate_registry::GateRegistry;
//!
//! let registry = GateRegistry::standard();
//! let cnot = registry.lookup("CNOT").unwrap();
//! assert_eq!(cnot.num_qubits(), 2);
//! assert!(registry.lookup("NOT_A_GATE").is_err());
//! ```

use crate::error::{GateError, Result};
use crate::matrices::{self, Matrix2, Matrix4};
use ahash::AHashMap;
use lazy_static::lazy_static;
use num_complex::Complex64;
use std::fmt;
use std::sync::Arc;

/// Default tolerance for the unitarity check in [`GateRegistry::register`]
pub const UNITARY_TOLERANCE: f64 = 1e-10;

lazy_static! {
    static ref STANDARD: GateRegistry = GateRegistry::build_standard();
}

/// Square unitary matrix acting on `num_qubits` qubits, stored row-major
///
/// The first qubit a gate is applied to is bit 0 of the row/column index.
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GateMatrixData"))]
pub struct GateMatrix {
    num_qubits: usize,
    entries: Vec<Complex64>,
}

/// Unchecked wire form of [`GateMatrix`], validated through [`GateMatrix::new`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GateMatrixData {
    num_qubits: usize,
    entries: Vec<Complex64>,
}

#[cfg(feature = "serde")]
impl TryFrom<GateMatrixData> for GateMatrix {
    type Error = GateError;

    fn try_from(data: GateMatrixData) -> Result<Self> {
        Self::new(data.num_qubits, data.entries)
    }
}

impl GateMatrix {
    /// Build a matrix from row-major entries
    ///
    /// # Errors
    /// Returns [`GateError::InvalidDimensions`] unless `entries.len() == 4^num_qubits`.
    /// When 4^num_qubits does not fit in `usize`, `expected` is `usize::MAX`.
    pub fn new(num_qubits: usize, entries: Vec<Complex64>) -> Result<Self> {
        let expected = num_qubits
            .checked_mul(2)
            .and_then(|bits| u32::try_from(bits).ok())
            .and_then(|bits| 1usize.checked_shl(bits));
        if expected != Some(entries.len()) {
            return Err(GateError::InvalidDimensions {
                expected: expected.unwrap_or(usize::MAX),
                actual: entries.len(),
            });
        }
        Ok(Self {
            num_qubits,
            entries,
        })
    }

    pub fn from_2x2(matrix: &Matrix2) -> Self {
        Self {
            num_qubits: 1,
            entries: matrices::flatten_2x2(matrix),
        }
    }

    pub fn from_4x4(matrix: &Matrix4) -> Self {
        Self {
            num_qubits: 2,
            entries: matrices::flatten_4x4(matrix),
        }
    }

    /// Number of qubits the gate acts on
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Side length of the matrix (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        1 << self.num_qubits
    }

    /// Entry at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.entries[row * self.dimension() + col]
    }

    /// Row-major entries
    #[inline]
    pub fn entries(&self) -> &[Complex64] {
        &self.entries
    }

    /// Largest entry-wise deviation of U†U from the identity
    pub fn unitary_deviation(&self) -> f64 {
        let n = self.dimension();
        let mut max_deviation: f64 = 0.0;
        for i in 0..n {
            for j in 0..n {
                let product: Complex64 = (0..n).map(|k| self.get(k, i).conj() * self.get(k, j)).sum();
                let expected = if i == j {
                    Complex64::new(1.0, 0.0)
                } else {
                    Complex64::new(0.0, 0.0)
                };
                max_deviation = max_deviation.max((product - expected).norm());
            }
        }
        max_deviation
    }

    /// Check U†U = I within `tolerance`
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.unitary_deviation() <= tolerance
    }
}

impl fmt::Debug for GateMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.dimension();
        writeln!(f, "GateMatrix ({} qubit(s)):", self.num_qubits)?;
        for row in 0..n {
            let cells: Vec<String> = (0..n)
                .map(|col| {
                    let c = self.get(row, col);
                    format!("{:+.4}{:+.4}i", c.re, c.im)
                })
                .collect();
            writeln!(f, "  [{}]", cells.join(", "))?;
        }
        Ok(())
    }
}

/// Name → matrix mapping
///
/// Matrices are shared through `Arc`, so cloning a registry to extend it is
/// cheap and leaves the original untouched.
#[derive(Debug, Clone, Default)]
pub struct GateRegistry {
    gates: AHashMap<String, Arc<GateMatrix>>,
}

impl GateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry of standard gates
    pub fn standard() -> &'static GateRegistry {
        &STANDARD
    }

    fn build_standard() -> Self {
        let mut registry = Self::new();

        let one_qubit: [(&[&str], &Matrix2); 13] = [
            (&["I"], &matrices::IDENTITY),
            (&["X"], &matrices::PAULI_X),
            (&["Y"], &matrices::PAULI_Y),
            (&["Z"], &matrices::PAULI_Z),
            (&["H", "H_XZ"], &matrices::HADAMARD),
            (&["H_XY"], &matrices::HADAMARD_XY),
            (&["H_YZ"], &matrices::HADAMARD_YZ),
            (&["SQRT_X"], &matrices::SQRT_X),
            (&["SQRT_X_DAG"], &matrices::SQRT_X_DAG),
            (&["SQRT_Y"], &matrices::SQRT_Y),
            (&["SQRT_Y_DAG"], &matrices::SQRT_Y_DAG),
            (&["S", "SQRT_Z"], &matrices::S_GATE),
            (&["S_DAG", "SQRT_Z_DAG"], &matrices::S_GATE_DAGGER),
        ];
        for (names, matrix) in one_qubit {
            registry.insert_aliases(names, GateMatrix::from_2x2(matrix));
        }

        let two_qubit: [(&[&str], &Matrix4); 6] = [
            (&["CNOT", "CX"], &matrices::CNOT),
            (&["CY"], &matrices::CY),
            (&["CZ"], &matrices::CZ),
            (&["SWAP"], &matrices::SWAP),
            (&["ISWAP"], &matrices::ISWAP),
            (&["ISWAP_DAG"], &matrices::ISWAP_DAG),
        ];
        for (names, matrix) in two_qubit {
            registry.insert_aliases(names, GateMatrix::from_4x4(matrix));
        }

        tracing::debug!(gates = registry.len(), "built standard gate registry");
        registry
    }

    fn insert_aliases(&mut self, names: &[&str], matrix: GateMatrix) {
        let shared = Arc::new(matrix);
        for name in names {
            self.gates.insert((*name).to_string(), Arc::clone(&shared));
        }
    }

    /// Register a gate after checking that it is unitary
    ///
    /// An existing gate with the same name is replaced.
    ///
    /// # Errors
    /// Returns [`GateError::NotUnitary`] if U†U deviates from I by more than
    /// [`UNITARY_TOLERANCE`]
    pub fn register(&mut self, name: impl Into<String>, matrix: GateMatrix) -> Result<()> {
        let max_deviation = matrix.unitary_deviation();
        if max_deviation > UNITARY_TOLERANCE {
            return Err(GateError::NotUnitary {
                max_deviation,
                tolerance: UNITARY_TOLERANCE,
            });
        }
        self.gates.insert(name.into(), Arc::new(matrix));
        Ok(())
    }

    /// Look up a gate by exact name
    ///
    /// # Errors
    /// Returns [`GateError::UnknownGate`] if `name` is not registered
    pub fn lookup(&self, name: &str) -> Result<&GateMatrix> {
        self.gates
            .get(name)
            .map(|gate| gate.as_ref())
            .ok_or_else(|| GateError::UnknownGate {
                name: name.to_string(),
            })
    }

    /// Check if a gate is registered
    pub fn contains(&self, name: &str) -> bool {
        self.gates.contains_key(name)
    }

    /// All registered names, sorted
    pub fn gate_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.gates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered names (aliases count separately)
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}
