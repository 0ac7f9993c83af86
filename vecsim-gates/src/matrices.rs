//! Exact gate matrices as compile-time constants
//!
//! Every entry is a closed-form value (0, ±1, ±i, ±1/√2, (±1±i)/2) so that
//! repeated application accumulates as little rounding error as possible.
//!
//! # Index convention
//!
//! Matrices are row-major, `matrix[row][col]` maps input basis `col` to output
//! basis `row`. For two-qubit gates the first qubit argument is the **low**
//! bit of the 4×4 index and the second argument is the high bit, matching the
//! state vector convention where bit `q` of an amplitude index is qubit `q`.
//! `CNOT[3][1] == 1` therefore reads "control (first) set, target (second)
//! clear → both set".

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

const HALF_P_P: Complex64 = Complex64::new(0.5, 0.5); // (1+i)/2
const HALF_P_N: Complex64 = Complex64::new(0.5, -0.5); // (1-i)/2
const HALF_N_P: Complex64 = Complex64::new(-0.5, 0.5); // (-1+i)/2
const HALF_N_N: Complex64 = Complex64::new(-0.5, -0.5); // (-1-i)/2

/// 2×2 single-qubit matrix
pub type Matrix2 = [[Complex64; 2]; 2];

/// 4×4 two-qubit matrix
pub type Matrix4 = [[Complex64; 4]; 4];

// Single-qubit gate matrices (2x2)

/// Identity
pub const IDENTITY: Matrix2 = [[ONE, ZERO], [ZERO, ONE]];

/// Pauli-X
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: Matrix2 = [[ZERO, ONE], [ONE, ZERO]];

/// Pauli-Y
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: Matrix2 = [[ZERO, NEG_I], [I, ZERO]];

/// Pauli-Z
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: Matrix2 = [[ONE, ZERO], [ZERO, NEG_ONE]];

/// Hadamard, exchanging the X and Z axes
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: Matrix2 = [
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(INV_SQRT2, 0.0)],
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(-INV_SQRT2, 0.0)],
];

/// Hadamard-like gate exchanging the X and Y axes
/// H_XY = 1/√2 * [[0,   1-i],
///                [1+i, 0  ]]
pub const HADAMARD_XY: Matrix2 = [
    [ZERO, Complex64::new(INV_SQRT2, -INV_SQRT2)],
    [Complex64::new(INV_SQRT2, INV_SQRT2), ZERO],
];

/// Hadamard-like gate exchanging the Y and Z axes
/// H_YZ = 1/√2 * [[1, -i],
///                [i, -1]]
pub const HADAMARD_YZ: Matrix2 = [
    [Complex64::new(INV_SQRT2, 0.0), Complex64::new(0.0, -INV_SQRT2)],
    [Complex64::new(0.0, INV_SQRT2), Complex64::new(-INV_SQRT2, 0.0)],
];

/// √X
/// SQRT_X = 1/2 * [[1+i, 1-i],
///                 [1-i, 1+i]]
pub const SQRT_X: Matrix2 = [[HALF_P_P, HALF_P_N], [HALF_P_N, HALF_P_P]];

/// √X†, squares to X
/// SQRT_X_DAG = 1/2 * [[1-i, 1+i],
///                     [1+i, 1-i]]
pub const SQRT_X_DAG: Matrix2 = [[HALF_P_N, HALF_P_P], [HALF_P_P, HALF_P_N]];

/// √Y
/// SQRT_Y = 1/2 * [[1+i, -1-i],
///                 [1+i,  1+i]]
pub const SQRT_Y: Matrix2 = [[HALF_P_P, HALF_N_N], [HALF_P_P, HALF_P_P]];

/// √Y†
/// SQRT_Y_DAG = 1/2 * [[ 1-i, 1-i],
///                     [-1+i, 1-i]]
pub const SQRT_Y_DAG: Matrix2 = [[HALF_P_N, HALF_P_N], [HALF_N_P, HALF_P_N]];

/// S (√Z)
/// S = [[1, 0],
///      [0, i]]
pub const S_GATE: Matrix2 = [[ONE, ZERO], [ZERO, I]];

/// S† (√Z†)
/// S† = [[1,  0],
///       [0, -i]]
pub const S_GATE_DAGGER: Matrix2 = [[ONE, ZERO], [ZERO, NEG_I]];

// Two-qubit gate matrices (4x4), first argument = low index bit

/// Controlled-NOT, control = first argument, target = second
pub const CNOT: Matrix4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ONE, ZERO, ZERO],
];

/// Controlled-Y, control = first argument, target = second
pub const CY: Matrix4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ZERO, NEG_I],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, I, ZERO, ZERO],
];

/// Controlled-Z (symmetric)
pub const CZ: Matrix4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ZERO, ZERO, NEG_ONE],
];

/// SWAP
pub const SWAP: Matrix4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, ONE, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
];

/// iSWAP: swaps |01⟩ and |10⟩ with a phase of i
pub const ISWAP: Matrix4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, I, ZERO],
    [ZERO, I, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
];

/// iSWAP†
pub const ISWAP_DAG: Matrix4 = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ZERO, NEG_I, ZERO],
    [ZERO, NEG_I, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
];

/// Flatten a 2×2 matrix into row-major order
pub fn flatten_2x2(matrix: &Matrix2) -> Vec<Complex64> {
    matrix.iter().flat_map(|row| row.iter().copied()).collect()
}

/// Flatten a 4×4 matrix into row-major order
pub fn flatten_4x4(matrix: &Matrix4) -> Vec<Complex64> {
    matrix.iter().flat_map(|row| row.iter().copied()).collect()
}
