//! Amplitude-level kernels shared by the state vector operations
//!
//! All kernels act in place on a slice of length 2^n where bit `q` of an
//! index is the basis value of qubit `q`. Callers validate qubit indices.

use crate::scalar::Real;
use num_complex::Complex;
use num_traits::Zero;
use smallvec::SmallVec;

/// Apply a 2^k × 2^k row-major matrix to the qubits in `qubits`
///
/// `qubits[b]` supplies bit `b` of the matrix row/column index. For every
/// assignment of the remaining qubits the 2^k addressed amplitudes are
/// gathered, multiplied by the matrix and written back, so each amplitude is
/// touched exactly once.
pub fn apply_matrix<T: Real>(state: &mut [Complex<T>], matrix: &[Complex<T>], qubits: &[usize]) {
    let dim = 1usize << qubits.len();
    debug_assert_eq!(matrix.len(), dim * dim);

    let mask = qubits.iter().fold(0usize, |m, &q| m | (1 << q));
    let offsets: SmallVec<[usize; 4]> = (0..dim)
        .map(|j| {
            qubits
                .iter()
                .enumerate()
                .filter(|(bit, _)| (j >> bit) & 1 == 1)
                .fold(0usize, |off, (_, &q)| off | (1 << q))
        })
        .collect();
    let mut scratch: SmallVec<[Complex<T>; 4]> = SmallVec::from_elem(Complex::zero(), dim);

    for base in 0..state.len() {
        if base & mask != 0 {
            continue;
        }
        for (slot, &off) in scratch.iter_mut().zip(offsets.iter()) {
            *slot = state[base | off];
        }
        for (row, &off) in offsets.iter().enumerate() {
            let coeffs = &matrix[row * dim..(row + 1) * dim];
            state[base | off] = coeffs
                .iter()
                .zip(scratch.iter())
                .fold(Complex::zero(), |acc, (&m, &a)| acc + m * a);
        }
    }
}

/// X on `qubit`: swap each amplitude pair differing in that bit
pub fn apply_x<T: Real>(state: &mut [Complex<T>], qubit: usize) {
    let mask = 1usize << qubit;
    for i in 0..state.len() {
        if i & mask == 0 {
            state.swap(i, i | mask);
        }
    }
}

/// Y on `qubit`: Y|0⟩ = i|1⟩, Y|1⟩ = -i|0⟩
pub fn apply_y<T: Real>(state: &mut [Complex<T>], qubit: usize) {
    let mask = 1usize << qubit;
    for i in 0..state.len() {
        if i & mask == 0 {
            let j = i | mask;
            let a0 = state[i];
            let a1 = state[j];
            state[i] = mul_neg_i(a1);
            state[j] = mul_i(a0);
        }
    }
}

/// Z on `qubit`: negate amplitudes whose bit is set
pub fn apply_z<T: Real>(state: &mut [Complex<T>], qubit: usize) {
    let mask = 1usize << qubit;
    for (i, amp) in state.iter_mut().enumerate() {
        if i & mask != 0 {
            *amp = -*amp;
        }
    }
}

/// Multiply every amplitude by a real factor
pub fn scale<T: Real>(state: &mut [Complex<T>], factor: T) {
    for amp in state.iter_mut() {
        *amp = amp.scale(factor);
    }
}

/// Squared 2-norm Σ|aᵢ|²
pub fn norm_sqr<T: Real>(state: &[Complex<T>]) -> T {
    state.iter().fold(T::zero(), |acc, a| acc + a.norm_sqr())
}

#[inline(always)]
fn mul_i<T: Real>(a: Complex<T>) -> Complex<T> {
    Complex::new(-a.im, a.re)
}

#[inline(always)]
fn mul_neg_i<T: Real>(a: Complex<T>) -> Complex<T> {
    Complex::new(a.im, -a.re)
}
