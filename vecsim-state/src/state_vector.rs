//! Dense state vector
//!
//! Holds 2^n complex amplitudes in a single contiguous buffer. Bit `q` of an
//! amplitude index (0 = least significant) is the basis value of qubit `q`;
//! every operation in this module relies on that convention.

use crate::config::CompareConfig;
use crate::error::{Result, StateError};
use crate::kernels;
use crate::pauli::{Pauli, PauliString};
use crate::scalar::Real;
use num_complex::Complex;
use num_traits::{One, Zero};
use std::fmt;
use vecsim_gates::{GateMatrix, GateRegistry};

/// Dense amplitude vector of an n-qubit system
///
/// No normalization invariant is enforced: fixtures may hold unnormalized or
/// partially collapsed vectors, and operations scale accordingly.
///
/// # Example
///
/// ```
/// use vecsim_state::StateVector;
///
/// // Bell pair (|00⟩ + |11⟩)/√2
/// let mut state = StateVector::<f64>::new(2);
/// state.apply("H", &[0]).unwrap();
/// state.apply("CNOT", &[0, 1]).unwrap();
///
/// let half = 0.5f64.sqrt();
/// assert!((state.amplitudes()[0].re - half).abs() < 1e-12);
/// assert!((state.amplitudes()[3].re - half).abs() < 1e-12);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "StateVectorData<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct StateVector<T: Real = f64> {
    num_qubits: usize,
    amplitudes: Vec<Complex<T>>,
}

/// Unchecked wire form of [`StateVector`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct StateVectorData<T: Real> {
    num_qubits: usize,
    amplitudes: Vec<Complex<T>>,
}

#[cfg(feature = "serde")]
impl<T: Real> TryFrom<StateVectorData<T>> for StateVector<T> {
    type Error = StateError;

    fn try_from(data: StateVectorData<T>) -> Result<Self> {
        let state = Self::from_amplitudes(data.amplitudes)?;
        if state.num_qubits != data.num_qubits {
            return Err(StateError::DimensionMismatch {
                expected: data.num_qubits,
                actual: state.num_qubits,
            });
        }
        Ok(state)
    }
}

impl<T: Real> StateVector<T> {
    /// New state initialized to |0…0⟩
    pub fn new(num_qubits: usize) -> Self {
        let mut state = Self::zeros(num_qubits);
        state.amplitudes[0] = Complex::one();
        state
    }

    /// New state with every amplitude zero, for fixtures to fill in directly
    ///
    /// # Panics
    /// If 2^num_qubits does not fit in `usize` (or the allocation fails)
    pub fn zeros(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            amplitudes: vec![Complex::zero(); dimension_for(num_qubits)],
        }
    }

    /// Equal superposition, every amplitude 1/√(2^n)
    ///
    /// # Panics
    /// Same size limit as [`StateVector::zeros`]
    pub fn uniform(num_qubits: usize) -> Self {
        let dimension = dimension_for(num_qubits);
        let amp = T::from_f64(1.0 / (dimension as f64).sqrt());
        Self {
            num_qubits,
            amplitudes: vec![Complex::new(amp, T::zero()); dimension],
        }
    }

    /// Build from explicit amplitudes
    ///
    /// # Errors
    /// Returns [`StateError::DimensionMismatch`] if the length is not a power
    /// of two
    pub fn from_amplitudes(amplitudes: Vec<Complex<T>>) -> Result<Self> {
        let len = amplitudes.len();
        if !len.is_power_of_two() {
            return Err(StateError::DimensionMismatch {
                expected: len.next_power_of_two(),
                actual: len,
            });
        }
        Ok(Self {
            num_qubits: len.trailing_zeros() as usize,
            amplitudes,
        })
    }

    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of amplitudes (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    #[inline]
    pub fn amplitudes(&self) -> &[Complex<T>] {
        &self.amplitudes
    }

    /// Mutable access to the raw amplitudes; the length stays fixed
    #[inline]
    pub fn amplitudes_mut(&mut self) -> &mut [Complex<T>] {
        &mut self.amplitudes
    }

    /// Σ|aᵢ|²
    pub fn norm_sqr(&self) -> T {
        kernels::norm_sqr(&self.amplitudes)
    }

    pub fn norm(&self) -> T {
        self.norm_sqr().sqrt()
    }

    /// Scale to unit norm; a zero vector is left unchanged
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > T::zero() {
            kernels::scale(&mut self.amplitudes, norm.recip());
        }
    }

    /// ⟨self|other⟩
    ///
    /// # Errors
    /// Returns [`StateError::DimensionMismatch`] for differing qubit counts
    pub fn inner_product(&self, other: &StateVector<T>) -> Result<Complex<T>> {
        self.check_same_size(other)?;
        Ok(self
            .amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .fold(Complex::zero(), |acc, (a, b)| acc + a.conj() * b))
    }

    /// Apply a named gate from the standard registry
    ///
    /// `qubits[0]` is the first argument (for `CNOT`, the control).
    ///
    /// # Errors
    /// - [`StateError::UnknownGate`] if the name is not registered or the
    ///   gate acts on a different number of qubits than given
    /// - [`StateError::InvalidQubitIndex`] for out-of-range or repeated qubits
    pub fn apply(&mut self, gate: &str, qubits: &[usize]) -> Result<()> {
        self.apply_from(GateRegistry::standard(), gate, qubits)
    }

    /// Apply a named gate resolved in `registry`
    pub fn apply_from(&mut self, registry: &GateRegistry, gate: &str, qubits: &[usize]) -> Result<()> {
        let unknown = || StateError::UnknownGate {
            name: gate.to_string(),
            num_qubits: qubits.len(),
        };
        let matrix = registry.lookup(gate).map_err(|_| unknown())?;
        if matrix.num_qubits() != qubits.len() {
            return Err(unknown());
        }
        self.apply_matrix(matrix, qubits)
    }

    /// Apply an arbitrary gate matrix to `qubits`
    ///
    /// # Errors
    /// - [`StateError::DimensionMismatch`] if the matrix acts on a different
    ///   number of qubits than given
    /// - [`StateError::InvalidQubitIndex`] for out-of-range or repeated qubits
    pub fn apply_matrix(&mut self, matrix: &GateMatrix, qubits: &[usize]) -> Result<()> {
        if matrix.num_qubits() != qubits.len() {
            return Err(StateError::DimensionMismatch {
                expected: matrix.num_qubits(),
                actual: qubits.len(),
            });
        }
        self.check_qubits(qubits)?;

        let entries: Vec<Complex<T>> = matrix
            .entries()
            .iter()
            .map(|c| Complex::new(T::from_f64(c.re), T::from_f64(c.im)))
            .collect();
        kernels::apply_matrix(&mut self.amplitudes, &entries, qubits);
        Ok(())
    }

    /// Apply a signed Pauli string to qubits `[offset, offset + len)`
    ///
    /// Equivalent to multiplying by the full tensor-product matrix (identity
    /// outside the range) including the sign.
    ///
    /// # Errors
    /// Returns [`StateError::InvalidQubitIndex`] if the string runs past the
    /// last qubit
    pub fn apply_pauli(&mut self, pauli: &PauliString, offset: usize) -> Result<()> {
        if offset
            .checked_add(pauli.len())
            .filter(|&end| end <= self.num_qubits)
            .is_none()
        {
            return Err(StateError::InvalidQubitIndex {
                index: offset.saturating_add(pauli.len().saturating_sub(1)),
                num_qubits: self.num_qubits,
            });
        }
        apply_unsigned(&mut self.amplitudes, pauli, offset);
        if pauli.is_negative() {
            kernels::scale(&mut self.amplitudes, -T::one());
        }
        Ok(())
    }

    /// Project onto the eigenspace of the unsigned Pauli whose eigenvalue is
    /// the string's sign, returning the outcome probability
    ///
    /// See [`StateVector::project_with`].
    pub fn project(&mut self, observable: &PauliString) -> Result<T> {
        self.project_with(observable, &CompareConfig::default())
    }

    /// Project onto `(I + sign·P)/2`, rescale, and return the probability
    ///
    /// The string acts on qubits `[0, len)`. The returned probability is
    /// ‖v′‖²/‖v‖² where v′ is the projected vector. When it is positive the
    /// vector is rescaled back to its prior norm, so projecting an eigenstate
    /// again returns 1 and leaves it unchanged. When it is below
    /// `config.zero_probability` the projected (degenerate) vector is kept and
    /// exactly 0 is returned; this is a valid outcome, not an error.
    ///
    /// # Errors
    /// Returns [`StateError::DimensionMismatch`] if the string spans more
    /// qubits than the state
    pub fn project_with(&mut self, observable: &PauliString, config: &CompareConfig) -> Result<T> {
        if observable.len() > self.num_qubits {
            return Err(StateError::DimensionMismatch {
                expected: self.num_qubits,
                actual: observable.len(),
            });
        }

        let before = self.norm_sqr();
        if before == T::zero() {
            return Ok(T::zero());
        }

        let mut flipped = self.amplitudes.clone();
        apply_unsigned(&mut flipped, observable, 0);

        let half = T::from_f64(0.5);
        let sign = if observable.is_negative() { -T::one() } else { T::one() };
        for (v, w) in self.amplitudes.iter_mut().zip(flipped.iter()) {
            *v = (*v + w.scale(sign)).scale(half);
        }

        let after = self.norm_sqr();
        let probability = after / before;
        if probability <= T::from_f64(config.zero_probability) {
            tracing::trace!(%observable, "projection onto zero-probability outcome");
            return Ok(T::zero());
        }

        kernels::scale(&mut self.amplitudes, (before / after).sqrt());
        tracing::trace!(%observable, probability = %probability, "projected");
        Ok(probability)
    }

    /// Compare with the default tolerance; see [`StateVector::approximate_equals_with`]
    pub fn approximate_equals(&self, other: &StateVector<T>, ignore_global_phase: bool) -> bool {
        self.approximate_equals_with(other, ignore_global_phase, &CompareConfig::default())
    }

    /// Amplitude-wise comparison within `config.tolerance`
    ///
    /// With `ignore_global_phase` the vectors are equal if some unit phase φ
    /// makes `φ·self` match `other`. φ is taken from the amplitude pair with
    /// the largest magnitude in either vector and then verified across the
    /// whole vector. States with differing qubit counts are never equal.
    pub fn approximate_equals_with(
        &self,
        other: &StateVector<T>,
        ignore_global_phase: bool,
        config: &CompareConfig,
    ) -> bool {
        if self.num_qubits != other.num_qubits {
            return false;
        }

        let phase = if ignore_global_phase {
            self.relative_phase(other)
        } else {
            Complex::one()
        };

        let tolerance = T::from_f64(config.tolerance);
        self.amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .all(|(a, b)| (*a * phase - *b).norm() <= tolerance)
    }

    /// Unit phase φ with φ·self[k] ∥ other[k] at the dominant index k
    fn relative_phase(&self, other: &StateVector<T>) -> Complex<T> {
        let dominant = self
            .amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| {
                let (na, nb) = (a.norm_sqr(), b.norm_sqr());
                (if na > nb { na } else { nb }, *a, *b)
            })
            .fold(None, |best: Option<(T, Complex<T>, Complex<T>)>, cur| match best {
                Some(b) if b.0 >= cur.0 => Some(b),
                _ => Some(cur),
            });

        match dominant {
            Some((_, a, b)) => {
                let ratio = b * a.conj();
                let magnitude = ratio.norm();
                if magnitude > T::zero() {
                    ratio.unscale(magnitude)
                } else {
                    Complex::one()
                }
            },
            None => Complex::one(),
        }
    }

    /// The joint +1 eigenstate of commuting, independent stabilizer generators
    ///
    /// Starts from the uniform superposition over `n` qubits and projects onto
    /// each generator in order. The result is defined up to global phase.
    /// An empty list yields the 0-qubit state `[1]`.
    ///
    /// # Errors
    /// - [`StateError::DimensionMismatch`] if generators differ in length
    /// - [`StateError::InconsistentStabilizers`] if any projection has zero
    ///   probability
    ///
    /// # Example
    /// ```
    /// use vecsim_state::{PauliString, StateVector};
    ///
    /// let generators: Vec<PauliString> = ["XXX", "ZZI", "IZZ"]
    ///     .iter()
    ///     .map(|s| s.parse().unwrap())
    ///     .collect();
    /// let ghz = StateVector::<f64>::from_stabilizers(&generators).unwrap();
    ///
    /// let mut expected = StateVector::zeros(3);
    /// expected.amplitudes_mut()[0].re = 0.5f64.sqrt();
    /// expected.amplitudes_mut()[7].re = 0.5f64.sqrt();
    /// assert!(ghz.approximate_equals(&expected, true));
    /// ```
    pub fn from_stabilizers(stabilizers: &[PauliString]) -> Result<Self> {
        Self::from_stabilizers_with(stabilizers, &CompareConfig::default())
    }

    pub fn from_stabilizers_with(stabilizers: &[PauliString], config: &CompareConfig) -> Result<Self> {
        let num_qubits = stabilizers.first().map_or(0, PauliString::len);
        if let Some(bad) = stabilizers.iter().find(|s| s.len() != num_qubits) {
            return Err(StateError::DimensionMismatch {
                expected: num_qubits,
                actual: bad.len(),
            });
        }

        let mut state = Self::uniform(num_qubits);
        state.project_stabilizers_with(stabilizers, config)?;
        Ok(state)
    }

    /// Project this state onto each stabilizer in order
    ///
    /// # Errors
    /// Returns [`StateError::InconsistentStabilizers`] at the first projection
    /// with zero probability; the state is left degenerate in that case.
    pub fn project_stabilizers(&mut self, stabilizers: &[PauliString]) -> Result<()> {
        self.project_stabilizers_with(stabilizers, &CompareConfig::default())
    }

    pub fn project_stabilizers_with(&mut self, stabilizers: &[PauliString], config: &CompareConfig) -> Result<()> {
        for (index, stabilizer) in stabilizers.iter().enumerate() {
            let probability = self.project_with(stabilizer, config)?;
            tracing::debug!(index, %stabilizer, probability = %probability, "stabilizer projection");
            if probability == T::zero() {
                tracing::warn!(index, %stabilizer, "stabilizer projection has zero probability");
                return Err(StateError::InconsistentStabilizers {
                    index,
                    stabilizer: stabilizer.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Ket label of basis index `index`, qubit 0 rightmost
    pub fn basis_label(&self, index: usize) -> String {
        (0..self.num_qubits)
            .rev()
            .map(|q| if (index >> q) & 1 == 1 { '1' } else { '0' })
            .collect()
    }

    fn check_same_size(&self, other: &StateVector<T>) -> Result<()> {
        if self.num_qubits != other.num_qubits {
            return Err(StateError::DimensionMismatch {
                expected: self.num_qubits,
                actual: other.num_qubits,
            });
        }
        Ok(())
    }

    fn check_qubits(&self, qubits: &[usize]) -> Result<()> {
        for (k, &q) in qubits.iter().enumerate() {
            if q >= self.num_qubits || qubits[..k].contains(&q) {
                return Err(StateError::InvalidQubitIndex {
                    index: q,
                    num_qubits: self.num_qubits,
                });
            }
        }
        Ok(())
    }
}

/// 2^num_qubits, panicking once the shift leaves `usize`
fn dimension_for(num_qubits: usize) -> usize {
    u32::try_from(num_qubits)
        .ok()
        .and_then(|bits| 1usize.checked_shl(bits))
        .unwrap_or_else(|| panic!("{} qubits exceed the addressable state size", num_qubits))
}

/// Apply the unsigned tensor product of `pauli` starting at `offset`
fn apply_unsigned<T: Real>(amplitudes: &mut [Complex<T>], pauli: &PauliString, offset: usize) {
    for (k, p) in pauli.paulis().iter().enumerate() {
        let qubit = offset + k;
        match p {
            Pauli::I => {},
            Pauli::X => kernels::apply_x(amplitudes, qubit),
            Pauli::Y => kernels::apply_y(amplitudes, qubit),
            Pauli::Z => kernels::apply_z(amplitudes, qubit),
        }
    }
}

impl<T: Real> fmt::Debug for StateVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateVector")
            .field("num_qubits", &self.num_qubits)
            .field("amplitudes", &self.amplitudes)
            .finish()
    }
}

impl<T: Real> fmt::Display for StateVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "StateVector ({} qubits, dim={}):", self.num_qubits, self.dimension())?;
        let cutoff = T::from_f64(1e-12);
        for (i, amp) in self.amplitudes.iter().enumerate() {
            if amp.norm_sqr() > cutoff {
                writeln!(f, "  |{}⟩  {:.6}{:+.6}i", self.basis_label(i), amp.re, amp.im)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    fn pauli(text: &str) -> PauliString {
        text.parse().unwrap()
    }

    #[test]
    fn test_initial_state() {
        for n in 0..5 {
            let state = StateVector::<f64>::new(n);
            assert_eq!(state.dimension(), 1 << n);
            assert_eq!(state.amplitudes()[0], c(1.0, 0.0));
            assert!(state.amplitudes()[1..].iter().all(|a| *a == c(0.0, 0.0)));
        }
    }

    #[test]
    fn test_uniform_is_normalized() {
        let state = StateVector::<f64>::uniform(3);
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(state.amplitudes()[5].re, 8f64.sqrt().recip(), epsilon = 1e-12);
    }

    #[test]
    fn test_from_amplitudes() {
        let state = StateVector::from_amplitudes(vec![c(0.5, 0.0); 4]).unwrap();
        assert_eq!(state.num_qubits(), 2);

        assert_eq!(
            StateVector::from_amplitudes(vec![c(1.0, 0.0); 3]),
            Err(StateError::DimensionMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_apply_unknown_gate() {
        let mut state = StateVector::<f64>::new(2);
        assert_eq!(
            state.apply("FOO", &[0]),
            Err(StateError::UnknownGate {
                name: "FOO".to_string(),
                num_qubits: 1
            })
        );
        // Registered, but for two qubits
        assert!(matches!(
            state.apply("CNOT", &[0]),
            Err(StateError::UnknownGate { num_qubits: 1, .. })
        ));
        assert!(matches!(
            state.apply("H", &[0, 1]),
            Err(StateError::UnknownGate { num_qubits: 2, .. })
        ));
        assert_eq!(state, StateVector::new(2));
    }

    #[test]
    fn test_apply_bad_qubits() {
        let mut state = StateVector::<f64>::new(2);
        assert!(matches!(
            state.apply("H", &[2]),
            Err(StateError::InvalidQubitIndex { index: 2, num_qubits: 2 })
        ));
        assert!(matches!(
            state.apply("CNOT", &[1, 1]),
            Err(StateError::InvalidQubitIndex { index: 1, .. })
        ));
    }

    #[test]
    fn test_apply_preserves_norm() {
        let mut state = StateVector::<f64>::new(3);
        state.apply("H", &[0]).unwrap();
        state.apply("SQRT_Y", &[1]).unwrap();
        state.apply("CY", &[0, 2]).unwrap();
        state.apply("ISWAP", &[2, 1]).unwrap();
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_apply_reversed_cnot() {
        // CNOT(1, 0) on |10⟩ (qubit 1 set, index 2) gives |11⟩ (index 3)
        let mut state = StateVector::<f64>::zeros(2);
        state.amplitudes_mut()[2] = c(1.0, 0.0);
        state.apply("CNOT", &[1, 0]).unwrap();
        assert_eq!(state.amplitudes()[3], c(1.0, 0.0));
        assert_eq!(state.amplitudes()[2], c(0.0, 0.0));
    }

    #[test]
    fn test_apply_pauli_out_of_range() {
        let mut state = StateVector::<f64>::new(2);
        assert!(matches!(
            state.apply_pauli(&pauli("XX"), 1),
            Err(StateError::InvalidQubitIndex { index: 2, num_qubits: 2 })
        ));
        assert!(matches!(
            state.apply_pauli(&pauli("X"), usize::MAX),
            Err(StateError::InvalidQubitIndex { index: usize::MAX, num_qubits: 2 })
        ));
        assert_eq!(state, StateVector::new(2));
    }

    #[test]
    #[should_panic(expected = "exceed the addressable state size")]
    fn test_zeros_beyond_address_space() {
        let _ = StateVector::<f64>::zeros(usize::BITS as usize);
    }

    #[test]
    fn test_apply_pauli_matches_gates() {
        let mut via_pauli = StateVector::<f64>::uniform(3);
        via_pauli.apply("S", &[1]).unwrap();
        let mut via_gates = via_pauli.clone();

        via_pauli.apply_pauli(&pauli("-YZ"), 1).unwrap();
        via_gates.apply("Y", &[1]).unwrap();
        via_gates.apply("Z", &[2]).unwrap();
        for a in via_gates.amplitudes_mut() {
            *a = -*a;
        }

        assert!(via_pauli.approximate_equals(&via_gates, false));
    }

    #[test]
    fn test_project_dimension_mismatch() {
        let mut state = StateVector::<f64>::new(1);
        assert!(matches!(
            state.project(&pauli("ZZ")),
            Err(StateError::DimensionMismatch { expected: 1, actual: 2 })
        ));
    }

    #[test]
    fn test_project_zero_probability_is_not_an_error() {
        let mut state = StateVector::<f64>::new(1);
        let p = state.project(&pauli("-Z")).unwrap();
        assert_eq!(p, 0.0);
        assert_relative_eq!(state.norm(), 0.0, epsilon = 1e-12);

        // Degenerate vector stays degenerate
        assert_eq!(state.project(&pauli("Z")).unwrap(), 0.0);
    }

    #[test]
    fn test_project_preserves_unnormalized_scale() {
        let mut state = StateVector::from_amplitudes(vec![c(2.0, 0.0), c(2.0, 0.0)]).unwrap();
        let p = state.project(&pauli("Z")).unwrap();
        assert_relative_eq!(p, 0.5, epsilon = 1e-12);
        assert_relative_eq!(state.norm_sqr(), 8.0, epsilon = 1e-12);
        assert_relative_eq!(state.amplitudes()[0].re, 8f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_project_shorter_string_acts_from_qubit_zero() {
        let mut state = StateVector::<f64>::uniform(2);
        let p = state.project(&pauli("-Z")).unwrap();
        assert_relative_eq!(p, 0.5, epsilon = 1e-12);
        let h = 0.5f64.sqrt();
        let expected = StateVector::from_amplitudes(vec![c(0.0, 0.0), c(h, 0.0), c(0.0, 0.0), c(h, 0.0)]).unwrap();
        assert!(state.approximate_equals(&expected, false));
    }

    #[test]
    fn test_approximate_equals_qubit_count() {
        let a = StateVector::<f64>::new(1);
        let b = StateVector::<f64>::new(2);
        assert!(!a.approximate_equals(&b, false));
        assert!(!a.approximate_equals(&b, true));
    }

    #[test]
    fn test_approximate_equals_arbitrary_phase() {
        let a = StateVector::<f64>::uniform(2);
        let mut b = a.clone();
        let phase = Complex::from_polar(1.0, 0.7);
        for amp in b.amplitudes_mut() {
            *amp *= phase;
        }
        assert!(!a.approximate_equals(&b, false));
        assert!(a.approximate_equals(&b, true));
        assert!(b.approximate_equals(&a, true));
    }

    #[test]
    fn test_approximate_equals_zero_vectors() {
        let a = StateVector::<f64>::zeros(2);
        let b = StateVector::<f64>::zeros(2);
        assert!(a.approximate_equals(&b, false));
        assert!(a.approximate_equals(&b, true));
        assert!(!a.approximate_equals(&StateVector::new(2), true));
    }

    #[test]
    fn test_approximate_equals_custom_tolerance() {
        let a = StateVector::<f64>::new(1);
        let mut b = a.clone();
        b.amplitudes_mut()[1] = c(1e-3, 0.0);
        assert!(!a.approximate_equals(&b, false));
        let loose = CompareConfig::new().tolerance(1e-2);
        assert!(a.approximate_equals_with(&b, false, &loose));
    }

    #[test]
    fn test_from_stabilizers_rejects_mixed_lengths() {
        let result = StateVector::<f64>::from_stabilizers(&[pauli("ZI"), pauli("Z")]);
        assert_eq!(
            result,
            Err(StateError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_from_stabilizers_inconsistent() {
        let result = StateVector::<f64>::from_stabilizers(&[pauli("ZI"), pauli("-ZI")]);
        assert_eq!(
            result,
            Err(StateError::InconsistentStabilizers {
                index: 1,
                stabilizer: "-ZI".to_string()
            })
        );
    }

    #[test]
    fn test_from_stabilizers_empty() {
        let state = StateVector::<f64>::from_stabilizers(&[]).unwrap();
        assert_eq!(state.num_qubits(), 0);
        assert_eq!(state.amplitudes(), &[c(1.0, 0.0)]);
    }

    #[test]
    fn test_project_stabilizers_from_custom_reference() {
        // |0⟩ has zero overlap with -Z but |+⟩ does not
        let mut state = StateVector::<f64>::new(1);
        state.apply("H", &[0]).unwrap();
        state.project_stabilizers(&[pauli("-Z")]).unwrap();
        let mut expected = StateVector::zeros(1);
        expected.amplitudes_mut()[1] = c(1.0, 0.0);
        assert!(state.approximate_equals(&expected, true));
    }

    #[test]
    fn test_inner_product() {
        let a = StateVector::<f64>::new(1);
        let mut b = StateVector::<f64>::new(1);
        b.apply("H", &[0]).unwrap();
        let ip = a.inner_product(&b).unwrap();
        assert_relative_eq!(ip.re, 0.5f64.sqrt(), epsilon = 1e-12);
        assert!(a.inner_product(&StateVector::new(2)).is_err());
    }

    #[test]
    fn test_normalize() {
        let mut state = StateVector::from_amplitudes(vec![c(3.0, 0.0), c(0.0, 4.0)]).unwrap();
        state.normalize();
        assert_relative_eq!(state.norm(), 1.0, epsilon = 1e-12);

        let mut zero = StateVector::<f64>::zeros(1);
        zero.normalize();
        assert_eq!(zero.norm(), 0.0);
    }

    #[test]
    fn test_display() {
        let mut state = StateVector::<f64>::new(2);
        state.apply("X", &[0]).unwrap();
        assert_eq!(state.basis_label(1), "01");
        let text = state.to_string();
        assert!(text.contains("|01⟩"));
        assert!(!text.contains("|00⟩"));
    }
}
