//! Signed Pauli strings
//!
//! A signed Pauli string is a sign (±1) and a tensor product of single-qubit
//! Paulis, written `[+|-]<I|X|Y|Z>+`. Character `k` after the sign acts on
//! qubit `offset + k`, so `"+XZ"` applied at offset 0 is X on qubit 0 and Z on
//! qubit 1.
//!
//! # Pauli Operators
//!
//! - I: Identity [[1,0],[0,1]]
//! - X: Bit flip [[0,1],[1,0]]
//! - Y: Bit and phase flip [[0,-i],[i,0]]
//! - Z: Phase flip [[1,0],[0,-1]]

use crate::error::{Result, StateError};
use std::fmt;
use std::str::FromStr;

/// Single-qubit Pauli operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pauli {
    I,
    X,
    Y,
    Z,
}

impl Pauli {
    /// Parse a Pauli label, `None` for anything outside `I`, `X`, `Y`, `Z`
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(Pauli::I),
            'X' => Some(Pauli::X),
            'Y' => Some(Pauli::Y),
            'Z' => Some(Pauli::Z),
            _ => None,
        }
    }

    /// Uppercase label of this Pauli
    pub fn to_char(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }

    /// Whether this Pauli anticommutes with `other` (distinct non-identity)
    pub fn anticommutes_with(self, other: Pauli) -> bool {
        self != Pauli::I && other != Pauli::I && self != other
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A sign and a tensor product of single-qubit Paulis
///
/// Immutable once built; [`PauliString::negated`] returns a new value.
///
/// # Example
/// ```
/// use vecsim_state::{Pauli, PauliString};
///
/// let p: PauliString = "-XYZ".parse().unwrap();
/// assert!(p.is_negative());
/// assert_eq!(p.len(), 3);
/// assert_eq!(p.get(1), Some(Pauli::Y));
/// assert_eq!(p.to_string(), "-XYZ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PauliString {
    negative: bool,
    paulis: Vec<Pauli>,
}

impl PauliString {
    /// Build from a sign flag and the per-qubit Paulis, qubit 0 first
    pub fn new(negative: bool, paulis: Vec<Pauli>) -> Self {
        Self { negative, paulis }
    }

    /// `+I…I` on `num_qubits` qubits
    pub fn identity(num_qubits: usize) -> Self {
        Self::new(false, vec![Pauli::I; num_qubits])
    }

    /// Parse `[+|-]<I|X|Y|Z>+`
    ///
    /// # Errors
    /// Returns [`StateError::InvalidPauliSyntax`] with the position of the
    /// first bad character, or the end of input if no label follows the sign.
    pub fn parse(text: &str) -> Result<Self> {
        let (negative, body, skipped) = match text.chars().next() {
            Some('+') => (false, &text[1..], 1),
            Some('-') => (true, &text[1..], 1),
            _ => (false, text, 0),
        };

        let syntax_error = |position: usize| StateError::InvalidPauliSyntax {
            input: text.to_string(),
            position,
        };

        if body.is_empty() {
            return Err(syntax_error(skipped));
        }

        let paulis = body
            .chars()
            .enumerate()
            .map(|(k, c)| Pauli::from_char(c).ok_or_else(|| syntax_error(skipped + k)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { negative, paulis })
    }

    /// Number of qubits spanned
    #[inline]
    pub fn len(&self) -> usize {
        self.paulis.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paulis.is_empty()
    }

    /// Pauli acting on position `k`
    pub fn get(&self, k: usize) -> Option<Pauli> {
        self.paulis.get(k).copied()
    }

    /// Per-qubit Paulis without the sign
    pub fn paulis(&self) -> &[Pauli] {
        &self.paulis
    }

    /// True when the overall sign is -1
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Same Paulis with the opposite sign
    pub fn negated(&self) -> Self {
        Self {
            negative: !self.negative,
            paulis: self.paulis.clone(),
        }
    }

    /// Whether the two (unsigned) operators commute
    ///
    /// Strings of different length are compared over their common prefix,
    /// the remainder being identity.
    pub fn commutes_with(&self, other: &PauliString) -> bool {
        let anticommuting = self
            .paulis
            .iter()
            .zip(other.paulis.iter())
            .filter(|(a, b)| a.anticommutes_with(**b))
            .count();
        anticommuting % 2 == 0
    }
}

impl FromStr for PauliString {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", if self.negative { '-' } else { '+' })?;
        for pauli in &self.paulis {
            write!(f, "{}", pauli)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PauliString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PauliString {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pauli_from_char() {
        assert_eq!(Pauli::from_char('I'), Some(Pauli::I));
        assert_eq!(Pauli::from_char('X'), Some(Pauli::X));
        assert_eq!(Pauli::from_char('Y'), Some(Pauli::Y));
        assert_eq!(Pauli::from_char('Z'), Some(Pauli::Z));
        assert_eq!(Pauli::from_char('x'), None);
        assert_eq!(Pauli::from_char('_'), None);
    }

    #[test]
    fn test_parse_signs() {
        let plus = PauliString::parse("+XZ").unwrap();
        let bare = PauliString::parse("XZ").unwrap();
        let minus = PauliString::parse("-XZ").unwrap();

        assert_eq!(plus, bare);
        assert!(!plus.is_negative());
        assert!(minus.is_negative());
        assert_eq!(minus.paulis(), &[Pauli::X, Pauli::Z]);
        assert_eq!(minus.negated(), plus);
    }

    #[test]
    fn test_parse_rejects_bad_characters() {
        assert_eq!(
            PauliString::parse("+XQZ"),
            Err(StateError::InvalidPauliSyntax {
                input: "+XQZ".to_string(),
                position: 2
            })
        );
        assert!(PauliString::parse("xz").is_err());
        assert!(PauliString::parse("X-Z").is_err());
        assert!(PauliString::parse("+-X").is_err());
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(
            PauliString::parse(""),
            Err(StateError::InvalidPauliSyntax { position: 0, .. })
        ));
        assert!(matches!(
            PauliString::parse("-"),
            Err(StateError::InvalidPauliSyntax { position: 1, .. })
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["+I", "-XYZ", "+IIZZ"] {
            let p: PauliString = text.parse().unwrap();
            assert_eq!(p.to_string(), text);
        }
        assert_eq!("YY".parse::<PauliString>().unwrap().to_string(), "+YY");
    }

    #[test]
    fn test_commutation() {
        let xx: PauliString = "XX".parse().unwrap();
        let zz: PauliString = "ZZ".parse().unwrap();
        let zi: PauliString = "ZI".parse().unwrap();
        let yyy: PauliString = "YYY".parse().unwrap();
        let zzi: PauliString = "ZZI".parse().unwrap();

        assert!(xx.commutes_with(&zz));
        assert!(!xx.commutes_with(&zi));
        assert!(yyy.commutes_with(&zzi));
        assert!(zi.commutes_with(&zi.negated()));
    }

    #[test]
    fn test_identity() {
        let id = PauliString::identity(3);
        assert_eq!(id.len(), 3);
        assert_eq!(id.to_string(), "+III");
        assert!(PauliString::identity(0).is_empty());
    }
}
