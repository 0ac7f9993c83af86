//! Floating-point precision of state amplitudes

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Real component type of a state vector's complex amplitudes
///
/// Implemented for `f32` and `f64`. Gate matrices are stored as exact `f64`
/// constants and narrowed through [`Real::from_f64`] when applied.
pub trait Real: Float + Debug + Display + Default + Send + Sync + 'static {
    fn from_f64(value: f64) -> Self;
}

impl Real for f32 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }
}
