//! Numeric thresholds for comparison and projection

/// Thresholds used by approximate comparison and projective measurement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareConfig {
    /// Maximum Euclidean distance between two amplitudes that still counts
    /// as equal.
    ///
    /// Default: 1e-4
    pub tolerance: f64,

    /// Relative squared-norm below which a projection is treated as landing
    /// in a zero-probability outcome.
    ///
    /// Default: 1e-8
    pub zero_probability: f64,
}

impl CompareConfig {
    pub const fn new() -> Self {
        Self {
            tolerance: 1e-4,
            zero_probability: 1e-8,
        }
    }

    /// Set the amplitude tolerance
    pub const fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the zero-probability threshold
    pub const fn zero_probability(mut self, threshold: f64) -> Self {
        self.zero_probability = threshold;
        self
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::new()
    }
}
