use crate::expression::ROUNDING_SCALE;

/// Configuration for the exhaustive search
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Search permutations on the rayon thread pool. Results are merged in
    /// permutation order, so the output matches a sequential run.
    pub parallel: bool,
    /// Evaluated values are rounded to `1 / rounding_scale` before the
    /// integer check
    pub rounding_scale: f64,
}

impl SolverConfig {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            rounding_scale: ROUNDING_SCALE,
        }
    }
}
