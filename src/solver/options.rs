//! This module defines configuration options for the relaxation solver.
//!
//! It provides the `SolverOptions` struct controlling the convergence
//! criterion and the iteration budget of the Jacobi relaxation. These two
//! numbers set the trade-off between solution accuracy and worst-case
//! latency: a solve runs for at most `max_iterations` sweeps regardless of
//! how slowly it is converging.

/// Numerical settings for one relaxation solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverOptions {
    /// The stopping tolerance for the L-infinity convergence metric.
    ///
    /// The solver stops as soon as the maximum absolute nodal change between
    /// two successive sweeps falls below this value. Must be positive to be
    /// reachable; a non-positive tolerance makes every solve run to the
    /// iteration cap.
    pub tolerance: f64,
    /// The maximum number of Jacobi sweeps allowed.
    ///
    /// Exhausting the budget is not an error: the solver returns its current
    /// iterate together with the final metric, and callers compare
    /// `max_diff` against `tolerance` to detect the shortfall. This cap is
    /// the sole bound on solve latency.
    pub max_iterations: u32,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            tolerance: 1.0e-5,
            max_iterations: 10_000,
        }
    }
}
