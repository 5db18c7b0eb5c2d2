//! This module implements the Jacobi relaxation of the discrete Laplace
//! equation.
//!
//! Each sweep replaces every interior node with the arithmetic mean of its
//! four axis neighbors taken from the *previous* iterate, then re-imposes the
//! Dirichlet boundaries. Because no node ever reads a value written during
//! the same sweep, the result is independent of traversal order and
//! bit-for-bit reproducible for identical inputs. For the diagonally
//! dominant discrete Laplacian with fixed boundaries the iteration converges
//! monotonically, so the only safeguard needed is the iteration cap.

use super::options::SolverOptions;
use crate::boundary::BoundarySpec;
use crate::types::ConvergenceInfo;
use faer::Mat;

/// Relaxes `initial` under the given boundaries until the L-infinity change
/// between sweeps drops below `options.tolerance` or the iteration budget is
/// spent.
///
/// The input grid is not modified; the converged (or best-effort) grid is
/// returned together with the diagnostics of the run. Reaching
/// `max_iterations` without meeting the tolerance is a silent
/// non-convergence: the returned [`ConvergenceInfo`] carries
/// `iterations == max_iterations` and a `max_diff` at or above the
/// tolerance, and it is up to the caller to treat that as a warning.
///
/// `initial` must be square with the same edge length as `boundary`.
pub fn relax(
    initial: &Mat<f64>,
    boundary: &BoundarySpec,
    options: &SolverOptions,
) -> (Mat<f64>, ConvergenceInfo) {
    let n = boundary.len();
    debug_assert_eq!(initial.nrows(), n);
    debug_assert_eq!(initial.ncols(), n);

    let mut current = initial.clone();
    boundary.impose(&mut current);

    let mut iterations = 0;
    let mut max_diff = f64::INFINITY;

    for k in 1..=options.max_iterations {
        let mut next = current.clone();
        for i in 1..n - 1 {
            for j in 1..n - 1 {
                next[(i, j)] = 0.25
                    * (current[(i, j + 1)]
                        + current[(i, j - 1)]
                        + current[(i + 1, j)]
                        + current[(i - 1, j)]);
            }
        }
        boundary.impose(&mut next);

        let mut diff: f64 = 0.0;
        for i in 0..n {
            for j in 0..n {
                diff = diff.max((next[(i, j)] - current[(i, j)]).abs());
            }
        }

        current = next;
        iterations = k;
        max_diff = diff;

        if diff < options.tolerance {
            break;
        }
    }

    (
        current,
        ConvergenceInfo {
            iterations,
            max_diff,
            tolerance: options.tolerance,
        },
    )
}
