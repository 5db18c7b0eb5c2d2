//! This module allocates the square potential grid used by the solver.
//!
//! The grid is a plain dense `faer::Mat<f64>` indexed `(row = y, col = x)`.
//! Allocation is the only place where the minimum-size rule is enforced:
//! every other component may assume a grid that came out of here has at
//! least one interior node.

use crate::error::EfieldError;
use faer::Mat;

/// The smallest grid dimension with at least one interior node.
pub const MIN_GRID_SIZE: usize = 3;

/// Allocates an `n` x `n` potential grid initialized to zero.
///
/// The grid represents a uniform discretization of a square region; boundary
/// values are applied afterwards by [`BoundarySpec::impose`](crate::BoundarySpec::impose).
///
/// # Errors
///
/// Returns [`EfieldError::InvalidSize`] when `n` is smaller than
/// [`MIN_GRID_SIZE`], since the 5-point stencil has nothing to update on a
/// grid made entirely of boundary nodes.
pub fn allocate_potential(n: usize) -> Result<Mat<f64>, EfieldError> {
    if n < MIN_GRID_SIZE {
        return Err(EfieldError::InvalidSize { n });
    }
    Ok(Mat::zeros(n, n))
}
