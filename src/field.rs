//! This module derives the electric field from a potential grid.
//!
//! The field is the negated numerical gradient of the potential, E = -grad(V),
//! evaluated with centered differences in the interior and second-order
//! one-sided formulas on the first and last row/column (there are no ghost
//! nodes outside the domain). Both formulas are exact for affine potentials,
//! which is what makes the constant-field sanity checks in the test suite
//! exact rather than approximate.

use crate::error::EfieldError;
use crate::grid::MIN_GRID_SIZE;
use crate::types::ElectricField;
use faer::Mat;

/// Computes the electric field E = -grad(V) on a uniform grid with step `h`.
///
/// Both returned components have the same shape as `potential`. Under the
/// `(row = y, col = x)` convention, `ex` differentiates along columns and
/// `ey` along rows. The interior uses the centered difference
/// `(v[k+1] - v[k-1]) / (2h)`; the edges use the one-sided second-order
/// stencil `(-3 v[0] + 4 v[1] - v[2]) / (2h)` and its mirror image.
///
/// This is a pure function: it allocates the two output grids and touches
/// nothing else.
///
/// # Errors
///
/// Returns [`EfieldError::InvalidStep`] when `h` is not a positive finite
/// number, and [`EfieldError::InvalidSize`] when either dimension of
/// `potential` is below 3 (the edge stencil needs three nodes per axis).
pub fn electric_field(potential: &Mat<f64>, h: f64) -> Result<ElectricField, EfieldError> {
    if !(h > 0.0 && h.is_finite()) {
        return Err(EfieldError::InvalidStep { h });
    }
    let rows = potential.nrows();
    let cols = potential.ncols();
    if rows < MIN_GRID_SIZE || cols < MIN_GRID_SIZE {
        return Err(EfieldError::InvalidSize { n: rows.min(cols) });
    }

    let scale = 1.0 / (2.0 * h);
    let mut ex = Mat::zeros(rows, cols);
    let mut ey = Mat::zeros(rows, cols);

    for i in 0..rows {
        ex[(i, 0)] = -scale
            * (-3.0 * potential[(i, 0)] + 4.0 * potential[(i, 1)] - potential[(i, 2)]);
        for j in 1..cols - 1 {
            ex[(i, j)] = -scale * (potential[(i, j + 1)] - potential[(i, j - 1)]);
        }
        ex[(i, cols - 1)] = -scale
            * (3.0 * potential[(i, cols - 1)] - 4.0 * potential[(i, cols - 2)]
                + potential[(i, cols - 3)]);
    }

    for j in 0..cols {
        ey[(0, j)] = -scale
            * (-3.0 * potential[(0, j)] + 4.0 * potential[(1, j)] - potential[(2, j)]);
        for i in 1..rows - 1 {
            ey[(i, j)] = -scale * (potential[(i + 1, j)] - potential[(i - 1, j)]);
        }
        ey[(rows - 1, j)] = -scale
            * (3.0 * potential[(rows - 1, j)] - 4.0 * potential[(rows - 2, j)]
                + potential[(rows - 3, j)]);
    }

    Ok(ElectricField { ex, ey })
}
