//! This module normalizes and imposes Dirichlet boundary conditions.
//!
//! User-facing boundary input arrives as the scalar-or-profile
//! [`BoundaryValue`] sum type; the normalizer resolves it once into four
//! fixed-length edge profiles held by [`BoundarySpec`], so the relaxation
//! solver and the facade only ever deal with one concrete shape. Imposition
//! writes those profiles into the outer ring of a potential grid in place,
//! in a fixed, documented order.

use crate::error::EfieldError;
use crate::types::{BoundaryConditions, BoundaryValue};
use faer::Mat;

/// Resolves a scalar-or-profile boundary value into a length-`n` profile.
///
/// A `Uniform` value is broadcast to all `n` edge nodes; a `Profile` is
/// returned as-is after its length is checked.
///
/// # Errors
///
/// Returns [`EfieldError::InvalidBoundaryLength`] when a profile's length is
/// not exactly `n`.
pub fn edge_profile(n: usize, value: &BoundaryValue) -> Result<Vec<f64>, EfieldError> {
    match value {
        BoundaryValue::Uniform(v) => Ok(vec![*v; n]),
        BoundaryValue::Profile(values) => {
            if values.len() != n {
                return Err(EfieldError::InvalidBoundaryLength {
                    expected: n,
                    actual: values.len(),
                });
            }
            Ok(values.clone())
        }
    }
}

/// The four normalized Dirichlet edges of an N x N grid.
///
/// Under the `(row = y, col = x)` convention, `left` is column 0, `right`
/// the last column, `top` row 0, and `bottom` the last row. All four
/// profiles have length N.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySpec {
    left: Vec<f64>,
    right: Vec<f64>,
    top: Vec<f64>,
    bottom: Vec<f64>,
}

impl BoundarySpec {
    /// Normalizes a full set of boundary conditions for a grid of size `n`.
    ///
    /// Sides missing from `conditions` are held at 0.0 (grounded).
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::InvalidBoundaryLength`] if any supplied profile
    /// does not have exactly `n` values. No partial spec is produced.
    pub fn normalize(n: usize, conditions: &BoundaryConditions) -> Result<Self, EfieldError> {
        let grounded = BoundaryValue::Uniform(0.0);
        Ok(Self {
            left: edge_profile(n, conditions.left.as_ref().unwrap_or(&grounded))?,
            right: edge_profile(n, conditions.right.as_ref().unwrap_or(&grounded))?,
            top: edge_profile(n, conditions.top.as_ref().unwrap_or(&grounded))?,
            bottom: edge_profile(n, conditions.bottom.as_ref().unwrap_or(&grounded))?,
        })
    }

    /// Produces a new spec with the sides named in `conditions` replaced and
    /// the omitted sides carried over from `self`.
    ///
    /// All replacement profiles are normalized before anything is combined,
    /// so an invalid profile leaves no trace: `self` is untouched and no new
    /// spec is returned.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::InvalidBoundaryLength`] if any supplied profile
    /// does not have exactly `n` values.
    pub fn merged(&self, conditions: &BoundaryConditions) -> Result<Self, EfieldError> {
        let n = self.len();
        let resolve = |side: &Option<BoundaryValue>, previous: &[f64]| match side {
            Some(value) => edge_profile(n, value),
            None => Ok(previous.to_vec()),
        };
        Ok(Self {
            left: resolve(&conditions.left, &self.left)?,
            right: resolve(&conditions.right, &self.right)?,
            top: resolve(&conditions.top, &self.top)?,
            bottom: resolve(&conditions.bottom, &self.bottom)?,
        })
    }

    /// Writes the four edges into the outer ring of `grid`, in place.
    ///
    /// The order is fixed: left, right, top, bottom. The four corner nodes
    /// belong to two edges each, so the last writer wins there; with this
    /// order that is whichever of top/bottom was applied last (bottom for
    /// the bottom corners, top for the top corners overwriting left/right).
    /// This tie-break is part of the contract; corners are deliberately not
    /// averaged. Re-applying with identical profiles leaves `grid` unchanged.
    ///
    /// The grid must be `n` x `n` for the spec's edge length `n`.
    pub fn impose(&self, grid: &mut Mat<f64>) {
        let n = self.len();
        debug_assert_eq!(grid.nrows(), n);
        debug_assert_eq!(grid.ncols(), n);
        for i in 0..n {
            grid[(i, 0)] = self.left[i];
        }
        for i in 0..n {
            grid[(i, n - 1)] = self.right[i];
        }
        for j in 0..n {
            grid[(0, j)] = self.top[j];
        }
        for j in 0..n {
            grid[(n - 1, j)] = self.bottom[j];
        }
    }

    /// The edge length N shared by all four profiles.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Always false: a spec can only be built for grids of size 3 or more.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// The profile for column 0.
    pub fn left(&self) -> &[f64] {
        &self.left
    }

    /// The profile for the last column.
    pub fn right(&self) -> &[f64] {
        &self.right
    }

    /// The profile for row 0.
    pub fn top(&self) -> &[f64] {
        &self.top
    }

    /// The profile for the last row.
    pub fn bottom(&self) -> &[f64] {
        &self.bottom
    }
}
