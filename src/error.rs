use thiserror::Error;

/// The primary error type for all fallible operations in the `efield` library.
///
/// Every variant corresponds to an invalid input rejected at the point of the
/// offending call; nothing is retried internally and no partial state is left
/// behind. Failing to converge within the iteration budget is deliberately
/// *not* represented here: the solver returns its best-effort grid together
/// with a [`ConvergenceInfo`](crate::ConvergenceInfo) record, and callers
/// decide whether `max_diff >= tolerance` deserves a warning.
#[derive(Error, Debug)]
pub enum EfieldError {
    /// The requested grid dimension is too small to contain an interior node.
    ///
    /// The 5-point stencil needs at least one node that is not on the
    /// boundary, so the grid must be at least 3x3.
    #[error("Grid size must be at least 3 to have an interior node, got {n}")]
    InvalidSize {
        /// The rejected grid dimension.
        n: usize,
    },

    /// A per-node boundary profile does not match the grid edge length.
    ///
    /// Boundary values may be given either as a single scalar (broadcast
    /// along the edge) or as a profile with exactly one value per edge node.
    /// Anything else is rejected before any state is modified.
    #[error("Boundary profile length must equal the grid size {expected}, got {actual}")]
    InvalidBoundaryLength {
        /// The grid dimension the profile must match.
        expected: usize,
        /// The length of the rejected profile.
        actual: usize,
    },

    /// The spatial step is not a positive finite number.
    ///
    /// The step appears in the denominator of every gradient formula, so a
    /// zero, negative, or non-finite value cannot produce a meaningful field.
    #[error("Spatial step must be positive and finite, got {h}")]
    InvalidStep {
        /// The rejected step value.
        h: f64,
    },
}
