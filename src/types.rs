//! This module defines the core value types of the `efield` library.
//!
//! It includes the `BoundaryValue` sum type for scalar-or-profile Dirichlet
//! specifications, the `BoundaryConditions` record used for construction and
//! partial updates, the `ConvergenceInfo` diagnostics produced by each solve,
//! and the `ElectricField` pair derived from a potential grid. These types
//! form the public vocabulary shared by the solver facade, the boundary
//! machinery, and any presentation layer consuming the engine.

use faer::Mat;
use serde::Deserialize;

/// A Dirichlet boundary value for one edge of the grid.
///
/// An edge may be held at a single voltage (`Uniform`, broadcast to every
/// node of the edge) or at a per-node distribution (`Profile`, which must
/// contain exactly one value per edge node). Resolving this sum type into a
/// concrete length-N profile happens once, in the boundary normalizer, so
/// downstream components only ever see one shape.
///
/// The type deserializes from TOML as either a bare number or an array,
/// which lets configuration files write `left = 10.0` and
/// `top = [0.0, 1.0, 0.0]` interchangeably.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BoundaryValue {
    /// A single voltage applied to every node of the edge.
    Uniform(f64),
    /// One voltage per edge node; the length must equal the grid size.
    Profile(Vec<f64>),
}

impl From<f64> for BoundaryValue {
    fn from(value: f64) -> Self {
        BoundaryValue::Uniform(value)
    }
}

impl From<Vec<f64>> for BoundaryValue {
    fn from(values: Vec<f64>) -> Self {
        BoundaryValue::Profile(values)
    }
}

/// A possibly-partial specification of the four Dirichlet edges.
///
/// Each side is optional so the same type serves two purposes: at
/// construction time a missing side means "grounded" (0.0), while in
/// [`LaplaceSolver::set_boundaries`](crate::LaplaceSolver::set_boundaries)
/// a missing side means "keep the previous values".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundaryConditions {
    /// Values for column 0.
    pub left: Option<BoundaryValue>,
    /// Values for the last column.
    pub right: Option<BoundaryValue>,
    /// Values for row 0.
    pub top: Option<BoundaryValue>,
    /// Values for the last row.
    pub bottom: Option<BoundaryValue>,
}

impl BoundaryConditions {
    /// Creates a specification holding all four edges at the same voltage.
    pub fn uniform(value: f64) -> Self {
        Self {
            left: Some(BoundaryValue::Uniform(value)),
            right: Some(BoundaryValue::Uniform(value)),
            top: Some(BoundaryValue::Uniform(value)),
            bottom: Some(BoundaryValue::Uniform(value)),
        }
    }
}

/// Diagnostics from one run of the relaxation solver.
///
/// The facade keeps only the record from its most recent solve. A solve that
/// exhausted its iteration budget without meeting the tolerance is reported
/// through this record rather than as an error: `max_diff >= tolerance`
/// identifies that case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceInfo {
    /// The number of Jacobi sweeps performed.
    pub iterations: u32,
    /// The L-infinity norm of the difference between the last two iterates.
    pub max_diff: f64,
    /// The stopping tolerance the solve was asked to meet.
    pub tolerance: f64,
}

impl ConvergenceInfo {
    /// The record held by a freshly constructed solver, before any solve.
    pub(crate) fn sentinel() -> Self {
        Self {
            iterations: 0,
            max_diff: f64::INFINITY,
            tolerance: 0.0,
        }
    }

    /// Whether the last solve met its tolerance within the iteration budget.
    pub fn converged(&self) -> bool {
        self.max_diff < self.tolerance
    }
}

/// The two Cartesian components of the electric field on the grid.
///
/// Derived from a potential grid as E = -grad(V); both components have the
/// same shape as the potential they were derived from. The field is a
/// throwaway value recomputed on each request, never stored by the solver.
#[derive(Debug, Clone)]
pub struct ElectricField {
    /// The x component, -dV/dx (varying along columns).
    pub ex: Mat<f64>,
    /// The y component, -dV/dy (varying along rows).
    pub ey: Mat<f64>,
}
