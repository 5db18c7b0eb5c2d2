//! This module implements the `LaplaceSolver` facade.
//!
//! The facade owns all mutable solver state: the potential grid, the
//! normalized boundary spec, the spatial step, the solver options, and the
//! diagnostics of the most recent solve. Every mutation goes through a
//! declared operation, so there is no ambient shared solver state anywhere
//! in the library; callers wanting parallel solves simply build independent
//! facades. One facade integrates the leaf modules: `grid` for allocation,
//! `boundary` for normalization and imposition, `solver::jacobi` for the
//! relaxation itself, and `field` for the derived electric field.

use super::jacobi;
use super::options::SolverOptions;
use crate::boundary::BoundarySpec;
use crate::error::EfieldError;
use crate::field;
use crate::grid::allocate_potential;
use crate::types::{BoundaryConditions, ConvergenceInfo, ElectricField};
use faer::{Mat, MatRef};

/// A steady-state 2D electrostatic solver on a square grid.
///
/// The solver discretizes the Laplace equation with the 5-point stencil and
/// relaxes it with the Jacobi method under fixed Dirichlet boundary
/// voltages. Construction allocates a zeroed grid, normalizes the boundary
/// values, and imposes them; the interior stays zero until the first call to
/// [`solve`](Self::solve).
///
/// # Examples
///
/// ```
/// use efield::{BoundaryConditions, LaplaceSolver, SolverOptions};
///
/// let conditions = BoundaryConditions {
///     left: Some(10.0.into()),
///     ..Default::default()
/// };
/// let mut solver = LaplaceSolver::new(25)
///     .unwrap()
///     .with_boundaries(&conditions)
///     .unwrap()
///     .with_options(SolverOptions {
///         tolerance: 1e-6,
///         max_iterations: 5_000,
///     });
///
/// let info = solver.solve();
/// assert!(info.converged());
///
/// let potential = solver.potential();
/// let field = solver.electric_field().unwrap();
/// assert_eq!(field.ex.nrows(), potential.nrows());
/// ```
pub struct LaplaceSolver {
    n: usize,
    h: f64,
    potential: Mat<f64>,
    boundary: BoundarySpec,
    options: SolverOptions,
    info: ConvergenceInfo,
}

impl LaplaceSolver {
    /// Creates a solver for an `n` x `n` grid with all edges grounded,
    /// unit spacing, and default [`SolverOptions`].
    ///
    /// The convergence record starts at a sentinel (0 iterations, infinite
    /// `max_diff`, zero tolerance) so that [`convergence`](Self::convergence)
    /// never reports a solve that did not happen.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::InvalidSize`] when `n < 3`.
    pub fn new(n: usize) -> Result<Self, EfieldError> {
        let potential = allocate_potential(n)?;
        let boundary = BoundarySpec::normalize(n, &BoundaryConditions::default())?;
        let mut solver = Self {
            n,
            h: 1.0,
            potential,
            boundary,
            options: SolverOptions::default(),
            info: ConvergenceInfo::sentinel(),
        };
        solver.boundary.impose(&mut solver.potential);
        Ok(solver)
    }

    /// Replaces the construction-time boundary values.
    ///
    /// Sides missing from `conditions` are grounded at 0.0. The new values
    /// are imposed on the (still zero-interior) grid immediately.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::InvalidBoundaryLength`] if a supplied profile
    /// does not have exactly `n` values.
    pub fn with_boundaries(mut self, conditions: &BoundaryConditions) -> Result<Self, EfieldError> {
        self.boundary = BoundarySpec::normalize(self.n, conditions)?;
        self.boundary.impose(&mut self.potential);
        Ok(self)
    }

    /// Sets the uniform spatial step used when deriving the electric field.
    ///
    /// The step is fixed for the lifetime of the solver, which is why this
    /// is a construction-time builder rather than a setter.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::InvalidStep`] when `h` is not a positive
    /// finite number.
    pub fn with_spacing(mut self, h: f64) -> Result<Self, EfieldError> {
        if !(h > 0.0 && h.is_finite()) {
            return Err(EfieldError::InvalidStep { h });
        }
        self.h = h;
        Ok(self)
    }

    /// Configures the solver with custom relaxation options.
    pub fn with_options(mut self, options: SolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the relaxation options for subsequent solves.
    pub fn set_options(&mut self, options: SolverOptions) {
        self.options = options;
    }

    /// Updates any subset of the four boundary edges.
    ///
    /// Sides missing from `conditions` keep their previous values — unlike
    /// [`with_boundaries`](Self::with_boundaries), where a missing side means
    /// grounded. The merged spec is imposed on the current grid immediately,
    /// without re-solving, so a subsequent [`electric_field`](Self::electric_field)
    /// already sees the new edges.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::InvalidBoundaryLength`] if a supplied profile
    /// does not have exactly `n` values; in that case the solver's state is
    /// left exactly as it was.
    pub fn set_boundaries(&mut self, conditions: &BoundaryConditions) -> Result<(), EfieldError> {
        // Normalize fully before committing anything.
        let merged = self.boundary.merged(conditions)?;
        self.boundary = merged;
        self.boundary.impose(&mut self.potential);
        Ok(())
    }

    /// Runs the Jacobi relaxation from the current grid and boundaries.
    ///
    /// The owned grid is replaced by the relaxed one and the convergence
    /// record by the new diagnostics, which are also returned. Hitting the
    /// iteration cap is not an error: inspect the returned record's
    /// `max_diff` (or [`ConvergenceInfo::converged`]) to detect a solve that
    /// fell short of its tolerance.
    pub fn solve(&mut self) -> ConvergenceInfo {
        let (relaxed, info) = jacobi::relax(&self.potential, &self.boundary, &self.options);
        self.potential = relaxed;
        self.info = info;
        info
    }

    /// Derives the electric field E = -grad(V) from the current potential.
    ///
    /// Valid at any time, including before the first solve, in which case it
    /// reflects the boundary-only grid with a zero interior.
    ///
    /// # Errors
    ///
    /// Returns [`EfieldError::InvalidStep`] if the solver was somehow built
    /// with an invalid step; with the builder API this cannot happen.
    pub fn electric_field(&self) -> Result<ElectricField, EfieldError> {
        field::electric_field(&self.potential, self.h)
    }

    /// A read-only view of the current potential grid.
    pub fn potential(&self) -> MatRef<'_, f64> {
        self.potential.as_ref()
    }

    /// The grid dimension N.
    pub fn size(&self) -> usize {
        self.n
    }

    /// The uniform spatial step.
    pub fn spacing(&self) -> f64 {
        self.h
    }

    /// The normalized boundary spec currently in force.
    pub fn boundary(&self) -> &BoundarySpec {
        &self.boundary
    }

    /// The relaxation options used by [`solve`](Self::solve).
    pub fn options(&self) -> SolverOptions {
        self.options
    }

    /// The diagnostics of the most recent solve (or the sentinel record if
    /// no solve has run yet).
    pub fn convergence(&self) -> ConvergenceInfo {
        self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_imposes_boundaries() {
        let conditions = BoundaryConditions {
            top: Some(3.0.into()),
            ..Default::default()
        };
        let solver = LaplaceSolver::new(4)
            .unwrap()
            .with_boundaries(&conditions)
            .unwrap();
        let v = solver.potential();
        assert_eq!(v[(0, 1)], 3.0);
        assert_eq!(v[(1, 1)], 0.0);
        assert_eq!(solver.convergence(), ConvergenceInfo::sentinel());
    }

    #[test]
    fn test_rejects_undersized_grid() {
        assert!(matches!(
            LaplaceSolver::new(2),
            Err(EfieldError::InvalidSize { n: 2 })
        ));
    }

    #[test]
    fn test_rejects_invalid_spacing() {
        let result = LaplaceSolver::new(5).unwrap().with_spacing(-0.5);
        assert!(matches!(result, Err(EfieldError::InvalidStep { .. })));
    }

    #[test]
    fn test_field_before_solve_uses_boundary_only_grid() {
        let solver = LaplaceSolver::new(5)
            .unwrap()
            .with_boundaries(&BoundaryConditions::uniform(0.0))
            .unwrap();
        let field = solver.electric_field().unwrap();
        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(field.ex[(i, j)], 0.0);
                assert_eq!(field.ey[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn test_set_boundaries_reimposes_without_solving() {
        let mut solver = LaplaceSolver::new(5).unwrap();
        solver
            .set_boundaries(&BoundaryConditions {
                right: Some(7.0.into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(solver.potential()[(2, 4)], 7.0);
        // No solve happened: the record is still the sentinel.
        assert_eq!(solver.convergence().iterations, 0);
    }

    #[test]
    fn test_solve_replaces_convergence_record() {
        let mut solver = LaplaceSolver::new(9)
            .unwrap()
            .with_boundaries(&BoundaryConditions::uniform(1.0))
            .unwrap()
            .with_options(SolverOptions {
                tolerance: 1e-8,
                max_iterations: 5_000,
            });
        let info = solver.solve();
        assert_eq!(info, solver.convergence());
        assert!(info.converged());
        assert!(info.iterations >= 1);
    }
}
