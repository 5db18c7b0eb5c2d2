//! This module contains the relaxation engine and its owning facade.
//!
//! It includes the pure Jacobi iteration in `jacobi`, the `SolverOptions`
//! controlling tolerance and iteration budget, and the `LaplaceSolver`
//! facade that owns the grid, boundary state, and convergence diagnostics.

mod implementation;
mod options;

pub mod jacobi;

pub use implementation::LaplaceSolver;
pub use options::SolverOptions;
