pub mod boundary;
pub mod error;
pub mod field;
pub mod grid;
pub mod solver;
pub mod types;

pub use boundary::BoundarySpec;
pub use error::EfieldError;
pub use field::electric_field;
pub use solver::{LaplaceSolver, SolverOptions};
pub use types::{BoundaryConditions, BoundaryValue, ConvergenceInfo, ElectricField};
