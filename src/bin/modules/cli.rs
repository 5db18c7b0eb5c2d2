use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

const ABOUT: &str =
    "A command-line tool for solving the 2D electrostatic Laplace equation with Dirichlet \
     boundaries and deriving the electric field from the converged potential.";

#[derive(Parser)]
#[command(version, about = ABOUT)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub grid: GridOptions,

    #[command(flatten)]
    pub boundary: BoundaryOptions,

    #[command(flatten)]
    pub solver: SolverArgs,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// Options describing the discretization.
#[derive(Args)]
#[command(next_help_heading = "Grid Options")]
pub struct GridOptions {
    /// Number of nodes per grid dimension (the grid is size x size).
    ///
    /// Must be at least 3 so the grid has an interior node.
    #[arg(short = 'n', long, default_value_t = 41)]
    pub size: usize,

    /// Uniform spatial step between neighboring nodes.
    #[arg(long, default_value_t = 1.0)]
    pub spacing: f64,
}

/// Options fixing the Dirichlet boundary voltages.
#[derive(Args)]
#[command(next_help_heading = "Boundary Options")]
pub struct BoundaryOptions {
    /// Voltage held on the left edge (column 0).
    #[arg(long)]
    pub left: Option<f64>,

    /// Voltage held on the right edge (last column).
    #[arg(long)]
    pub right: Option<f64>,

    /// Voltage held on the top edge (row 0).
    #[arg(long)]
    pub top: Option<f64>,

    /// Voltage held on the bottom edge (last row).
    #[arg(long)]
    pub bottom: Option<f64>,

    /// TOML file with boundary conditions.
    ///
    /// Each of `left`, `right`, `top`, `bottom` may be a number (uniform
    /// edge) or an array with one value per edge node. Scalar flags given on
    /// the command line override the corresponding sides from this file.
    /// Sides specified nowhere are grounded at 0.
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Options for controlling the relaxation.
#[derive(Args)]
#[command(next_help_heading = "Solver Options")]
pub struct SolverArgs {
    /// Convergence tolerance on the maximum nodal change per sweep.
    #[arg(long, default_value_t = 1e-5)]
    pub tolerance: f64,

    /// Maximum number of Jacobi sweeps allowed.
    #[arg(long, default_value_t = 10_000)]
    pub max_iterations: u32,
}

/// Options for controlling the output format and destination.
#[derive(Args)]
#[command(next_help_heading = "Output Options")]
pub struct OutputOptions {
    /// Output file path.
    ///
    /// If not specified, results are written to standard output.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format for the results.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Which derived quantities to include in csv/json output.
    #[arg(short, long, value_enum, default_value_t = Quantity::Potential)]
    pub quantity: Quantity,

    /// Number of decimal places to display for floating-point values.
    #[arg(short, long, default_value_t = 6)]
    pub precision: usize,
}

/// Output format for the solve results.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Summary table with grid, solver, and convergence figures.
    Pretty,
    /// Comma-separated values, one line per grid node.
    Csv,
    /// JSON object with nested arrays for the grids.
    Json,
}

/// Quantities included in full-grid output.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Quantity {
    /// The potential grid only.
    Potential,
    /// The electric field components only.
    Field,
    /// Potential and field components together.
    Both,
}
