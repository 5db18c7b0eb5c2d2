use super::cli::{Cli, Quantity};
use super::error::CliError;
use super::io;
use efield::{BoundaryConditions, LaplaceSolver, SolverOptions};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;

pub fn run(args: Cli) -> Result<(), CliError> {
    let mut conditions: BoundaryConditions = if let Some(config_path) = &args.boundary.config {
        let content = fs::read_to_string(config_path).map_err(|e| CliError::Io {
            path: config_path.clone(),
            source: e,
        })?;
        toml::from_str(&content)?
    } else {
        BoundaryConditions::default()
    };

    // Scalar flags take precedence over the config file, side by side.
    if let Some(v) = args.boundary.left {
        conditions.left = Some(v.into());
    }
    if let Some(v) = args.boundary.right {
        conditions.right = Some(v.into());
    }
    if let Some(v) = args.boundary.top {
        conditions.top = Some(v.into());
    }
    if let Some(v) = args.boundary.bottom {
        conditions.bottom = Some(v.into());
    }

    let options = SolverOptions {
        tolerance: args.solver.tolerance,
        max_iterations: args.solver.max_iterations,
    };

    let mut solver = LaplaceSolver::new(args.grid.size)?
        .with_spacing(args.grid.spacing)?
        .with_boundaries(&conditions)?
        .with_options(options);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message("Relaxing potential...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let info = solver.solve();

    pb.finish_and_clear();

    if !info.converged() {
        eprintln!(
            "Warning: not converged after {} iterations (max diff {:.3e} >= tolerance {:.3e})",
            info.iterations, info.max_diff, info.tolerance
        );
    }

    let field = match args.output.quantity {
        Quantity::Potential => None,
        Quantity::Field | Quantity::Both => Some(solver.electric_field()?),
    };

    let writer = io::get_writer(&args.output.output)?;
    io::write_results(
        writer,
        &solver,
        field.as_ref(),
        &args.output.format,
        args.output.quantity,
        args.output.precision,
    )?;

    Ok(())
}
