use super::cli::{OutputFormat, Quantity};
use super::error::CliError;
use efield::{ElectricField, LaplaceSolver};
use faer::MatRef;
use prettytable::*;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

pub fn write_results(
    mut writer: Box<dyn Write>,
    solver: &LaplaceSolver,
    field: Option<&ElectricField>,
    format: &OutputFormat,
    quantity: Quantity,
    precision: usize,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_summary(&mut writer, solver, field, precision),
        OutputFormat::Csv => write_csv(&mut writer, solver, field, quantity, precision),
        OutputFormat::Json => write_json(&mut writer, solver, field, quantity, precision),
    }
}

fn grid_min_max(grid: MatRef<'_, f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for i in 0..grid.nrows() {
        for j in 0..grid.ncols() {
            min = min.min(grid[(i, j)]);
            max = max.max(grid[(i, j)]);
        }
    }
    (min, max)
}

fn max_field_magnitude(field: &ElectricField) -> f64 {
    let mut max = 0.0f64;
    for i in 0..field.ex.nrows() {
        for j in 0..field.ex.ncols() {
            max = max.max(field.ex[(i, j)].hypot(field.ey[(i, j)]));
        }
    }
    max
}

fn write_pretty_summary(
    writer: &mut dyn Write,
    solver: &LaplaceSolver,
    field: Option<&ElectricField>,
    precision: usize,
) -> Result<(), CliError> {
    let box_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let info = solver.convergence();
    let (v_min, v_max) = grid_min_max(solver.potential());

    let mut title_table = Table::new();
    title_table.set_format(box_format);
    title_table.add_row(row![bc->"Efield Laplace Relaxation Results"]);
    title_table.print(writer)?;
    writeln!(writer)?;

    let mut summary_table = Table::new();
    summary_table.set_format(box_format);
    summary_table.add_row(row![b->"Grid Size:", format!("{0} x {0}", solver.size())]);
    summary_table.add_row(row![b->"Spacing:", format!("{:.prec$}", solver.spacing(), prec = precision)]);
    summary_table.add_row(row![b->"Iterations:", info.iterations]);
    summary_table.add_row(row![b->"Max Diff:", format!("{:.3e}", info.max_diff)]);
    summary_table.add_row(row![b->"Tolerance:", format!("{:.3e}", info.tolerance)]);
    summary_table.add_row(row![b->"Converged:", if info.converged() { "yes" } else { "no" }]);
    summary_table
        .add_row(row![b->"Potential Min:", format!("{:.prec$} V", v_min, prec = precision)]);
    summary_table
        .add_row(row![b->"Potential Max:", format!("{:.prec$} V", v_max, prec = precision)]);
    if let Some(field) = field {
        summary_table.add_row(row![b->"Max |E|:", format!("{:.prec$} V/m", max_field_magnitude(field), prec = precision)]);
    }
    summary_table.print(writer)?;

    writeln!(writer)?;
    writeln!(
        writer,
        "Use --format csv or --format json for the full grids."
    )?;

    Ok(())
}

fn write_csv(
    writer: &mut dyn Write,
    solver: &LaplaceSolver,
    field: Option<&ElectricField>,
    quantity: Quantity,
    precision: usize,
) -> Result<(), CliError> {
    match quantity {
        Quantity::Potential => writeln!(writer, "row,col,potential")?,
        Quantity::Field => writeln!(writer, "row,col,ex,ey")?,
        Quantity::Both => writeln!(writer, "row,col,potential,ex,ey")?,
    }

    let potential = solver.potential();
    for i in 0..solver.size() {
        for j in 0..solver.size() {
            write!(writer, "{},{}", i, j)?;
            if quantity != Quantity::Field {
                write!(writer, ",{:.*}", precision, potential[(i, j)])?;
            }
            if let Some(field) = field {
                write!(
                    writer,
                    ",{:.*},{:.*}",
                    precision,
                    field.ex[(i, j)],
                    precision,
                    field.ey[(i, j)]
                )?;
            }
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn write_grid_json(
    writer: &mut dyn Write,
    name: &str,
    grid: MatRef<'_, f64>,
    precision: usize,
    trailing_comma: bool,
) -> Result<(), CliError> {
    writeln!(writer, "  \"{}\": [", name)?;
    for i in 0..grid.nrows() {
        write!(writer, "    [")?;
        for j in 0..grid.ncols() {
            if j > 0 {
                write!(writer, ", ")?;
            }
            write!(writer, "{:.*}", precision, grid[(i, j)])?;
        }
        let comma = if i < grid.nrows() - 1 { "," } else { "" };
        writeln!(writer, "]{}", comma)?;
    }
    writeln!(writer, "  ]{}", if trailing_comma { "," } else { "" })?;
    Ok(())
}

fn write_json(
    writer: &mut dyn Write,
    solver: &LaplaceSolver,
    field: Option<&ElectricField>,
    quantity: Quantity,
    precision: usize,
) -> Result<(), CliError> {
    let info = solver.convergence();

    writeln!(writer, "{{")?;
    writeln!(writer, "  \"size\": {},", solver.size())?;
    writeln!(writer, "  \"spacing\": {},", solver.spacing())?;
    writeln!(writer, "  \"convergence\": {{")?;
    writeln!(writer, "    \"iterations\": {},", info.iterations)?;
    // Infinite only when the solve ran zero sweeps; null keeps the JSON valid.
    if info.max_diff.is_finite() {
        writeln!(writer, "    \"max_diff\": {:e},", info.max_diff)?;
    } else {
        writeln!(writer, "    \"max_diff\": null,")?;
    }
    writeln!(writer, "    \"tolerance\": {:e},", info.tolerance)?;
    writeln!(
        writer,
        "    \"converged\": {}",
        if info.converged() { "true" } else { "false" }
    )?;
    writeln!(writer, "  }},")?;

    let with_potential = quantity != Quantity::Field;
    if with_potential {
        write_grid_json(
            writer,
            "potential",
            solver.potential(),
            precision,
            field.is_some(),
        )?;
    }
    if let Some(field) = field {
        write_grid_json(writer, "ex", field.ex.as_ref(), precision, true)?;
        write_grid_json(writer, "ey", field.ey.as_ref(), precision, false)?;
    }

    writeln!(writer, "}}")?;
    Ok(())
}
