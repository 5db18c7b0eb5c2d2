use faer::MatRef;

/// Largest absolute deviation of any grid node from `value`.
pub fn max_abs_dev(grid: MatRef<'_, f64>, value: f64) -> f64 {
    let mut max = 0.0f64;
    for i in 0..grid.nrows() {
        for j in 0..grid.ncols() {
            max = max.max((grid[(i, j)] - value).abs());
        }
    }
    max
}

pub fn assert_all_close(grid: MatRef<'_, f64>, value: f64, atol: f64, what: &str) {
    let dev = max_abs_dev(grid, value);
    assert!(
        dev <= atol,
        "{} deviates from {} by {:.3e} (allowed {:.3e})",
        what,
        value,
        dev,
        atol
    );
}

pub fn assert_all_finite(grid: MatRef<'_, f64>, what: &str) {
    for i in 0..grid.nrows() {
        for j in 0..grid.ncols() {
            assert!(
                grid[(i, j)].is_finite(),
                "{} has a non-finite value at ({}, {})",
                what,
                i,
                j
            );
        }
    }
}

/// Row-major copy used to snapshot solver state across mutation attempts.
pub fn snapshot(grid: MatRef<'_, f64>) -> Vec<f64> {
    let mut values = Vec::with_capacity(grid.nrows() * grid.ncols());
    for i in 0..grid.nrows() {
        for j in 0..grid.ncols() {
            values.push(grid[(i, j)]);
        }
    }
    values
}
