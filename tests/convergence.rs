mod common;

use common::{assert_all_close, assert_all_finite, max_abs_dev, snapshot};
use efield::{BoundaryConditions, LaplaceSolver, SolverOptions};

#[test]
fn test_constant_bc_converges_to_constant() {
    let c = 5.0;
    let mut solver = LaplaceSolver::new(25)
        .unwrap()
        .with_boundaries(&BoundaryConditions::uniform(c))
        .unwrap()
        .with_options(SolverOptions {
            tolerance: 1e-6,
            max_iterations: 5_000,
        });

    let info = solver.solve();
    assert!(info.max_diff < 1e-6);
    assert_all_close(solver.potential(), c, 1e-3, "potential");

    // Field threshold scales with how far the potential still is from the
    // exact constant solution.
    let delta_v = max_abs_dev(solver.potential(), c);
    let threshold = (10.0 * delta_v).max(1e-6);
    let field = solver.electric_field().unwrap();
    assert_all_close(field.ex.as_ref(), 0.0, threshold, "Ex");
    assert_all_close(field.ey.as_ref(), 0.0, threshold, "Ey");
}

#[test]
fn test_constant_bc_invariance_holds_at_minimum_size() {
    for n in [3usize, 4, 7] {
        let c = -2.5;
        let mut solver = LaplaceSolver::new(n)
            .unwrap()
            .with_boundaries(&BoundaryConditions::uniform(c))
            .unwrap()
            .with_options(SolverOptions {
                tolerance: 1e-9,
                max_iterations: 10_000,
            });
        let info = solver.solve();
        assert!(info.converged(), "size {} did not converge", n);
        assert_all_close(solver.potential(), c, 1e-6, "potential");
    }
}

#[test]
fn test_shapes_and_field_finite() {
    let mut solver = LaplaceSolver::new(31)
        .unwrap()
        .with_boundaries(&BoundaryConditions {
            left: Some(0.0.into()),
            right: Some(10.0.into()),
            top: Some(0.0.into()),
            bottom: Some(0.0.into()),
        })
        .unwrap()
        .with_options(SolverOptions {
            tolerance: 1e-5,
            max_iterations: 20_000,
        });

    solver.solve();

    let potential = solver.potential();
    let field = solver.electric_field().unwrap();
    assert_eq!(potential.nrows(), 31);
    assert_eq!(potential.ncols(), 31);
    assert_eq!(field.ex.nrows(), 31);
    assert_eq!(field.ex.ncols(), 31);
    assert_eq!(field.ey.nrows(), 31);
    assert_eq!(field.ey.ncols(), 31);

    assert_all_finite(potential, "potential");
    assert_all_finite(field.ex.as_ref(), "Ex");
    assert_all_finite(field.ey.as_ref(), "Ey");

    let center = field.ex[(15, 15)].hypot(field.ey[(15, 15)]);
    assert!(center.is_finite());
}

#[test]
fn test_identical_solves_are_bit_identical() {
    let build = || {
        LaplaceSolver::new(21)
            .unwrap()
            .with_boundaries(&BoundaryConditions {
                left: Some(1.0.into()),
                right: Some((0..21).map(|i| i as f64).collect::<Vec<_>>().into()),
                ..Default::default()
            })
            .unwrap()
            .with_options(SolverOptions {
                tolerance: 1e-7,
                max_iterations: 8_000,
            })
    };

    let mut first = build();
    let mut second = build();
    let info_a = first.solve();
    let info_b = second.solve();

    assert_eq!(info_a, info_b);
    let a = snapshot(first.potential());
    let b = snapshot(second.potential());
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn test_hitting_the_cap_returns_a_normal_result() {
    let mut solver = LaplaceSolver::new(41)
        .unwrap()
        .with_boundaries(&BoundaryConditions {
            left: Some(100.0.into()),
            ..Default::default()
        })
        .unwrap()
        .with_options(SolverOptions {
            tolerance: 1e-12,
            max_iterations: 5,
        });

    let info = solver.solve();
    assert_eq!(info.iterations, 5);
    assert!(info.max_diff >= info.tolerance);
    assert!(!info.converged());
    // The best-effort grid is still usable data.
    assert_all_finite(solver.potential(), "potential");
    assert_all_finite(solver.electric_field().unwrap().ex.as_ref(), "Ex");
}

#[test]
fn test_spacing_scales_the_field_not_the_potential() {
    let conditions = BoundaryConditions {
        right: Some(10.0.into()),
        ..Default::default()
    };
    let run = |h: f64| {
        let mut solver = LaplaceSolver::new(15)
            .unwrap()
            .with_spacing(h)
            .unwrap()
            .with_boundaries(&conditions)
            .unwrap()
            .with_options(SolverOptions {
                tolerance: 1e-9,
                max_iterations: 50_000,
            });
        solver.solve();
        let field = solver.electric_field().unwrap();
        (snapshot(solver.potential()), field)
    };

    let (v1, f1) = run(1.0);
    let (v2, f2) = run(2.0);

    // The relaxation never sees h; doubling it halves every gradient.
    assert_eq!(v1, v2);
    for i in 0..15 {
        for j in 0..15 {
            assert!((f1.ex[(i, j)] - 2.0 * f2.ex[(i, j)]).abs() < 1e-12);
            assert!((f1.ey[(i, j)] - 2.0 * f2.ey[(i, j)]).abs() < 1e-12);
        }
    }
}
