use std::convert::Infallible;

use approx::assert_relative_eq;

use zeroin_core::{EquationProblem, FnModel, Model, ZeroOf};
use zeroin_solvers::equation::brent::{self, Config, Event, Status, Step};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Ideal gas in a rigid tank: pressure from temperature.
struct RigidTank {
    /// Moles of gas.
    moles: f64,
    /// Volume in m³.
    volume: f64,
}

const GAS_CONSTANT: f64 = 8.314_462_618;

impl Model for RigidTank {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, temperature: &f64) -> Result<f64, Self::Error> {
        Ok(self.moles * GAS_CONSTANT * temperature / self.volume)
    }
}

/// Finds the temperature at which the tank reaches a target pressure.
struct TargetPressure {
    pressure: f64,
}

impl EquationProblem<1> for TargetPressure {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _temperature: &f64, pressure: &f64) -> Result<[f64; 1], Self::Error> {
        // Relative residual keeps the scale near one.
        Ok([pressure / self.pressure - 1.0])
    }
}

#[test]
fn solves_tank_temperature() {
    init_logging();

    let tank = RigidTank {
        moles: 2.0,
        volume: 0.05,
    };
    let problem = TargetPressure { pressure: 101_325.0 };
    let expected = 101_325.0 * 0.05 / (2.0 * GAS_CONSTANT);

    let config = Config::default().with_x_abs_tol(1e-9).expect("valid");
    let solution =
        brent::solve_unobserved(&tank, &problem, [200.0, 400.0], &config).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.x, expected, epsilon = 1e-8);
    assert_relative_eq!(solution.snapshot.output, 101_325.0, max_relative = 1e-10);
}

#[test]
fn linear_tank_model_needs_no_bisection_after_the_first_secant() {
    init_logging();

    let tank = RigidTank {
        moles: 1.0,
        volume: 1.0,
    };
    let problem = TargetPressure { pressure: 2_500.0 };

    let mut steps = Vec::new();
    let observer = |event: &Event<'_, RigidTank, TargetPressure>| {
        if let Event::Evaluated { step, .. } = event {
            steps.push(*step);
        }
        None
    };

    let solution = brent::solve(&tank, &problem, [100.0, 1_000.0], &Config::default(), observer)
        .expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.iters <= 3, "took {} iterations", solution.iters);
    assert_eq!(steps.first(), Some(&Step::Secant));
}

#[test]
fn converged_roots_have_small_residuals() {
    init_logging();

    let cases: [(fn(f64) -> f64, f64, f64); 5] = [
        (|x: f64| x * x - 2.0, 0.0, 2.0),
        (|x: f64| x * x * x - x - 2.0, 1.0, 2.0),
        (|x: f64| x.cos() - x, 0.0, 1.0),
        (|x: f64| x.exp() - 10.0, 0.0, 5.0),
        (|x: f64| x.ln() + x, 0.1, 1.0),
    ];

    for (f, a, b) in cases {
        let root = brent::find_root(f, a, b, 1e-12).expect("should converge");
        assert!(root >= a.min(b) && root <= a.max(b));
        assert!(f(root).abs() < 1e-9, "f({root}) = {}", f(root));
    }
}

#[test]
fn scalar_and_model_entry_points_agree() {
    init_logging();

    let f = |x: f64| x.tanh() - 0.5;
    let root = brent::find_root(f, -3.0, 3.0, 1e-10).expect("should converge");

    let config = Config::default().with_x_abs_tol(1e-10).expect("valid");
    let solution = brent::solve_unobserved(&FnModel::new(f), &ZeroOf, [-3.0, 3.0], &config)
        .expect("should solve");

    assert_eq!(root.to_bits(), solution.x.to_bits());
    assert_relative_eq!(root, 0.5_f64.atanh(), epsilon = 1e-9);
}

#[test]
fn errors_render_readable_messages() {
    let err = brent::find_root(|x| x * x + 1.0, -1.0, 1.0, 1e-6).expect_err("no sign change");
    assert_eq!(err.to_string(), "invalid bracket: no sign change");

    let err = brent::find_root(|x| x, -1.0, 1.0, f64::NAN).expect_err("bad tolerance");
    assert_eq!(
        err.to_string(),
        "invalid config: x_abs_tol must be finite and non-negative"
    );
}
