use thiserror::Error;

/// Absolute x tolerance used by [`find_root_default`](super::find_root_default).
pub const DEFAULT_X_ABS_TOL: f64 = 1e-6;

/// Default iteration limit.
///
/// Bisecting an `f64` bracket from `f64::MAX` wide down to the smallest
/// subnormal spacing takes about 2100 halvings, and Brent's method needs at
/// most a few times the bisection count. Well-posed inputs converge before
/// this limit.
pub const DEFAULT_MAX_ITERS: usize = 10_000;

/// Configuration for the Brent solver.
///
/// The effective x tolerance at each iteration is
/// `2 * f64::EPSILON * |b| + x_abs_tol`, where `b` is the current best estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_abs_tol: f64,
    residual_tol: f64,
}

/// Errors that can occur when validating a Brent solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("residual_tol must be finite and non-negative")]
    Residual,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: DEFAULT_MAX_ITERS,
            x_abs_tol: DEFAULT_X_ABS_TOL,
            residual_tol: 0.0,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// A `residual_tol` of zero stops only on an exact zero.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn new(max_iters: usize, x_abs_tol: f64, residual_tol: f64) -> Result<Self, ConfigError> {
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::Residual);
        }

        Ok(Self {
            max_iters,
            x_abs_tol,
            residual_tol,
        })
    }

    /// Returns a copy with a different iteration limit.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy with a different absolute x tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_abs_tol` is negative or non-finite.
    pub fn with_x_abs_tol(self, x_abs_tol: f64) -> Result<Self, ConfigError> {
        Self::new(self.max_iters, x_abs_tol, self.residual_tol)
    }

    /// Returns a copy with a different residual tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual_tol` is negative or non-finite.
    pub fn with_residual_tol(self, residual_tol: f64) -> Result<Self, ConfigError> {
        Self::new(self.max_iters, self.x_abs_tol, residual_tol)
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the absolute tolerance for x convergence.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the residual magnitude at or below which a point counts as a root.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn default_matches_default_tolerance() {
        let config = Config::default();
        assert_eq!(config.max_iters(), DEFAULT_MAX_ITERS);
        assert_relative_eq!(config.x_abs_tol(), DEFAULT_X_ABS_TOL);
        assert_relative_eq!(config.residual_tol(), 0.0);
    }

    #[test]
    fn rejects_bad_x_tolerance() {
        assert_eq!(Config::new(10, -1.0, 0.0), Err(ConfigError::XAbs));
        assert_eq!(Config::new(10, f64::NAN, 0.0), Err(ConfigError::XAbs));
        assert_eq!(
            Config::default().with_x_abs_tol(f64::INFINITY),
            Err(ConfigError::XAbs)
        );
    }

    #[test]
    fn rejects_bad_residual_tolerance() {
        assert_eq!(Config::new(10, 0.0, -1e-3), Err(ConfigError::Residual));
        assert_eq!(
            Config::default().with_residual_tol(f64::NAN),
            Err(ConfigError::Residual)
        );
    }

    #[test]
    fn zero_tolerances_are_valid() {
        let config = Config::new(0, 0.0, 0.0).expect("valid config");
        assert_eq!(config.max_iters(), 0);
    }

    #[test]
    fn builders_keep_other_fields() {
        let config = Config::default()
            .with_max_iters(7)
            .with_x_abs_tol(1e-9)
            .expect("valid tolerance");

        assert_eq!(config.max_iters(), 7);
        assert_relative_eq!(config.x_abs_tol(), 1e-9);
        assert_relative_eq!(config.residual_tol(), 0.0);
    }
}
