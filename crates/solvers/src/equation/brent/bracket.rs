use thiserror::Error;

use super::Point;

/// Errors that can occur when validating a bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
    /// Residual signs do not bracket a root.
    #[error("no sign change")]
    NoSignChange,
}

/// Finite, distinct bracket endpoints in the caller's order.
///
/// Brent's method treats the two endpoints symmetrically, so they are not
/// reordered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    first: f64,
    second: f64,
}

impl Bounds {
    /// Validates the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [first, second] = bracket;

        if !first.is_finite() || !second.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if first == second {
            return Err(BracketError::ZeroWidth);
        }

        Ok(Self { first, second })
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.first, self.second]
    }
}

/// Checks that two evaluated endpoints have residuals of strictly opposite sign.
///
/// Endpoints with an exact zero residual are roots and must be handled before
/// calling this.
///
/// # Errors
///
/// Returns `BracketError::NoSignChange` if both residuals share a sign.
pub(super) fn check_sign_change(first: &Point, second: &Point) -> Result<(), BracketError> {
    // signum avoids the underflow in a naive `f(a) * f(b) < 0` check
    #[allow(clippy::float_cmp)]
    if first.residual.signum() == second.residual.signum() {
        return Err(BracketError::NoSignChange);
    }
    Ok(())
}
