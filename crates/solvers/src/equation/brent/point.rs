/// An abscissa with its evaluated residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The residual at x.
    pub residual: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }

    /// Returns true if this point's residual is strictly smaller in magnitude.
    #[must_use]
    pub fn is_better_than(&self, other: &Point) -> bool {
        self.residual.abs() < other.residual.abs()
    }
}
