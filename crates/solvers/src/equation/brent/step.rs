/// The rule that produced a Brent step.
///
/// This names the rule that chose the step, not the size of the move. An
/// accepted interpolation step shorter than the current tolerance is still
/// reported as [`Step::Secant`] or [`Step::InverseQuadratic`] even though
/// the solver moves exactly one tolerance toward the contrapoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Halve the bracket toward the contrapoint.
    Bisection,

    /// Secant through the two most recent points.
    Secant,

    /// Inverse quadratic interpolation through three distinct points.
    InverseQuadratic,
}

impl Step {
    /// Returns true for the interpolating steps.
    #[must_use]
    pub fn is_interpolation(self) -> bool {
        matches!(self, Self::Secant | Self::InverseQuadratic)
    }
}
