use std::convert::Infallible;

/// A callable model that maps an input to an output.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

/// Wraps a scalar function `f(x)` as an infallible [`Model`].
///
/// Pair it with [`ZeroOf`](crate::ZeroOf) to search for a zero of `f`.
#[derive(Debug, Clone, Copy)]
pub struct FnModel<F> {
    function: F,
}

impl<F> FnModel<F>
where
    F: Fn(f64) -> f64,
{
    /// Creates a model that evaluates `function`.
    pub const fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Model for FnModel<F>
where
    F: Fn(f64) -> f64,
{
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Self::Error> {
        Ok((self.function)(*input))
    }
}

impl<F> From<F> for FnModel<F>
where
    F: Fn(f64) -> f64,
{
    fn from(function: F) -> Self {
        Self::new(function)
    }
}
