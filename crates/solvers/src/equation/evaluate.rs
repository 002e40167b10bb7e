use thiserror::Error;

use zeroin_core::{EquationProblem, Model, Snapshot};

/// The result of evaluating a scalar equation problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O> {
    pub x: f64,
    pub residual: f64,
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an equation problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// Failed to construct input or compute the residual.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output>,
    EvalError<<M as Model>::Error, <P as EquationProblem<1>>::Error>,
>;

/// Evaluates the model in the context of a scalar equation problem.
///
/// Maps `x` to a model input, calls the model, then computes the residual
/// from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or residual computation fails.
pub fn evaluate<M, P>(model: &M, problem: &P, x: f64) -> EvaluateResult<M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&[x]).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let [residual] = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residual,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use zeroin_core::{FnModel, ZeroOf};

    #[derive(Debug, Error)]
    #[error("x must be positive, got {0}")]
    struct NotPositive(f64);

    /// Takes a logarithm, so only positive inputs are valid.
    struct LogProblem;

    impl EquationProblem<1> for LogProblem {
        type Input = f64;
        type Output = f64;
        type Error = NotPositive;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            if x[0] > 0.0 {
                Ok(x[0].ln())
            } else {
                Err(NotPositive(x[0]))
            }
        }

        fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
            Ok([output - 1.0])
        }
    }

    #[derive(Debug, Error)]
    #[error("model refused")]
    struct Refused;

    struct Refuses;

    impl Model for Refuses {
        type Input = f64;
        type Output = f64;
        type Error = Refused;

        fn call(&self, _input: &f64) -> Result<f64, Self::Error> {
            Err(Refused)
        }
    }

    #[test]
    fn evaluates_residual_and_snapshot() {
        let model = FnModel::new(|x: f64| 3.0 * x);
        let eval = evaluate(&model, &ZeroOf, 2.0).expect("infallible");

        assert_relative_eq!(eval.x, 2.0);
        assert_relative_eq!(eval.residual, 6.0);
        assert_relative_eq!(eval.snapshot.input, 2.0);
        assert_relative_eq!(eval.snapshot.output, 6.0);
    }

    #[test]
    fn problem_error_is_reported() {
        let model = FnModel::new(|x: f64| x);
        let result = evaluate(&model, &LogProblem, -1.0);
        assert!(matches!(result, Err(EvalError::Problem(NotPositive(_)))));
    }

    #[test]
    fn model_error_is_reported() {
        let result = evaluate(&Refuses, &LogProblem, 1.0);
        assert!(matches!(result, Err(EvalError::Model(Refused))));
    }

    #[test]
    fn infallible_pair_never_errors() {
        let model = FnModel::new(f64::sin);
        let result: Result<_, EvalError<Infallible, Infallible>> = evaluate(&model, &ZeroOf, 0.5);
        assert!(result.is_ok());
    }
}
