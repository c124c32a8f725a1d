//! Fixed-point iteration for discrete maps.
//!
//! # Algorithm
//!
//! Starting from an initial input, the solver repeatedly calls the model,
//! measures the change produced by that call with
//! [`FixedPointProblem::residual`], and builds the next input with
//! [`IterationProblem::next_input`]:
//!
//! ```text
//! x_{n+1} = g(x_n)    until    residual(x_n, g(x_n)) <= tol
//! ```
//!
//! At least one model call is always made, so the returned snapshot holds the
//! output of a real step even when the initial input is already a fixed point.
//!
//! # Termination
//!
//! The loop ends when the residual is within tolerance ([`Status::Converged`]),
//! when [`Config::max_iters`] model calls have been made ([`Status::MaxIters`]),
//! or when the observer returns [`Action::StopEarly`]. A map that oscillates or
//! diverges therefore always returns.
//!
//! [`IterationProblem::next_input`]: daisyworld_core::IterationProblem::next_input

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use daisyworld_core::{FixedPointProblem, Model, Observer, Snapshot};

/// Iterates the model until the problem's residual falls within tolerance.
///
/// The observer receives an [`Event`] after every model call and may return
/// [`Action::StopEarly`] to end the iteration with the latest snapshot.
///
/// # Errors
///
/// Returns an error if the model or problem fails, or if a residual is not
/// finite.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: FixedPointProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    let mut input = initial;
    let mut iter = 0;

    loop {
        iter += 1;

        let output = model.call(&input).map_err(Error::model)?;
        let residual = problem
            .residual(&input, &output)
            .map_err(Error::problem)?;

        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { iter, residual });
        }

        let snapshot = Snapshot::new(input, output);

        let event = Event {
            iter,
            residual,
            snapshot: &snapshot,
        };

        let status = if let Some(Action::StopEarly) = observer.observe(&event) {
            Some(Status::StoppedByObserver)
        } else if residual <= config.residual_tol() {
            Some(Status::Converged)
        } else if iter >= config.max_iters() {
            Some(Status::MaxIters)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                residual,
                snapshot,
                iters: iter,
            });
        }

        input = problem
            .next_input(&snapshot.input, &snapshot.output)
            .map_err(Error::problem)?;
    }
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns an error if the model or problem fails, or if a residual is not
/// finite.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: FixedPointProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, initial, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use daisyworld_core::IterationProblem;

    /// Model for `g(x) = a * x + b`, with fixed point `b / (1 - a)`.
    struct Affine {
        a: f64,
        b: f64,
    }

    impl Model for Affine {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(self.a * input + self.b)
        }
    }

    /// Feeds each output back in and measures the absolute step.
    struct Feedback;

    impl IterationProblem for Feedback {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn next_input(&self, _input: &f64, output: &f64) -> Result<f64, Infallible> {
            Ok(*output)
        }
    }

    impl FixedPointProblem for Feedback {
        fn residual(&self, input: &f64, output: &f64) -> Result<f64, Infallible> {
            Ok((output - input).abs())
        }
    }

    #[test]
    fn converges_on_contraction() {
        let model = Affine { a: 0.5, b: 1.0 };
        let config = Config::new(200, 1e-12).unwrap();

        let solution = solve_unobserved(&model, &Feedback, 0.0, &config).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.residual <= 1e-12);
        assert_relative_eq!(solution.snapshot.output, 2.0, epsilon = 1e-10);
    }

    #[test]
    fn fixed_point_input_takes_one_step() {
        let model = Affine { a: 0.5, b: 1.0 };

        let solution =
            solve_unobserved(&model, &Feedback, 2.0, &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.snapshot.input, 2.0);
        assert_relative_eq!(solution.snapshot.output, 2.0);
    }

    #[test]
    fn divergent_map_hits_iteration_cap() {
        let model = Affine { a: 2.0, b: 1.0 };
        let config = Config::new(25, 1e-6).unwrap();

        let solution = solve_unobserved(&model, &Feedback, 0.0, &config).expect("should return");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 25);
        assert!(!solution.is_converged());
    }

    #[test]
    fn oscillating_map_hits_iteration_cap() {
        let model = Affine { a: -1.0, b: 0.0 };
        let config = Config::new(10, 1e-6).unwrap();

        let solution = solve_unobserved(&model, &Feedback, 1.0, &config).expect("should return");

        assert_eq!(solution.status, Status::MaxIters);
        assert_relative_eq!(solution.residual, 2.0);
    }

    #[test]
    fn observer_can_stop_iteration() {
        let model = Affine { a: 0.9, b: 0.0 };

        let mut residuals = Vec::new();
        let observer = |event: &Event<'_, f64, f64>| {
            residuals.push(event.residual);
            (event.iter >= 3).then_some(Action::StopEarly)
        };

        let solution =
            solve(&model, &Feedback, 1.0, &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(residuals.len(), 3);
        assert_relative_eq!(residuals[0], 0.1, epsilon = 1e-12);
    }

    #[test]
    fn errors_on_non_finite_residual() {
        let model = Affine { a: 1.0, b: f64::NAN };

        let result = solve_unobserved(&model, &Feedback, 0.0, &Config::default());

        assert!(matches!(
            result,
            Err(Error::NonFiniteResidual { iter: 1, .. })
        ));
    }
}
