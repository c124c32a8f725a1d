//! Fixed-step iteration of a discrete map.
//!
//! This module steps a model a fixed number of times without any convergence
//! check, keeping every snapshot:
//!
//! ```text
//! x_{n+1} = g(x_n)    for n in 0..steps
//! ```
//!
//! # Example
//!
//! ```ignore
//! use daisyworld_solvers::iterate;
//!
//! let solution = iterate::solve_unobserved(&model, &problem, initial, 39)?;
//!
//! for (step, state) in solution.inputs().enumerate() {
//!     println!("{step}: {state:?}");
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use daisyworld_core::{IterationProblem, Model, Observer, Snapshot};

/// Steps an iteration problem a fixed number of times.
///
/// # Algorithm
///
/// 1. Call the model with the initial input to get the initial snapshot.
/// 2. For each step:
///    - Build the next input from the current input and output.
///    - Call the model to get the next output.
///    - Emit an `Event` to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
///
/// The history holds `steps + 1` snapshots when all steps complete.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    steps: usize,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: IterationProblem<Input = M::Input, Output = M::Output>,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let initial_output = model.call(&initial).map_err(Error::model)?;
    let initial_snapshot = Snapshot::new(initial, initial_output);

    let mut history = Vec::with_capacity(steps + 1);
    history.push(initial_snapshot.clone());

    let event = Event {
        step: 0,
        snapshot: initial_snapshot.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = initial_snapshot;

    for step in 1..=steps {
        let next_input = problem
            .next_input(&current.input, &current.output)
            .map_err(Error::problem)?;
        let next_output = model.call(&next_input).map_err(Error::model)?;
        let next_snapshot = Snapshot::new(next_input, next_output);

        history.push(next_snapshot.clone());

        let event = Event {
            step,
            snapshot: next_snapshot.clone(),
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next_snapshot;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Steps an iteration problem without observation.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: IterationProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, initial, steps, ())
}
