use std::marker::PhantomData;

use daisyworld_core::Observer;
use log::Level;

use crate::traits::{CanStopEarly, HasResidual, HasStep};

/// Logs solver progress and optionally stops after a step budget.
///
/// Every event is written to the `log` facade at the chosen level under the
/// observer's label. Events that carry a residual use [`LogObserver::residual`];
/// step-only events use [`LogObserver::steps`].
///
/// # Example
///
/// ```ignore
/// use daisyworld_observers::LogObserver;
///
/// let observer = LogObserver::residual("equilibrium", log::Level::Debug).with_budget(500);
/// let result = daisyworld::equilibrium_observed(&state, flux, &params, &config, observer)?;
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver<K> {
    label: String,
    level: Level,
    budget: Option<usize>,
    _kind: PhantomData<K>,
}

/// Marker for observers of events with a residual.
#[derive(Debug, Clone, Copy)]
pub struct Residual;

/// Marker for observers of step-only events.
#[derive(Debug, Clone, Copy)]
pub struct Steps;

impl LogObserver<Residual> {
    /// Logs the step number and residual of each event.
    pub fn residual(label: impl Into<String>, level: Level) -> Self {
        Self::new(label, level)
    }
}

impl LogObserver<Steps> {
    /// Logs the step number of each event.
    pub fn steps(label: impl Into<String>, level: Level) -> Self {
        Self::new(label, level)
    }
}

impl<K> LogObserver<K> {
    fn new(label: impl Into<String>, level: Level) -> Self {
        Self {
            label: label.into(),
            level,
            budget: None,
            _kind: PhantomData,
        }
    }

    /// Stops the solver once an event reaches step `budget`.
    #[must_use]
    pub fn with_budget(mut self, budget: usize) -> Self {
        self.budget = Some(budget);
        self
    }

    fn check_budget<A: CanStopEarly>(&self, step: usize) -> Option<A> {
        match self.budget {
            Some(budget) if step >= budget => {
                log::log!(
                    self.level,
                    "{}: stopping at step {step}, budget of {budget} reached",
                    self.label,
                );
                Some(A::stop_early())
            }
            _ => None,
        }
    }
}

impl<E, A> Observer<E, A> for LogObserver<Residual>
where
    E: HasStep + HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        log::log!(
            self.level,
            "{}: step {step}, residual {:.6e}",
            self.label,
            event.residual(),
        );
        self.check_budget(step)
    }
}

impl<E, A> Observer<E, A> for LogObserver<Steps>
where
    E: HasStep,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let step = event.step();
        log::log!(self.level, "{}: step {step}", self.label);
        self.check_budget(step)
    }
}
