use daisyworld_core::Observer;
use daisyworld_solvers::fixed_point::{self, Action, Event, Solution, Status};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    model::{DaisyWorld, Settle},
    parameters::Parameters,
    state::{PlanetState, check_flux},
};

/// Convergence settings for equilibrium searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquilibriumConfig {
    /// Maximum number of timesteps before giving up.
    pub max_iters: usize,

    /// Planetary temperature change, in Kelvin, at or below which a timestep
    /// counts as settled.
    pub temperature_tol: f64,
}

impl Default for EquilibriumConfig {
    fn default() -> Self {
        Self {
            max_iters: 10_000,
            temperature_tol: 0.05,
        }
    }
}

impl EquilibriumConfig {
    /// Validates the settings and converts them for the fixed-point solver.
    pub(crate) fn solver_config(&self) -> Result<fixed_point::Config, Error> {
        Ok(fixed_point::Config::new(
            self.max_iters,
            self.temperature_tol,
        )?)
    }
}

/// Outcome of an equilibrium search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Equilibrium {
    /// A timestep changed the planetary temperature by no more than the tolerance.
    Converged(PlanetState),
    /// The iteration cap was reached first; holds the last state computed.
    MaxIterationsExceeded(PlanetState),
    /// An observer stopped the search; holds the last state computed.
    StoppedByObserver(PlanetState),
}

impl Equilibrium {
    /// The final state, whether or not it converged.
    #[must_use]
    pub fn state(&self) -> &PlanetState {
        match self {
            Self::Converged(state)
            | Self::MaxIterationsExceeded(state)
            | Self::StoppedByObserver(state) => state,
        }
    }

    /// Returns true if the search converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged(_))
    }
}

/// Steps a planet at constant flux until its temperature settles.
///
/// At least one timestep is always taken. The search stops once a timestep
/// changes the planetary temperature by no more than
/// [`EquilibriumConfig::temperature_tol`], or after
/// [`EquilibriumConfig::max_iters`] timesteps.
///
/// # Errors
///
/// Returns an error if the parameters, flux or config are invalid, or if the
/// temperature change becomes non-finite.
pub fn equilibrium(
    initial: &PlanetState,
    flux: f64,
    params: &Parameters,
    config: &EquilibriumConfig,
) -> Result<Equilibrium, Error> {
    equilibrium_observed(initial, flux, params, config, ())
}

/// Like [`equilibrium`], reporting every timestep to an observer.
///
/// The observer may return [`Action::StopEarly`] to end the search, which
/// yields [`Equilibrium::StoppedByObserver`].
///
/// # Errors
///
/// Returns an error if the parameters, flux or config are invalid, or if the
/// temperature change becomes non-finite.
pub fn equilibrium_observed<Obs>(
    initial: &PlanetState,
    flux: f64,
    params: &Parameters,
    config: &EquilibriumConfig,
    observer: Obs,
) -> Result<Equilibrium, Error>
where
    Obs: for<'a> Observer<Event<'a, PlanetState, PlanetState>, Action>,
{
    params.validate()?;
    check_flux(flux)?;
    let config = config.solver_config()?;

    let solution = settle(initial, flux, params, &config, observer)?;
    let state = solution.snapshot.output;

    Ok(match solution.status {
        Status::Converged => Equilibrium::Converged(state),
        Status::MaxIters => Equilibrium::MaxIterationsExceeded(state),
        Status::StoppedByObserver => Equilibrium::StoppedByObserver(state),
    })
}

/// Runs the fixed-point solver on already validated inputs.
pub(crate) fn settle<Obs>(
    initial: &PlanetState,
    flux: f64,
    params: &Parameters,
    config: &fixed_point::Config,
    observer: Obs,
) -> Result<Solution<PlanetState, PlanetState>, Error>
where
    Obs: for<'a> Observer<Event<'a, PlanetState, PlanetState>, Action>,
{
    let model = DaisyWorld::new(params, flux);
    let solution = fixed_point::solve(&model, &Settle, *initial, config, observer)?;

    match solution.status {
        Status::Converged => log::trace!(
            "settled at {:.2} K after {} steps (flux {flux:.1} W/m²)",
            solution.snapshot.output.planet_temperature(),
            solution.iters,
        ),
        Status::MaxIters => log::warn!(
            "no equilibrium after {} steps at flux {flux:.1} W/m², last change {:.3} K",
            solution.iters,
            solution.residual,
        ),
        Status::StoppedByObserver => log::debug!(
            "equilibrium search stopped by observer after {} steps",
            solution.iters,
        ),
    }

    Ok(solution)
}
