//! The flux-sweep hysteresis experiment.
//!
//! The sun's output is ramped across a range of multipliers of a base flux,
//! and the planet is brought to equilibrium at each step, starting from the
//! equilibrium of the previous step. Because each equilibrium depends on the
//! path taken to reach it, the ramp is run upward and then back downward, and
//! the two branches can disagree where the planet is bistable. A barren planet
//! is swept alongside as a control with no daisies to regulate it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use daisyworld_solvers::fixed_point;

use crate::{
    Error,
    equilibrium::{EquilibriumConfig, settle},
    parameters::Parameters,
    state::{PlanetState, check_flux},
};

/// Range and resolution of a flux sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Number of flux multipliers.
    pub steps: usize,

    /// First multiplier of the ramp.
    pub min_multiplier: f64,

    /// Upper end of the ramp; the last multiplier falls one spacing short of it.
    pub max_multiplier: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            steps: 200,
            min_multiplier: 0.6,
            max_multiplier: 1.65,
        }
    }
}

/// Errors that can occur when validating a [`SweepConfig`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SweepError {
    #[error("a sweep needs at least one step")]
    NoSteps,

    #[error("multipliers must be finite, non-negative and increasing, got {min} to {max}")]
    Range { min: f64, max: f64 },
}

impl SweepConfig {
    /// Validates the step count and multiplier range.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no steps or the range is not an
    /// increasing span of finite, non-negative multipliers.
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.steps == 0 {
            return Err(SweepError::NoSteps);
        }

        let (min, max) = (self.min_multiplier, self.max_multiplier);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min >= max {
            return Err(SweepError::Range { min, max });
        }

        Ok(())
    }

    /// Evenly spaced multipliers `min + i (max - min) / steps` for `i in 0..steps`.
    #[must_use]
    pub fn multipliers(&self) -> Vec<f64> {
        #[allow(clippy::cast_precision_loss)]
        let spacing = (self.max_multiplier - self.min_multiplier) / self.steps as f64;

        (0..self.steps)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let i = i as f64;
                self.min_multiplier + i * spacing
            })
            .collect()
    }
}

/// Equilibrium series of a flux sweep.
///
/// Every series has one state per multiplier, and `series[k]` is the
/// equilibrium at `multipliers[k]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FluxSweep {
    /// Flux multipliers, in increasing order.
    pub multipliers: Vec<f64>,

    /// Equilibria reached while the flux increases.
    pub forward: Vec<PlanetState>,

    /// Equilibria of a planet that never had daisies.
    pub lifeless: Vec<PlanetState>,

    /// Equilibria reached while the flux decreases, in increasing flux order.
    pub backward: Vec<PlanetState>,
}

/// Sweeps the solar flux up and back down to expose hysteresis.
///
/// 1. Seeds a live planet ([`PlanetState::seed_live`]) and a barren one at
///    the first multiplier of `base_flux`.
/// 2. Forward pass: for each following multiplier, both planets are brought
///    to equilibrium starting from their previous equilibrium.
/// 3. Backward pass: starting from the last forward equilibrium of the live
///    planet, the multipliers are visited in reverse, again chaining each
///    equilibrium from the previous one. The result is returned in increasing
///    flux order.
///
/// The first forward and lifeless entries are the seeds themselves.
///
/// # Errors
///
/// Returns an error if any input is invalid, or [`Error::NonConvergence`] if
/// an equilibrium search reaches its iteration cap.
pub fn flux_sweep(
    base_flux: f64,
    params: &Parameters,
    sweep: &SweepConfig,
    config: &EquilibriumConfig,
) -> Result<FluxSweep, Error> {
    params.validate()?;
    sweep.validate()?;
    check_flux(base_flux)?;
    let solver_config = config.solver_config()?;

    let multipliers = sweep.multipliers();
    let mut forward = Vec::with_capacity(multipliers.len());
    let mut lifeless = Vec::with_capacity(multipliers.len());

    let first_flux = multipliers[0] * base_flux;
    let mut live = PlanetState::seed_live(first_flux, params)?;
    let mut barren = PlanetState::seed_lifeless(first_flux, params)?;
    forward.push(live);
    lifeless.push(barren);

    log::debug!(
        "forward sweep over {} multipliers from {} to {}",
        multipliers.len(),
        sweep.min_multiplier,
        sweep.max_multiplier,
    );

    for &multiplier in &multipliers[1..] {
        live = step(&live, multiplier, base_flux, params, &solver_config)?;
        barren = step(&barren, multiplier, base_flux, params, &solver_config)?;
        forward.push(live);
        lifeless.push(barren);
    }

    log::debug!("backward sweep from {:.2} K", live.planet_temperature());

    let mut backward = Vec::with_capacity(multipliers.len());
    for &multiplier in multipliers.iter().rev() {
        live = step(&live, multiplier, base_flux, params, &solver_config)?;
        backward.push(live);
    }
    backward.reverse();

    log::debug!("flux sweep finished");

    Ok(FluxSweep {
        multipliers,
        forward,
        lifeless,
        backward,
    })
}

/// Brings `state` to equilibrium at `multiplier` times `base_flux`.
fn step(
    state: &PlanetState,
    multiplier: f64,
    base_flux: f64,
    params: &Parameters,
    config: &fixed_point::Config,
) -> Result<PlanetState, Error> {
    let solution = settle(state, multiplier * base_flux, params, config, ())?;

    match solution.status {
        fixed_point::Status::Converged => Ok(solution.snapshot.output),
        fixed_point::Status::MaxIters | fixed_point::Status::StoppedByObserver => {
            Err(Error::NonConvergence {
                multiplier,
                iters: solution.iters,
            })
        }
    }
}
