//! The constant-flux scenario: daisies evolving generation by generation
//! under an unchanging sun.

use serde::Serialize;

use daisyworld_core::Observer;
use daisyworld_solvers::iterate::{self, Action, Event};

use crate::{
    Error,
    model::{DaisyWorld, Settle},
    parameters::Parameters,
    species::PerSpecies,
    state::{PlanetState, check_flux},
};

/// Default number of generations in a constant-flux run.
pub const GENERATIONS: usize = 40;

/// States of a constant-flux run, one per generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstantFlux {
    /// Generation numbers, starting at `0` for the seed.
    pub generations: Vec<usize>,

    /// The planet at each generation.
    pub states: Vec<PlanetState>,
}

impl ConstantFlux {
    /// Iterates over `(generation, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PlanetState)> {
        self.generations.iter().copied().zip(&self.states)
    }
}

/// Evolves a seeded planet for a fixed number of generations at `flux`.
///
/// The first state is the seed itself; each following state is one timestep
/// after the previous, so `generations` states are returned in total. No
/// convergence check is made.
///
/// # Errors
///
/// Returns [`Error::NoGenerations`] if `generations` is zero, or an error if
/// the parameters, flux or seed areas are invalid.
pub fn constant_flux(
    flux: f64,
    params: &Parameters,
    seed_areas: PerSpecies<f64>,
    generations: usize,
) -> Result<ConstantFlux, Error> {
    constant_flux_observed(flux, params, seed_areas, generations, ())
}

/// Like [`constant_flux`], reporting every generation to an observer.
///
/// The seed is reported as step `0`. If the observer returns
/// [`Action::StopEarly`], the run ends after that generation and the states
/// computed so far are returned.
///
/// # Errors
///
/// Returns [`Error::NoGenerations`] if `generations` is zero, or an error if
/// the parameters, flux or seed areas are invalid.
pub fn constant_flux_observed<Obs>(
    flux: f64,
    params: &Parameters,
    seed_areas: PerSpecies<f64>,
    generations: usize,
    observer: Obs,
) -> Result<ConstantFlux, Error>
where
    Obs: Observer<Event<PlanetState, PlanetState>, Action>,
{
    if generations == 0 {
        return Err(Error::NoGenerations);
    }
    params.validate()?;
    check_flux(flux)?;

    let seed = PlanetState::seed(seed_areas, flux, params)?;
    let model = DaisyWorld::new(params, flux);

    // Snapshot inputs run from the seed through generation `generations - 1`.
    let solution = iterate::solve(&model, &Settle, seed, generations - 1, observer)?;
    if solution.status == iterate::Status::StoppedByObserver {
        log::debug!("constant-flux run stopped by observer at generation {}", solution.steps);
    }

    let states: Vec<PlanetState> = solution.inputs().copied().collect();

    log::debug!(
        "ran {} generations at flux {flux:.1} W/m², final temperature {:.2} K",
        states.len(),
        states.last().map_or(f64::NAN, PlanetState::planet_temperature),
    );

    Ok(ConstantFlux {
        generations: (0..states.len()).collect(),
        states,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{species::Species, update::next_state};

    #[test]
    fn first_state_is_seed() {
        let params = Parameters::default();
        let seed_areas = PerSpecies::new(0.2, 0.1);

        let run = constant_flux(params.nominal_flux, &params, seed_areas, GENERATIONS).unwrap();

        assert_eq!(
            run.states[0],
            PlanetState::seed(seed_areas, params.nominal_flux, &params).unwrap()
        );
    }

    #[test]
    fn each_generation_is_one_timestep() {
        let params = Parameters::default();
        let flux = params.nominal_flux * 0.9;

        let run = constant_flux(flux, &params, PerSpecies::splat(0.01), 10).unwrap();

        assert_eq!(run.generations, (0..10).collect::<Vec<_>>());
        for pair in run.states.windows(2) {
            assert_eq!(pair[1], next_state(&pair[0], flux, &params));
        }
    }

    #[test]
    fn single_generation_is_just_the_seed() {
        let params = Parameters::default();

        let run = constant_flux(params.nominal_flux, &params, PerSpecies::splat(0.01), 1).unwrap();

        assert_eq!(run.states.len(), 1);
        assert_relative_eq!(run.states[0].area(Species::White), 0.01);
    }

    #[test]
    fn iter_pairs_generation_with_state() {
        let params = Parameters::default();
        let run = constant_flux(params.nominal_flux, &params, PerSpecies::splat(0.01), 3).unwrap();

        let pairs: Vec<_> = run.iter().map(|(generation, _)| generation).collect();
        assert_eq!(pairs, vec![0, 1, 2]);
    }

    #[test]
    fn observer_sees_every_generation() {
        let params = Parameters::default();

        let mut seen = Vec::new();
        let run = constant_flux_observed(
            params.nominal_flux,
            &params,
            PerSpecies::splat(0.01),
            6,
            |event: &Event<PlanetState, PlanetState>| {
                seen.push(event.step);
                None
            },
        )
        .unwrap();

        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(run.states.len(), 6);
    }

    #[test]
    fn observer_can_end_run_early() {
        let params = Parameters::default();

        let run = constant_flux_observed(
            params.nominal_flux,
            &params,
            PerSpecies::splat(0.01),
            GENERATIONS,
            |event: &Event<PlanetState, PlanetState>| (event.step == 3).then_some(Action::StopEarly),
        )
        .unwrap();

        assert_eq!(run.generations, vec![0, 1, 2, 3]);
        assert_eq!(run.states.len(), 4);
    }

    #[test]
    fn rejects_zero_generations() {
        let params = Parameters::default();
        let result = constant_flux(params.nominal_flux, &params, PerSpecies::splat(0.01), 0);
        assert!(matches!(result, Err(Error::NoGenerations)));
    }

    #[test]
    fn rejects_invalid_seed() {
        let params = Parameters::default();
        let result = constant_flux(params.nominal_flux, &params, PerSpecies::new(0.7, 0.7), 5);
        assert!(matches!(result, Err(Error::Areas { .. })));
    }
}
