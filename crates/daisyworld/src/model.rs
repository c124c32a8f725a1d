use std::convert::Infallible;

use daisyworld_core::{FixedPointProblem, IterationProblem, Model};

use crate::{parameters::Parameters, state::PlanetState, update::next_state};

/// Daisyworld under a constant solar flux, as a model from one state to the next.
#[derive(Debug, Clone, Copy)]
pub struct DaisyWorld<'a> {
    params: &'a Parameters,
    flux: f64,
}

impl<'a> DaisyWorld<'a> {
    /// Creates the model for validated parameters and a finite, non-negative flux.
    pub(crate) fn new(params: &'a Parameters, flux: f64) -> Self {
        Self { params, flux }
    }
}

impl Model for DaisyWorld<'_> {
    type Input = PlanetState;
    type Output = PlanetState;
    type Error = Infallible;

    fn call(&self, input: &PlanetState) -> Result<PlanetState, Infallible> {
        Ok(next_state(input, self.flux, self.params))
    }
}

/// Iterates planet states, measuring progress by the change in planetary temperature.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settle;

impl IterationProblem for Settle {
    type Input = PlanetState;
    type Output = PlanetState;
    type Error = Infallible;

    fn next_input(&self, _input: &PlanetState, output: &PlanetState) -> Result<PlanetState, Infallible> {
        Ok(*output)
    }
}

impl FixedPointProblem for Settle {
    fn residual(&self, input: &PlanetState, output: &PlanetState) -> Result<f64, Infallible> {
        Ok((output.planet_temperature() - input.planet_temperature()).abs())
    }
}
