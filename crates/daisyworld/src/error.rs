use daisyworld_solvers::{fixed_point, iterate};
use thiserror::Error;

use crate::{parameters::ParameterError, sweep::SweepError};

/// Errors that can occur when running a Daisyworld simulation.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameters: {0}")]
    Parameters(#[from] ParameterError),

    #[error("invalid equilibrium config: {0}")]
    Config(#[from] fixed_point::ConfigError),

    #[error("invalid flux sweep: {0}")]
    Sweep(#[from] SweepError),

    #[error("solar flux must be finite and non-negative, got {0}")]
    Flux(f64),

    #[error(
        "seed areas must be non-negative and sum to at most one, got white {white} and black {black}"
    )]
    Areas { white: f64, black: f64 },

    #[error("at least one generation is required")]
    NoGenerations,

    #[error("no equilibrium after {iters} steps at flux multiplier {multiplier}")]
    NonConvergence { multiplier: f64, iters: usize },

    #[error("equilibrium search failed: {0}")]
    Solver(#[from] fixed_point::Error),

    #[error("generation stepping failed: {0}")]
    Iterate(#[from] iterate::Error),
}
