//! The Daisyworld toy climate model.
//!
//! Daisyworld is a planet covered by bare soil and two species of daisy: white
//! daisies that reflect sunlight and black daisies that absorb it. Each species
//! grows best near its optimal temperature, and the daisies in turn set the
//! planet's albedo and therefore its temperature. The feedback keeps the
//! planet habitable across a wide range of solar fluxes.
//!
//! # Overview
//!
//! - [`PlanetState`] — an immutable snapshot of areas, albedo and temperatures
//! - [`growth`] — the parabolic growth rate of a species at a temperature
//! - [`next_state`] — one timestep of radiative balance, growth and death
//! - [`equilibrium`] — steps at constant flux until the temperature settles
//! - [`flux_sweep`] — ramps the flux up and back down to expose hysteresis
//! - [`constant_flux`] — evolves a planet for a fixed number of generations
//! - [`solar`] — solar flux as a function of distance from the sun
//!
//! # Example
//!
//! ```ignore
//! use daisyworld::{EquilibriumConfig, Parameters, SweepConfig, flux_sweep};
//!
//! let params = Parameters::default();
//! let sweep = flux_sweep(
//!     params.nominal_flux,
//!     &params,
//!     &SweepConfig::default(),
//!     &EquilibriumConfig::default(),
//! )?;
//!
//! for (k, multiplier) in sweep.multipliers.iter().enumerate() {
//!     println!(
//!         "{multiplier:.3}: {:.2} K up, {:.2} K down",
//!         sweep.forward[k].planet_temperature(),
//!         sweep.backward[k].planet_temperature(),
//!     );
//! }
//! ```

mod constant;
mod equilibrium;
mod error;
mod growth;
mod model;
mod parameters;
mod species;
mod state;
mod sweep;
mod update;

pub mod solar;

pub use constant::{ConstantFlux, GENERATIONS, constant_flux, constant_flux_observed};
pub use equilibrium::{Equilibrium, EquilibriumConfig, equilibrium, equilibrium_observed};
pub use error::Error;
pub use growth::{growth, growth_curve};
pub use parameters::{ParameterError, Parameters};
pub use species::{Albedo, PerSpecies, Species, Surface};
pub use state::{PlanetState, SEED_AREA};
pub use sweep::{FluxSweep, SweepConfig, SweepError, flux_sweep};
pub use update::next_state;
