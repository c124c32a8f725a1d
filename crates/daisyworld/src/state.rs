use serde::Serialize;

use crate::{
    Error,
    parameters::{Parameters, ZERO_CELSIUS},
    species::{Albedo, PerSpecies, Species},
    update,
};

/// Area fraction given to each daisy species when seeding a live planet.
pub const SEED_AREA: f64 = 0.01;

/// Snapshot of a Daisyworld planet at one timestep.
///
/// A `PlanetState` is an immutable value: every update produces a new state,
/// so series of states kept for plotting are never affected by later steps.
///
/// The daisy and barren area fractions always sum to one, and the planetary
/// albedo is their area-weighted albedo. Temperatures are in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetState {
    areas: PerSpecies<f64>,
    barren_area: f64,
    albedo: f64,
    planet_temperature: f64,
    temperatures: PerSpecies<f64>,
}

impl PlanetState {
    /// Seeds a planet with the given daisy areas at a solar flux.
    ///
    /// The barren area is the remainder, the albedo follows from the areas, and
    /// the temperatures are the radiative balance for that albedo at `flux`.
    /// A species seeded at exactly zero never appears later.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Areas`] if an area is negative or non-finite or the two
    /// areas sum to more than one, and [`Error::Flux`] for an invalid flux.
    pub fn seed(areas: PerSpecies<f64>, flux: f64, params: &Parameters) -> Result<Self, Error> {
        let valid = |area: f64| area.is_finite() && area >= 0.0;
        if !valid(areas.white) || !valid(areas.black) || areas.white + areas.black > 1.0 {
            return Err(Error::Areas {
                white: areas.white,
                black: areas.black,
            });
        }
        check_flux(flux)?;

        let albedo = planetary_albedo(areas, &params.albedo);
        let (planet_temperature, temperatures) =
            update::radiative_temperatures(albedo, flux, params);

        Ok(Self::from_parts(areas, planet_temperature, temperatures, &params.albedo))
    }

    /// Seeds a live planet with [`SEED_AREA`] of each species.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Flux`] if `flux` is negative or non-finite.
    pub fn seed_live(flux: f64, params: &Parameters) -> Result<Self, Error> {
        Self::seed(PerSpecies::splat(SEED_AREA), flux, params)
    }

    /// Seeds a fully barren planet on which daisies can never grow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Flux`] if `flux` is negative or non-finite.
    pub fn seed_lifeless(flux: f64, params: &Parameters) -> Result<Self, Error> {
        Self::seed(PerSpecies::splat(0.0), flux, params)
    }

    /// Assembles a state from daisy areas and temperatures.
    ///
    /// The barren area and albedo are derived from `areas`.
    pub(crate) fn from_parts(
        areas: PerSpecies<f64>,
        planet_temperature: f64,
        temperatures: PerSpecies<f64>,
        albedo: &Albedo,
    ) -> Self {
        Self {
            areas,
            barren_area: 1.0 - areas.white - areas.black,
            albedo: planetary_albedo(areas, albedo),
            planet_temperature,
            temperatures,
        }
    }

    /// Area fraction covered by `species`.
    #[must_use]
    pub fn area(&self, species: Species) -> f64 {
        self.areas[species]
    }

    /// Area fractions of both species.
    #[must_use]
    pub fn areas(&self) -> PerSpecies<f64> {
        self.areas
    }

    /// Area fraction not covered by daisies.
    #[must_use]
    pub fn barren_area(&self) -> f64 {
        self.barren_area
    }

    /// Combined planetary albedo.
    #[must_use]
    pub fn albedo(&self) -> f64 {
        self.albedo
    }

    /// Mean planetary temperature, in Kelvin.
    #[must_use]
    pub fn planet_temperature(&self) -> f64 {
        self.planet_temperature
    }

    /// Temperature of the patches covered by `species`, in Kelvin.
    #[must_use]
    pub fn temperature(&self, species: Species) -> f64 {
        self.temperatures[species]
    }

    /// Mean planetary temperature, in degrees Celsius.
    #[must_use]
    pub fn planet_temperature_celsius(&self) -> f64 {
        self.planet_temperature - ZERO_CELSIUS
    }

    /// Temperature of the patches covered by `species`, in degrees Celsius.
    #[must_use]
    pub fn temperature_celsius(&self, species: Species) -> f64 {
        self.temperatures[species] - ZERO_CELSIUS
    }
}

/// Area-weighted albedo of soil and both daisy species.
fn planetary_albedo(areas: PerSpecies<f64>, albedo: &Albedo) -> f64 {
    let barren = 1.0 - areas.white - areas.black;
    albedo.soil * barren + albedo.white * areas.white + albedo.black * areas.black
}

/// Checks that a solar flux is usable by the model.
pub(crate) fn check_flux(flux: f64) -> Result<(), Error> {
    if flux.is_finite() && flux >= 0.0 {
        Ok(())
    } else {
        Err(Error::Flux(flux))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn seed_derives_barren_area_and_albedo() {
        let params = Parameters::default();
        let state = PlanetState::seed(PerSpecies::new(0.2, 0.1), 1000.0, &params).unwrap();

        assert_relative_eq!(state.barren_area(), 0.7, epsilon = 1e-12);
        assert_relative_eq!(
            state.albedo(),
            0.5 * 0.7 + 0.75 * 0.2 + 0.25 * 0.1,
            epsilon = 1e-12
        );
    }

    #[test]
    fn barren_planet_sits_at_soil_balance_temperature() {
        let params = Parameters::default();
        let flux = params.nominal_flux;
        let state = PlanetState::seed_lifeless(flux, &params).unwrap();

        let absorbed = flux * (1.0 - params.albedo.soil) * params.area_ratio / params.emissivity;
        let expected = (absorbed / params.stefan_boltzmann).powf(0.25);

        assert_relative_eq!(state.albedo(), params.albedo.soil);
        assert_relative_eq!(state.planet_temperature(), expected, max_relative = 1e-12);
        assert_relative_eq!(
            state.planet_temperature_celsius(),
            expected - 273.15,
            max_relative = 1e-12
        );
    }

    #[test]
    fn live_seed_uses_small_areas() {
        let state = PlanetState::seed_live(1000.0, &Parameters::default()).unwrap();
        assert_eq!(state.areas(), PerSpecies::splat(SEED_AREA));
        assert_relative_eq!(state.barren_area(), 0.98, epsilon = 1e-12);
    }

    #[test]
    fn rejects_overfull_seed() {
        let result = PlanetState::seed(PerSpecies::new(0.6, 0.5), 1000.0, &Parameters::default());
        assert!(matches!(result, Err(Error::Areas { .. })));
    }

    #[test]
    fn rejects_negative_seed_area() {
        let result =
            PlanetState::seed(PerSpecies::new(-0.1, 0.5), 1000.0, &Parameters::default());
        assert!(matches!(result, Err(Error::Areas { .. })));
    }

    #[test]
    fn rejects_negative_flux() {
        let result = PlanetState::seed_live(-1.0, &Parameters::default());
        assert!(matches!(result, Err(Error::Flux(_))));
    }
}
