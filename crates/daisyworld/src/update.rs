use crate::{
    growth::growth,
    parameters::Parameters,
    species::{PerSpecies, Species},
    state::PlanetState,
};

/// Advances a planet by one timestep at solar flux `flux`.
///
/// The update runs in a fixed order:
///
/// 1. Temperatures are recomputed from the previous planetary albedo.
/// 2. Each established daisy population grows with the new patch temperature
///    into the previous barren area and loses a constant fraction to death.
///    Populations never fall below `min_area`; a species at exactly zero
///    stays extinct.
/// 3. The barren area is the remainder of the two daisy areas.
/// 4. The planetary albedo is recomputed from the new areas.
///
/// `params` must be valid (see [`Parameters::validate`]) and `flux` finite
/// and non-negative; the public entry points check both.
#[must_use]
pub fn next_state(state: &PlanetState, flux: f64, params: &Parameters) -> PlanetState {
    let (planet_temperature, temperatures) =
        radiative_temperatures(state.albedo(), flux, params);

    let areas = PerSpecies::from_fn(|species| {
        grown_area(state, species, temperatures[species], params)
    });

    PlanetState::from_parts(areas, planet_temperature, temperatures, &params.albedo)
}

/// Radiative-balance temperatures for a planet with the given albedo.
///
/// Returns the planetary mean temperature and the temperature of each daisy
/// species' patches. Patch temperatures blend the patch's own absorbed flux
/// with the planetary flux according to the insulation factor.
pub(crate) fn radiative_temperatures(
    albedo: f64,
    flux: f64,
    params: &Parameters,
) -> (f64, PerSpecies<f64>) {
    let planet_flux = absorbed_flux(flux, albedo, params);
    let planet_temperature = blackbody_temperature(planet_flux, params.stefan_boltzmann);

    let temperatures = PerSpecies::from_fn(|species| {
        let patch_flux = absorbed_flux(flux, params.albedo[species], params);
        let blended = params.insulation * (patch_flux - planet_flux) + planet_flux;
        blackbody_temperature(blended, params.stefan_boltzmann)
    });

    (planet_temperature, temperatures)
}

/// Flux re-emitted by a surface with the given albedo.
fn absorbed_flux(flux: f64, albedo: f64, params: &Parameters) -> f64 {
    flux * (1.0 - albedo) * params.area_ratio / params.emissivity
}

/// Inverts the Stefan-Boltzmann law, `F = σ T⁴`.
fn blackbody_temperature(flux: f64, stefan_boltzmann: f64) -> f64 {
    (flux / stefan_boltzmann).sqrt().sqrt()
}

/// New area of `species` after one generation of growth and death.
fn grown_area(state: &PlanetState, species: Species, temperature: f64, params: &Parameters) -> f64 {
    let area = state.area(species);
    if area <= 0.0 {
        return area;
    }

    let rate = growth(temperature, species, params);
    let change = area * (rate * state.barren_area() - params.death_rate[species]);

    (area + change).max(params.min_area)
}
