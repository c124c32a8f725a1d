use approx::assert_relative_eq;

use daisyworld::{
    EquilibriumConfig, GENERATIONS, Parameters, PerSpecies, PlanetState, SEED_AREA, Species,
    SweepConfig, constant_flux, flux_sweep, solar,
};

fn default_sweep() -> daisyworld::FluxSweep {
    let params = Parameters::default();
    flux_sweep(
        params.nominal_flux,
        &params,
        &SweepConfig::default(),
        &EquilibriumConfig::default(),
    )
    .expect("default sweep converges")
}

fn total_area(state: &PlanetState) -> f64 {
    state.area(Species::White) + state.area(Species::Black) + state.barren_area()
}

#[test]
fn sweep_series_have_one_state_per_multiplier() {
    let sweep = default_sweep();

    assert_eq!(sweep.multipliers.len(), 200);
    assert_eq!(sweep.forward.len(), 200);
    assert_eq!(sweep.lifeless.len(), 200);
    assert_eq!(sweep.backward.len(), 200);
}

#[test]
fn lifeless_planet_warms_monotonically() {
    let sweep = default_sweep();

    for pair in sweep.lifeless.windows(2) {
        assert!(pair[1].planet_temperature() > pair[0].planet_temperature());
    }
}

#[test]
fn up_and_down_branches_differ() {
    let sweep = default_sweep();

    let differs = sweep
        .forward
        .iter()
        .zip(&sweep.backward)
        .any(|(up, down)| (up.planet_temperature() - down.planet_temperature()).abs() > 0.5);

    assert!(differs, "no hysteresis between the forward and backward passes");
}

#[test]
fn daisies_regulate_temperature() {
    let sweep = default_sweep();

    // Somewhere on the ramp, daisies hold the planet cooler than bare soil would.
    let regulated = sweep
        .forward
        .iter()
        .zip(&sweep.lifeless)
        .any(|(live, barren)| live.planet_temperature() < barren.planet_temperature() - 1.0);

    assert!(regulated);
}

#[test]
fn sweep_conserves_area() {
    let sweep = default_sweep();

    for state in sweep.forward.iter().chain(&sweep.backward) {
        assert_relative_eq!(total_area(state), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn constant_flux_scenario() {
    let params = Parameters::default();
    let flux = solar::flux_at_au(1.0);
    let seed_areas = PerSpecies::splat(SEED_AREA);

    let run = constant_flux(flux, &params, seed_areas, GENERATIONS).expect("valid inputs");

    assert_eq!(run.states.len(), 40);
    assert_eq!(run.generations.len(), 40);
    assert_eq!(
        run.states[0],
        PlanetState::seed(seed_areas, flux, &params).expect("valid seed")
    );

    for state in &run.states {
        for species in Species::ALL {
            assert!((0.0..=1.0).contains(&state.area(species)));
        }
        assert!((0.0..=1.0).contains(&state.barren_area()));
        assert_relative_eq!(total_area(state), 1.0, epsilon = 1e-9);
    }
}
