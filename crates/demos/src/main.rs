//! # Daisyworld Experiments
//!
//! Runs one of the Daisyworld experiments and prints its series as CSV.
//!
//! - `sweep` ramps the solar flux from 0.6 to 1.65 times nominal and back,
//!   printing the forward, backward and lifeless equilibria per multiplier.
//! - `constant` evolves a freshly seeded planet for 40 generations at the
//!   flux of a given distance from the sun (default 1 AU).
//! - `equilibrium` seeds a planet at the nominal flux and settles it at a
//!   given multiple of that flux (default 1.2), logging each step.
//!
//! A global `--params <PATH>` loads parameters from an `init_vars.json`
//! style file; missing keys keep their defaults.
//!
//! ## Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -p daisyworld-demos -- sweep
//! cargo run -p daisyworld-demos -- constant --distance-au 1.1
//! ```

use std::{fs, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};

use daisyworld::{
    EquilibriumConfig, GENERATIONS, Parameters, PerSpecies, PlanetState, SEED_AREA, Species,
    SweepConfig, constant_flux_observed, equilibrium_observed, flux_sweep, solar,
};
use daisyworld_observers::LogObserver;

type BoxError = Box<dyn std::error::Error>;

/// Daisyworld climate experiments.
#[derive(Parser)]
#[command(name = "daisyworld")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON parameter file; missing keys keep their defaults.
    #[arg(long, global = true, value_name = "PATH")]
    params: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep the solar flux up and back down to expose hysteresis.
    Sweep,

    /// Evolve a seeded planet for 40 generations at constant flux.
    Constant {
        /// Distance from the sun, in astronomical units.
        #[arg(long, default_value = "1.0")]
        distance_au: f64,
    },

    /// Settle a seeded planet at a multiple of the nominal flux.
    Equilibrium {
        /// Multiple of the nominal flux to settle at.
        #[arg(long, default_value = "1.2")]
        multiplier: f64,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), BoxError> {
    let params = match &cli.params {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            log::info!("loaded parameters from {}", path.display());
            Parameters::from_json(&json)?
        }
        None => Parameters::default(),
    };

    match cli.command {
        Commands::Sweep => sweep(&params),
        Commands::Constant { distance_au } => constant(&params, distance_au),
        Commands::Equilibrium { multiplier } => settle(&params, multiplier),
    }
}

fn sweep(params: &Parameters) -> Result<(), BoxError> {
    let sweep = flux_sweep(
        params.nominal_flux,
        params,
        &SweepConfig::default(),
        &EquilibriumConfig::default(),
    )?;

    println!("multiplier,forward_c,backward_c,lifeless_c,forward_white,forward_black");
    for (k, multiplier) in sweep.multipliers.iter().enumerate() {
        let forward = &sweep.forward[k];
        println!(
            "{multiplier:.4},{:.3},{:.3},{:.3},{:.4},{:.4}",
            forward.planet_temperature_celsius(),
            sweep.backward[k].planet_temperature_celsius(),
            sweep.lifeless[k].planet_temperature_celsius(),
            forward.area(Species::White),
            forward.area(Species::Black),
        );
    }

    Ok(())
}

fn constant(params: &Parameters, distance_au: f64) -> Result<(), BoxError> {
    let flux = solar::flux_at_au(distance_au);
    log::info!("solar flux at {distance_au} AU is {flux:.1} W/m²");

    let observer = LogObserver::steps("generation", log::Level::Trace);
    let run = constant_flux_observed(
        flux,
        params,
        PerSpecies::splat(SEED_AREA),
        GENERATIONS,
        observer,
    )?;

    println!("generation,planet_c,white_c,black_c,white,black,barren");
    for (generation, state) in run.iter() {
        println!(
            "{generation},{:.3},{:.3},{:.3},{:.4},{:.4},{:.4}",
            state.planet_temperature_celsius(),
            state.temperature_celsius(Species::White),
            state.temperature_celsius(Species::Black),
            state.area(Species::White),
            state.area(Species::Black),
            state.barren_area(),
        );
    }

    Ok(())
}

fn settle(params: &Parameters, multiplier: f64) -> Result<(), BoxError> {
    let seed = PlanetState::seed_live(params.nominal_flux, params)?;
    let observer = LogObserver::residual("equilibrium", log::Level::Info);

    let result = equilibrium_observed(
        &seed,
        multiplier * params.nominal_flux,
        params,
        &EquilibriumConfig::default(),
        observer,
    )?;

    let state = result.state();
    println!("converged,planet_c,white,black");
    println!(
        "{},{:.3},{:.4},{:.4}",
        result.is_converged(),
        state.planet_temperature_celsius(),
        state.area(Species::White),
        state.area(Species::Black),
    );

    Ok(())
}
