use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    solar,
    species::{Albedo, PerSpecies, Species},
};

/// Offset between the Celsius and Kelvin scales.
pub(crate) const ZERO_CELSIUS: f64 = 273.15;

/// Physical parameters of a Daisyworld planet.
///
/// These stay constant for one simulation run. The [`Default`] values are the
/// classic model settings. Field aliases accept the short keys of
/// an `init_vars.json` parameter file (`Albedo`, `Fsnom`, `rat`, `em_p`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameters {
    /// Albedo of white daisies, black daisies and bare soil.
    #[serde(alias = "Albedo")]
    pub albedo: Albedo,

    /// Nominal incoming solar flux, in W/m².
    #[serde(alias = "Fsnom")]
    pub nominal_flux: f64,

    /// Ratio of intercepting disc area to radiating sphere area.
    #[serde(alias = "rat")]
    pub area_ratio: f64,

    /// Planetary emissivity.
    #[serde(alias = "em_p")]
    pub emissivity: f64,

    /// Stefan-Boltzmann constant, in W/(m²·K⁴).
    #[serde(alias = "sig")]
    pub stefan_boltzmann: f64,

    /// How strongly daisy patches decouple from the planetary mean temperature.
    ///
    /// At `0` every patch sits at the planetary temperature; at `1` each patch
    /// takes its own radiative-balance temperature.
    #[serde(alias = "ins_p")]
    pub insulation: f64,

    /// Fraction of each species' area lost per generation.
    #[serde(alias = "death")]
    pub death_rate: PerSpecies<f64>,

    /// Floor applied to any established daisy population.
    #[serde(alias = "minarea")]
    pub min_area: f64,

    /// Temperature at which growth stops, in Kelvin.
    #[serde(alias = "T_min")]
    pub min_temperature: PerSpecies<f64>,

    /// Temperature of peak growth, in Kelvin.
    #[serde(alias = "T_opt")]
    pub optimal_temperature: PerSpecies<f64>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            albedo: Albedo::default(),
            nominal_flux: solar::flux_at_au(1.0),
            area_ratio: 0.25,
            emissivity: 1.0,
            stefan_boltzmann: 5.67e-8,
            insulation: 0.2,
            death_rate: PerSpecies::splat(0.3),
            min_area: 0.01,
            min_temperature: PerSpecies::splat(ZERO_CELSIUS + 5.0),
            optimal_temperature: PerSpecies::splat(ZERO_CELSIUS + 22.5),
        }
    }
}

/// Errors that can occur when validating [`Parameters`].
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("albedo of {surface} must be within [0, 1], got {value}")]
    Albedo { surface: &'static str, value: f64 },

    #[error("nominal flux must be finite and non-negative, got {0}")]
    NominalFlux(f64),

    #[error("area ratio must be finite and positive, got {0}")]
    AreaRatio(f64),

    #[error("emissivity must be finite and positive, got {0}")]
    Emissivity(f64),

    #[error("Stefan-Boltzmann constant must be finite and positive, got {0}")]
    StefanBoltzmann(f64),

    #[error("insulation must be within [0, 1], got {0}")]
    Insulation(f64),

    #[error("death rate of {species:?} daisies must be finite and non-negative, got {value}")]
    DeathRate { species: Species, value: f64 },

    #[error("minimum area must be within [0, 1), got {0}")]
    MinArea(f64),

    #[error(
        "{species:?} daisies need distinct finite minimum and optimal temperatures, got {min} and {optimal}"
    )]
    GrowthRange {
        species: Species,
        min: f64,
        optimal: f64,
    },

    #[error("failed to parse parameters: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Parameters {
    /// Loads parameters from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Parse`] if the JSON is malformed, or the
    /// first validation failure otherwise.
    pub fn from_json(json: &str) -> Result<Self, ParameterError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Validates that every parameter lies in its physical domain.
    ///
    /// With valid parameters every radiative flux in the model is a convex
    /// combination of non-negative values, so temperatures are always real.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter found.
    #[allow(clippy::float_cmp)]
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (surface, value) in [
            ("white daisies", self.albedo.white),
            ("black daisies", self.albedo.black),
            ("soil", self.albedo.soil),
        ] {
            if !is_fraction(value) {
                return Err(ParameterError::Albedo { surface, value });
            }
        }

        if !self.nominal_flux.is_finite() || self.nominal_flux < 0.0 {
            return Err(ParameterError::NominalFlux(self.nominal_flux));
        }
        if !is_positive(self.area_ratio) {
            return Err(ParameterError::AreaRatio(self.area_ratio));
        }
        if !is_positive(self.emissivity) {
            return Err(ParameterError::Emissivity(self.emissivity));
        }
        if !is_positive(self.stefan_boltzmann) {
            return Err(ParameterError::StefanBoltzmann(self.stefan_boltzmann));
        }
        if !is_fraction(self.insulation) {
            return Err(ParameterError::Insulation(self.insulation));
        }
        if !(0.0..1.0).contains(&self.min_area) {
            return Err(ParameterError::MinArea(self.min_area));
        }

        for species in Species::ALL {
            let value = self.death_rate[species];
            if !value.is_finite() || value < 0.0 {
                return Err(ParameterError::DeathRate { species, value });
            }

            let min = self.min_temperature[species];
            let optimal = self.optimal_temperature[species];
            if !min.is_finite() || !optimal.is_finite() || min == optimal {
                return Err(ParameterError::GrowthRange {
                    species,
                    min,
                    optimal,
                });
            }
        }

        Ok(())
    }
}

fn is_fraction(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
    }

    #[test]
    fn rejects_albedo_outside_unit_interval() {
        let mut params = Parameters::default();
        params.albedo.black = 1.2;

        assert!(matches!(
            params.validate(),
            Err(ParameterError::Albedo {
                surface: "black daisies",
                ..
            })
        ));
    }

    #[test]
    fn rejects_nan_insulation() {
        let params = Parameters {
            insulation: f64::NAN,
            ..Parameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::Insulation(_))
        ));
    }

    #[test]
    fn rejects_degenerate_growth_range() {
        let mut params = Parameters::default();
        params.min_temperature.black = params.optimal_temperature.black;

        assert!(matches!(
            params.validate(),
            Err(ParameterError::GrowthRange {
                species: Species::Black,
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_positive_emissivity() {
        let params = Parameters {
            emissivity: 0.0,
            ..Parameters::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParameterError::Emissivity(value)) if value == 0.0
        ));
    }

    #[test]
    fn loads_init_vars_style_json() {
        let json = r#"{
            "Albedo": {"w": 0.7, "b": 0.2, "none": 0.45},
            "Fsnom": 917.0,
            "rat": 1.0,
            "ins_p": 0.3,
            "death": {"w": 0.25, "b": 0.35},
            "T_opt": {"w": 295.0, "b": 296.0}
        }"#;

        let params = Parameters::from_json(json).expect("valid parameters");

        assert_relative_eq!(params.albedo.white, 0.7);
        assert_relative_eq!(params.albedo.soil, 0.45);
        assert_relative_eq!(params.nominal_flux, 917.0);
        assert_relative_eq!(params.area_ratio, 1.0);
        assert_relative_eq!(params.insulation, 0.3);
        assert_relative_eq!(params.death_rate.black, 0.35);
        assert_relative_eq!(params.optimal_temperature.black, 296.0);

        // Missing keys fall back to defaults.
        let defaults = Parameters::default();
        assert_relative_eq!(params.emissivity, defaults.emissivity);
        assert_relative_eq!(params.min_area, defaults.min_area);
        assert_relative_eq!(params.min_temperature.white, defaults.min_temperature.white);
    }

    #[test]
    fn from_json_validates() {
        let result = Parameters::from_json(r#"{"minarea": 1.5}"#);
        assert!(matches!(result, Err(ParameterError::MinArea(value)) if value == 1.5));
    }

    #[test]
    fn from_json_reports_malformed_input() {
        let result = Parameters::from_json("{ not json");
        let err = result.unwrap_err();
        assert!(matches!(err, ParameterError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
