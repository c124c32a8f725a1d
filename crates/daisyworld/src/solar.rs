//! Solar flux as a function of distance from the Daisyworld sun.
//!
//! These helpers convert a planet-to-sun distance into the nominal solar flux
//! used by the model. Distances in astronomical units use the rounded
//! `1 AU = 1.496e11 m`.

use std::f64::consts::PI;

use uom::si::{
    f64::{HeatFluxDensity, Length},
    heat_flux_density::watt_per_square_meter,
    length::meter,
};

/// One astronomical unit, in meters.
pub const AU: f64 = 1.496e11;

/// Luminosity of the Daisyworld sun, in watts.
pub const LUMINOSITY: f64 = 1e27;

/// Returns the solar flux at `distance` from the sun.
///
/// The sun's luminosity is spread over a sphere of radius `distance`:
///
/// ```text
/// F = L / (4π d²)
/// ```
#[must_use]
pub fn solar_flux(distance: Length) -> HeatFluxDensity {
    let d = distance.get::<meter>();
    HeatFluxDensity::new::<watt_per_square_meter>(LUMINOSITY / (4.0 * PI * d * d))
}

/// Returns the solar flux in W/m² at a distance given in astronomical units.
#[must_use]
pub fn flux_at_au(distance_au: f64) -> f64 {
    solar_flux(Length::new::<meter>(from_au(distance_au))).get::<watt_per_square_meter>()
}

/// Converts a distance in meters to astronomical units.
#[must_use]
pub fn to_au(meters: f64) -> f64 {
    meters / AU
}

/// Converts a distance in astronomical units to meters.
#[must_use]
pub fn from_au(au: f64) -> f64 {
    au * AU
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn nominal_flux_at_one_au() {
        assert_relative_eq!(flux_at_au(1.0), 3555.71, epsilon = 0.01);
    }

    #[test]
    fn flux_follows_inverse_square_law() {
        assert_relative_eq!(flux_at_au(2.0), flux_at_au(1.0) / 4.0, max_relative = 1e-12);
        assert_relative_eq!(flux_at_au(0.5), flux_at_au(1.0) * 4.0, max_relative = 1e-12);
    }

    #[test]
    fn unit_conversions_invert_each_other() {
        assert_relative_eq!(to_au(from_au(1.3)), 1.3, max_relative = 1e-15);
        assert_relative_eq!(from_au(1.0), 1.496e11);
    }

    #[test]
    fn solar_flux_accepts_any_length_unit() {
        use uom::si::length::kilometer;

        let flux = solar_flux(Length::new::<kilometer>(AU / 1000.0));
        assert_relative_eq!(
            flux.get::<watt_per_square_meter>(),
            flux_at_au(1.0),
            max_relative = 1e-12
        );
    }
}
