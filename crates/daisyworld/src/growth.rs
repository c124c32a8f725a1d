use crate::{
    parameters::{Parameters, ZERO_CELSIUS},
    species::Species,
};

/// Growth rate of `species` at `temperature` (in Kelvin).
///
/// Growth follows a parabola that peaks at exactly `1` at the species'
/// optimal temperature and reaches `0` at its minimum temperature (and at the
/// same distance above the optimum):
///
/// ```text
/// g = 1 - ((T - T_opt) / (T_min - T_opt))²
/// ```
///
/// Outside that range the rate is clamped to `0`; it is never negative.
#[must_use]
pub fn growth(temperature: f64, species: Species, params: &Parameters) -> f64 {
    let optimal = params.optimal_temperature[species];
    let min = params.min_temperature[species];

    let scaled = (temperature - optimal) / (min - optimal);
    let rate = 1.0 - scaled * scaled;

    if rate < 0.0 { 0.0 } else { rate }
}

/// Samples the growth curve of `species` between two Celsius temperatures.
///
/// Returns `points` pairs of `[temperature_celsius, growth]`, starting at
/// `from_celsius` and spaced by `(to_celsius - from_celsius) / points`, so the
/// upper bound itself is not sampled.
#[must_use]
pub fn growth_curve(
    params: &Parameters,
    species: Species,
    from_celsius: f64,
    to_celsius: f64,
    points: usize,
) -> Vec<[f64; 2]> {
    #[allow(clippy::cast_precision_loss)]
    let spacing = (to_celsius - from_celsius) / points as f64;

    (0..points)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let celsius = from_celsius + i as f64 * spacing;
            [celsius, growth(celsius + ZERO_CELSIUS, species, params)]
        })
        .collect()
}
