//! Liquid-equivalent precipitation totals.

use crate::units::{Precipitation, PrecipitationUnit, Quantity, Temperature};

/// Snow-to-liquid ratio by air temperature (°C, ratio), warmest last.
///
/// NWS snowfall ratio bands converted to Celsius; colder air gives drier,
/// fluffier snow.
const SNOW_TO_LIQUID: [(f64, f64); 7] = [
    (-29.0, 50.0),
    (-18.0, 40.0),
    (-12.0, 30.0),
    (-9.0, 20.0),
    (-7.0, 15.0),
    (-3.0, 10.0),
    (1.0, 10.0),
];

/// Ratio used when the air temperature is unknown.
const DEFAULT_SNOW_TO_LIQUID: f64 = 10.0;

/// Liquid equivalent of one unit of ice pellets / freezing rain accumulation.
const ICE_DENSITY: f64 = 0.92;

/// Snow depth per unit of melted water at the given temperature.
///
/// Linear between table points, flat beyond both ends.
pub fn snow_to_liquid_ratio(temperature: Option<Temperature>) -> f64 {
    let Some(t) = temperature.map(Temperature::in_celsius) else {
        return DEFAULT_SNOW_TO_LIQUID;
    };

    let (first_t, first_ratio) = SNOW_TO_LIQUID[0];
    if t <= first_t {
        return first_ratio;
    }
    for pair in SNOW_TO_LIQUID.windows(2) {
        let (t0, r0) = pair[0];
        let (t1, r1) = pair[1];
        if t <= t1 {
            return r0 + (r1 - r0) * (t - t0) / (t1 - t0);
        }
    }
    SNOW_TO_LIQUID[SNOW_TO_LIQUID.len() - 1].1
}

/// Total liquid-equivalent precipitation
///
/// total = rain + snow / SLR(T) + ice × 0.92
///
/// Missing components count as zero.
///
/// # Returns
/// `None` only when rain, snow and ice are all missing
pub fn compute_total_precipitation(
    temperature: Option<Temperature>,
    rain: Option<Precipitation>,
    snow: Option<Precipitation>,
    ice: Option<Precipitation>,
) -> Option<Precipitation> {
    if rain.is_none() && snow.is_none() && ice.is_none() {
        return None;
    }

    let micrometers = |p: Option<Precipitation>| p.map_or(0.0, |p| p.reference() as f64);
    let total = micrometers(rain)
        + micrometers(snow) / snow_to_liquid_ratio(temperature)
        + micrometers(ice) * ICE_DENSITY;

    Precipitation::try_new(total, PrecipitationUnit::Micrometer).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{PrecipitationExt, TemperatureExt};
    use approx::assert_relative_eq;

    #[test]
    fn test_nothing_reported() {
        assert_eq!(compute_total_precipitation(None, None, None, None), None);
        assert_eq!(
            compute_total_precipitation(Some(0.celsius()), None, None, None),
            None
        );
    }

    #[test]
    fn test_rain_only() {
        assert_eq!(
            compute_total_precipitation(Some(0.celsius()), Some(5.mm()), None, None),
            Some(5.mm())
        );
        assert_eq!(
            compute_total_precipitation(None, Some(5.mm()), None, None),
            Some(5.mm())
        );
    }

    #[test]
    fn test_snow_is_melted() {
        let total =
            compute_total_precipitation(Some((-12).celsius()), None, Some(10.cm()), None).unwrap();
        assert_relative_eq!(total.in_millimeters(), 100.0 / 30.0, epsilon = 1e-3);

        let unknown_temperature =
            compute_total_precipitation(None, None, Some(10.cm()), None).unwrap();
        assert_eq!(unknown_temperature, 10.mm());
    }

    #[test]
    fn test_mixed() {
        let total = compute_total_precipitation(
            Some(0.celsius()),
            Some(2.mm()),
            Some(10.mm()),
            Some(1.mm()),
        )
        .unwrap();
        assert_eq!(total, 3.92.mm());
    }

    #[test]
    fn test_snow_to_liquid_ratio() {
        assert_eq!(snow_to_liquid_ratio(None), 10.0);
        assert_eq!(snow_to_liquid_ratio(Some((-40).celsius())), 50.0);
        assert_eq!(snow_to_liquid_ratio(Some((-18).celsius())), 40.0);
        assert_eq!(snow_to_liquid_ratio(Some(15.celsius())), 10.0);
        assert_relative_eq!(snow_to_liquid_ratio(Some((-15).celsius())), 35.0, epsilon = 1e-9);
        assert_relative_eq!(snow_to_liquid_ratio(Some((-8).celsius())), 17.5, epsilon = 1e-9);
    }

    #[test]
    fn test_colder_snow_is_drier() {
        let mut previous = f64::INFINITY;
        for t in -35..=5 {
            let ratio = snow_to_liquid_ratio(Some(t.celsius()));
            assert!(ratio <= previous, "ratio rose at {t} °C");
            previous = ratio;
        }
    }
}
