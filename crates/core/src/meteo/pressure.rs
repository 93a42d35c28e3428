//! Reduction of station pressure to mean sea level.
//!
//! # References
//! - Laplace barometric formula with the Angot corrections, as tabulated in
//!   the Smithsonian Meteorological Tables (List, 1951), table 51

use crate::units::{Distance, Pressure, PressureUnit, Quantity, Ratio, Temperature};

/// Barometric constant (m)
const LAPLACE_HEIGHT: f64 = 18_400.0;

/// Thermal expansion coefficient of air (1/°C)
const ALPHA: f64 = 0.003_665;

/// Mean Earth radius (m)
const EARTH_RADIUS: f64 = 6_371_000.0;

/// Latitude assumed when none is given (degrees)
const DEFAULT_LATITUDE: f64 = 45.0;

/// Saturation vapour pressure over water (hPa), Magnus form (Sonntag 1990).
fn saturation_vapor_pressure(t: f64) -> f64 {
    6.112 * (17.62 * t / (243.12 + t)).exp()
}

/// Mean sea level pressure from station pressure
///
/// p0 = p × 10^(Z / (18400 × (1 + αθ) × (1 + 0.378 e/p) × (1 + 0.0026 cos 2φ) × (1 + Z/R)))
///
/// # Arguments
/// * `barometric_pressure` - Station pressure p
/// * `altitude` - Station height Z above sea level
/// * `temperature` - Air temperature θ; 0 °C when missing
/// * `humidity` - Relative humidity used for the vapour pressure e; dry air when missing
/// * `latitude` - Station latitude φ in degrees; 45° when missing
///
/// # Returns
/// `None` when pressure or altitude is missing
pub fn compute_mean_sea_level_pressure(
    barometric_pressure: Option<Pressure>,
    altitude: Option<Distance>,
    temperature: Option<Temperature>,
    humidity: Option<Ratio>,
    latitude: Option<f64>,
) -> Option<Pressure> {
    let p = barometric_pressure?.in_hectopascals();
    let z = altitude?.in_meters();
    let theta = temperature.map_or(0.0, Temperature::in_celsius);
    let rh = humidity.map_or(0.0, Ratio::in_fraction);
    let phi = latitude.unwrap_or(DEFAULT_LATITUDE).to_radians();

    if p <= 0.0 {
        tracing::trace!(p, "cannot reduce a non-positive station pressure");
        return None;
    }

    let e = rh * saturation_vapor_pressure(theta);
    let temperature_correction = 1.0 + ALPHA * theta;
    let humidity_correction = 1.0 + 0.378 * e / p;
    let latitude_correction = 1.0 + 0.0026 * (2.0 * phi).cos();
    let gravity_correction = 1.0 + z / EARTH_RADIUS;

    let exponent = z
        / (LAPLACE_HEIGHT
            * temperature_correction
            * humidity_correction
            * latitude_correction
            * gravity_correction);
    let p0 = p * 10f64.powf(exponent);

    Pressure::try_new(p0, PressureUnit::Hectopascal).ok()
}
