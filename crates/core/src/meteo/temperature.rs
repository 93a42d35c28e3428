//! Feels-like temperatures.
//!
//! # References
//! - Steadman, R.G. (1994). "Norms of apparent temperature in Australia".
//!   Australian Meteorological Magazine, 43, 1-16
//! - Osczevski, R. & Bluestein, M. (2005). "The new wind chill equivalent
//!   temperature chart". Bulletin of the AMS, 86(10), 1453-1458
//! - Masterton, J.M. & Richardson, F.A. (1979). "Humidex". Environment Canada

use super::celsius;
use crate::units::{Ratio, Speed, Temperature};

/// Wind chill is only defined at or below this air temperature (°C).
const WIND_CHILL_MAX_TEMPERATURE: f64 = 10.0;

/// Below this wind speed (km/h) the regular wind chill regression is invalid.
const WIND_CHILL_LOW_WIND: f64 = 5.0;

/// Humidex is only reported from this air temperature (°C) upwards.
const HUMIDEX_MIN_TEMPERATURE: f64 = 15.0;

/// Australian apparent temperature (Steadman 1994, non-radiative form)
///
/// AT = Ta + 0.33×e − 0.70×ws − 4.00
///
/// Where e is the water vapour pressure (hPa):
/// e = rh/100 × 6.105 × exp(17.27×Ta / (237.7 + Ta))
///
/// # Arguments
/// * `temperature` - Dry bulb temperature
/// * `relative_humidity` - Relative humidity
/// * `wind_speed` - Wind speed at 10 m
///
/// # Returns
/// `None` when any input is missing
pub fn compute_apparent_temperature(
    temperature: Option<Temperature>,
    relative_humidity: Option<Ratio>,
    wind_speed: Option<Speed>,
) -> Option<Temperature> {
    let ta = temperature?.in_celsius();
    let rh = relative_humidity?.in_percent();
    let ws = wind_speed?.in_meters_per_second();

    let e = rh / 100.0 * 6.105 * (17.27 * ta / (237.7 + ta)).exp();
    celsius(ta + 0.33 * e - 0.70 * ws - 4.00)
}

/// North American wind chill index (JAG/TI 2001)
///
/// For V ≥ 5 km/h:
/// WC = 13.12 + 0.6215×T − 11.37×V^0.16 + 0.3965×T×V^0.16
///
/// For V < 5 km/h and T ≤ 0 °C the linear approximation
/// WC = T + ((−1.59 + 0.1345×T) / 5) × V
///
/// # Returns
/// `None` when an input is missing, T > 10 °C, the wind is negative, or the
/// wind is light while T is above freezing
pub fn compute_wind_chill_temperature(
    temperature: Option<Temperature>,
    wind_speed: Option<Speed>,
) -> Option<Temperature> {
    let t = temperature?.in_celsius();
    let v = wind_speed?.in_kilometers_per_hour();

    if t > WIND_CHILL_MAX_TEMPERATURE {
        tracing::trace!(t, "wind chill undefined above 10 °C");
        return None;
    }
    if v < 0.0 {
        tracing::trace!(v, "wind chill undefined for negative wind speed");
        return None;
    }

    if v >= WIND_CHILL_LOW_WIND {
        let v016 = v.powf(0.16);
        celsius(13.12 + 0.6215 * t - 11.37 * v016 + 0.3965 * t * v016)
    } else if t <= 0.0 {
        celsius(t + ((-1.59 + 0.1345 * t) / 5.0) * v)
    } else {
        tracing::trace!(t, v, "wind chill undefined for light wind above freezing");
        None
    }
}

/// Canadian humidex
///
/// H = T + 0.5555 × (6.11 × exp(5417.7530 × (1/273.16 − 1/(273.15 + Td))) − 10)
///
/// # Returns
/// `None` when an input is missing or T < 15 °C
pub fn compute_humidex(
    temperature: Option<Temperature>,
    dew_point: Option<Temperature>,
) -> Option<Temperature> {
    let t = temperature?.in_celsius();
    let td = dew_point?.in_celsius();

    if t < HUMIDEX_MIN_TEMPERATURE {
        tracing::trace!(t, "humidex not reported below 15 °C");
        return None;
    }

    let e = 6.11 * (5417.7530 * (1.0 / 273.16 - 1.0 / (273.15 + td))).exp();
    celsius(t + 0.5555 * (e - 10.0))
}
