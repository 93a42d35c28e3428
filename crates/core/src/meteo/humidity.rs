//! Relative humidity and dew point through the Magnus approximation.
//!
//! # References
//! - Sonntag, D. (1990). "Important new values of the physical constants of
//!   1986, vapour pressure formulations based on the ITS-90"
//!   Zeitschrift für Meteorologie, 40(5), 340-344

use super::celsius;
use crate::units::{Quantity, Ratio, RatioUnit, Temperature};

/// Magnus (b, c) over water and over ice.
const MAGNUS_WATER: (f64, f64) = (17.368, 238.88);
const MAGNUS_ICE: (f64, f64) = (17.966, 247.15);

/// Coefficients for the given air temperature (°C).
fn magnus_coefficients(t: f64) -> (f64, f64) {
    if t >= 0.0 {
        MAGNUS_WATER
    } else {
        MAGNUS_ICE
    }
}

/// Relative humidity from air temperature and dew point
///
/// RH = exp(b×Td/(c+Td)) / exp(b×T/(c+T))
///
/// Coefficients are picked from the air temperature, so the same pair is
/// used in [`compute_dew_point`].
///
/// # Returns
/// Relative humidity clamped to 0-100 %, or `None` when an input is missing
pub fn compute_relative_humidity(
    temperature: Option<Temperature>,
    dew_point: Option<Temperature>,
) -> Option<Ratio> {
    let t = temperature?.in_celsius();
    let td = dew_point?.in_celsius();
    let (b, c) = magnus_coefficients(t);

    let ratio = ((b * td / (c + td)) - (b * t / (c + t))).exp();
    let rh = Ratio::try_new(ratio, RatioUnit::Fraction).ok()?;
    Some(rh.clamp(Ratio::ZERO, Ratio::WHOLE))
}

/// Dew point from air temperature and relative humidity
///
/// γ = ln(RH) + b×T/(c+T)
/// Td = c×γ / (b − γ)
///
/// # Returns
/// `None` when an input is missing, the humidity is not positive, or the
/// inputs lie where the Magnus inverse diverges
pub fn compute_dew_point(
    temperature: Option<Temperature>,
    relative_humidity: Option<Ratio>,
) -> Option<Temperature> {
    let t = temperature?.in_celsius();
    let rh = relative_humidity?;

    if rh <= Ratio::ZERO {
        tracing::trace!(%rh, "dew point undefined for non-positive humidity");
        return None;
    }

    let (b, c) = magnus_coefficients(t);
    let gamma = rh.in_fraction().ln() + b * t / (c + t);
    let denominator = b - gamma;
    // The Magnus inverse diverges as gamma reaches b
    if !denominator.is_finite() || denominator <= 0.0 {
        tracing::trace!(t, %rh, gamma, "dew point outside the Magnus range");
        return None;
    }
    celsius(c * gamma / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{RatioExt, TemperatureExt};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_relative_humidity() {
        let rh = compute_relative_humidity(Some(20.celsius()), Some(10.celsius())).unwrap();
        assert_abs_diff_eq!(rh.in_percent(), 52.5, epsilon = 0.2);
    }

    #[test]
    fn test_saturated_air() {
        let rh = compute_relative_humidity(Some(12.celsius()), Some(12.celsius())).unwrap();
        assert_eq!(rh, Ratio::WHOLE);

        // Dew point above air temperature is clamped to saturation
        let rh = compute_relative_humidity(Some(12.celsius()), Some(14.celsius())).unwrap();
        assert_eq!(rh, Ratio::WHOLE);
    }

    #[test]
    fn test_relative_humidity_below_freezing() {
        let rh = compute_relative_humidity(Some((-10).celsius()), Some((-15).celsius())).unwrap();
        assert!(rh > 60.percent() && rh < 75.percent(), "RH was {rh}");
    }

    #[test]
    fn test_dew_point_inverts_relative_humidity() {
        for (t, td) in [(20.0, 10.0), (30.0, 25.0), (5.0, -2.0), (-5.0, -12.0)] {
            let rh = compute_relative_humidity(Some(t.celsius()), Some(td.celsius()));
            let back = compute_dew_point(Some(t.celsius()), rh).unwrap();
            assert_abs_diff_eq!(back.in_celsius(), td, epsilon = 0.15);
        }
    }

    #[test]
    fn test_dew_point_domain() {
        assert_eq!(compute_dew_point(Some(20.celsius()), Some(Ratio::ZERO)), None);
        assert_eq!(compute_dew_point(Some(20.celsius()), Some((-5).percent())), None);
        assert_eq!(compute_dew_point(None, Some(50.percent())), None);
        assert_eq!(compute_dew_point(Some(20.celsius()), Some(Ratio::WHOLE)), Some(20.celsius()));
    }

    #[test]
    fn test_dew_point_divergence() {
        // ln(30) + b×T/(c+T) passes b, so the inverse has no finite solution
        assert_eq!(compute_dew_point(Some(1000.celsius()), Some(3000.percent())), None);
        // c + T changes sign below -247.15 °C on the ice branch
        assert_eq!(compute_dew_point(Some((-250).celsius()), Some(50.percent())), None);

        // Slight supersaturation still has a dew point just above the air temperature
        let td = compute_dew_point(Some(20.celsius()), Some(105.percent())).unwrap();
        assert!(td > 20.celsius() && td < 21.celsius(), "{td}");
    }
}
