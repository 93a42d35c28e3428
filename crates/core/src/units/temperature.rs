//! Air temperature, stored in deci-degrees Celsius.

use super::{format_number, round_half_up, Conversion, Magnitude, Quantity, Unit, UnitInfo};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Temperature in deci-degrees Celsius (0.1 °C steps)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Temperature(i64);

impl Quantity for Temperature {
    type Unit = TemperatureUnit;
    const NAME: &'static str = "temperature";

    #[inline]
    fn from_reference(magnitude: i64) -> Self {
        Temperature(magnitude)
    }

    #[inline]
    fn reference(self) -> i64 {
        self.0
    }
}

impl Temperature {
    /// Water freezing point
    pub const FREEZING: Temperature = Temperature(0);

    /// Deci-degrees per degree
    const SCALE: f64 = 10.0;

    #[inline]
    #[must_use]
    pub fn in_celsius(self) -> f64 {
        self.0 as f64 / Self::SCALE
    }

    #[inline]
    #[must_use]
    pub fn in_fahrenheit(self) -> f64 {
        self.to_f64(TemperatureUnit::Fahrenheit)
    }

    #[inline]
    #[must_use]
    pub fn in_kelvin(self) -> f64 {
        self.to_f64(TemperatureUnit::Kelvin)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} °C", self.in_celsius())
    }
}

// Temperature - Temperature = TemperatureDelta
// Arithmetic saturates at the i64 bounds, like construction
impl Sub for Temperature {
    type Output = TemperatureDelta;
    fn sub(self, rhs: Temperature) -> TemperatureDelta {
        TemperatureDelta(self.0.saturating_sub(rhs.0))
    }
}

impl Add<TemperatureDelta> for Temperature {
    type Output = Temperature;
    fn add(self, rhs: TemperatureDelta) -> Temperature {
        Temperature(self.0.saturating_add(rhs.0))
    }
}

impl Sub<TemperatureDelta> for Temperature {
    type Output = Temperature;
    fn sub(self, rhs: TemperatureDelta) -> Temperature {
        Temperature(self.0.saturating_sub(rhs.0))
    }
}

/// Temperature difference in deci-degrees Celsius
///
/// Differences convert by scale only: 1 °C of difference is 1 K and 1.8 °F.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct TemperatureDelta(i64);

impl TemperatureDelta {
    /// Build a difference expressed in `unit`. Panics on NaN.
    #[must_use]
    #[track_caller]
    pub fn new(value: f64, unit: TemperatureUnit) -> Self {
        let canonical = value * Temperature::SCALE / unit.degree_size();
        assert!(!canonical.is_nan(), "temperature delta value is NaN");
        TemperatureDelta(round_half_up(canonical))
    }

    /// Difference expressed in `unit`.
    #[must_use]
    pub fn to_f64(self, unit: TemperatureUnit) -> f64 {
        self.0 as f64 / Temperature::SCALE * unit.degree_size()
    }

    #[inline]
    #[must_use]
    pub fn in_celsius(self) -> f64 {
        self.to_f64(TemperatureUnit::Celsius)
    }

    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        TemperatureDelta(self.0.saturating_abs())
    }
}

impl Neg for TemperatureDelta {
    type Output = TemperatureDelta;
    fn neg(self) -> TemperatureDelta {
        TemperatureDelta(self.0.saturating_neg())
    }
}

impl fmt::Display for TemperatureDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} °C", format_number(self.in_celsius(), 1))
    }
}

// ============================================================================
// UNITS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "°C")]
    Celsius,
    #[serde(rename = "°F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
}

const CELSIUS: UnitInfo = UnitInfo {
    id: "°C",
    symbol: "°C",
    name: "degrees Celsius",
    max_decimals: 1,
    conversion: Conversion::new(|v| v * 10.0, |r| r / 10.0),
};

const FAHRENHEIT: UnitInfo = UnitInfo {
    id: "°F",
    symbol: "°F",
    name: "degrees Fahrenheit",
    max_decimals: 1,
    conversion: Conversion::new(|v| (v - 32.0) / 1.8 * 10.0, |r| r / 10.0 * 1.8 + 32.0),
};

const KELVIN: UnitInfo = UnitInfo {
    id: "K",
    symbol: "K",
    name: "kelvins",
    max_decimals: 2,
    conversion: Conversion::new(|v| (v - 273.15) * 10.0, |r| r / 10.0 + 273.15),
};

impl TemperatureUnit {
    /// How many degrees of this unit span 1 °C.
    fn degree_size(self) -> f64 {
        match self {
            TemperatureUnit::Celsius | TemperatureUnit::Kelvin => 1.0,
            TemperatureUnit::Fahrenheit => 1.8,
        }
    }
}

impl Unit for TemperatureUnit {
    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    fn info(self) -> &'static UnitInfo {
        match self {
            TemperatureUnit::Celsius => &CELSIUS,
            TemperatureUnit::Fahrenheit => &FAHRENHEIT,
            TemperatureUnit::Kelvin => &KELVIN,
        }
    }
}

/// `25.celsius()`, `77.0.fahrenheit()`, ...
pub trait TemperatureExt {
    fn celsius(self) -> Temperature;
    fn fahrenheit(self) -> Temperature;
    fn kelvin(self) -> Temperature;
}

impl<T: Magnitude> TemperatureExt for T {
    fn celsius(self) -> Temperature {
        self.into_quantity(TemperatureUnit::Celsius)
    }

    fn fahrenheit(self) -> Temperature {
        self.into_quantity(TemperatureUnit::Fahrenheit)
    }

    fn kelvin(self) -> Temperature {
        self.into_quantity(TemperatureUnit::Kelvin)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnitError;

    #[test]
    fn test_celsius_is_stored_in_tenths() {
        assert_eq!(21.5.celsius().reference(), 215);
        assert_eq!(21.celsius().reference(), 210);
        // Half steps round up, not away from zero
        assert_eq!(0.25.celsius().reference(), 3);
        assert_eq!((-0.25).celsius().reference(), -2);
    }

    #[test]
    fn test_fahrenheit_conversion() {
        let t = 70.fahrenheit();
        assert_eq!(t.reference(), 211);
        assert!((t.in_celsius() - 21.1).abs() < 1e-9);
        assert_eq!((-40).fahrenheit(), (-40).celsius());
        assert!((100.celsius().in_fahrenheit() - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_kelvin_conversion() {
        assert_eq!(273.15.kelvin(), Temperature::FREEZING);
        assert!((25.celsius().in_kelvin() - 298.15).abs() < 1e-9);
    }

    #[test]
    fn test_ordering_follows_magnitude() {
        assert!(10.celsius() < 51.fahrenheit());
        assert!(283.kelvin() < 10.celsius());
        assert_eq!(5.celsius().max(41.fahrenheit()), 5.celsius());
    }

    #[test]
    #[should_panic(expected = "temperature value is NaN")]
    fn test_nan_panics() {
        let _ = f64::NAN.celsius();
    }

    #[test]
    fn test_try_new_reports_nan() {
        let err = Temperature::try_new(f64::NAN, TemperatureUnit::Kelvin).unwrap_err();
        assert_eq!(
            err,
            UnitError::NotANumber {
                quantity: "temperature"
            }
        );
    }

    #[test]
    fn test_to_string_clamps_decimals() {
        let t = 21.5.celsius();
        assert_eq!(t.to_string_in(TemperatureUnit::Celsius, 0), "22°C");
        assert_eq!(t.to_string_in(TemperatureUnit::Celsius, 1), "21.5°C");
        assert_eq!(t.to_string_in(TemperatureUnit::Celsius, 6), "21.5°C");
        assert_eq!(t.to_string_in(TemperatureUnit::Fahrenheit, 1), "70.7°F");
    }

    #[test]
    fn test_display() {
        assert_eq!(21.5.celsius().to_string(), "21.5 °C");
        assert_eq!(
            21.5.celsius().format_display(TemperatureUnit::Fahrenheit, 2),
            "70.7 °F"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(Temperature::parse("21.5°C").unwrap(), 21.5.celsius());
        assert_eq!(Temperature::parse("-40°F").unwrap(), (-40).celsius());
        assert_eq!(Temperature::parse("273.15K").unwrap(), Temperature::FREEZING);
        assert!(Temperature::parse_or_none("21.5 C").is_none());
    }

    #[test]
    fn test_delta() {
        let delta = 25.celsius() - 20.celsius();
        assert!((delta.in_celsius() - 5.0).abs() < 1e-9);
        assert!((delta.to_f64(TemperatureUnit::Fahrenheit) - 9.0).abs() < 1e-9);
        assert!((delta.to_f64(TemperatureUnit::Kelvin) - 5.0).abs() < 1e-9);
        assert_eq!(20.celsius() + delta, 25.celsius());
        assert_eq!(25.celsius() - delta, 20.celsius());
        assert_eq!((-delta).abs(), delta);
        assert_eq!(TemperatureDelta::new(9.0, TemperatureUnit::Fahrenheit), delta);
        assert_eq!(delta.to_string(), "5.0 °C");
    }

    #[test]
    fn test_arithmetic_saturates() {
        let hottest = Temperature::from_reference(i64::MAX);
        let coldest = Temperature::from_reference(i64::MIN);
        assert_eq!(hottest - coldest, TemperatureDelta(i64::MAX));
        assert_eq!(coldest - hottest, TemperatureDelta(i64::MIN));
        assert_eq!(hottest + TemperatureDelta(1), hottest);
        assert_eq!(coldest - TemperatureDelta(1), coldest);
        assert_eq!(-TemperatureDelta(i64::MIN), TemperatureDelta(i64::MAX));
        assert_eq!(TemperatureDelta(i64::MIN).abs(), TemperatureDelta(i64::MAX));
        // Infinite input saturates on construction, then stays put
        assert_eq!(f64::INFINITY.celsius() + (5.celsius() - Temperature::FREEZING), hottest);
    }
}
