//! Dimensionless ratios (humidity, cloud cover, probability), stored in permille.

use super::{Conversion, Magnitude, Quantity, Unit, UnitInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ratio in permille (0.1 % steps)
///
/// Not clamped: providers occasionally report humidity slightly above 100 %.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Ratio(i64);

impl Quantity for Ratio {
    type Unit = RatioUnit;
    const NAME: &'static str = "ratio";

    #[inline]
    fn from_reference(magnitude: i64) -> Self {
        Ratio(magnitude)
    }

    #[inline]
    fn reference(self) -> i64 {
        self.0
    }
}

impl Ratio {
    pub const ZERO: Ratio = Ratio(0);

    /// 100 %
    pub const WHOLE: Ratio = Ratio(1000);

    #[inline]
    #[must_use]
    pub fn in_percent(self) -> f64 {
        self.to_f64(RatioUnit::Percent)
    }

    #[inline]
    #[must_use]
    pub fn in_permille(self) -> f64 {
        self.0 as f64
    }

    #[inline]
    #[must_use]
    pub fn in_fraction(self) -> f64 {
        self.to_f64(RatioUnit::Fraction)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_display(RatioUnit::Percent, 1))
    }
}

// ============================================================================
// UNITS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioUnit {
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "‰")]
    Permille,
    #[serde(rename = "fraction")]
    Fraction,
}

const PERCENT: UnitInfo = UnitInfo {
    id: "%",
    symbol: "%",
    name: "percent",
    max_decimals: 1,
    conversion: Conversion::new(|v| v * 10.0, |r| r / 10.0),
};

const PERMILLE: UnitInfo = UnitInfo {
    id: "‰",
    symbol: "‰",
    name: "permille",
    max_decimals: 0,
    conversion: Conversion::REFERENCE,
};

const FRACTION: UnitInfo = UnitInfo {
    id: "fraction",
    symbol: "",
    name: "fraction",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 1000.0, |r| r / 1000.0),
};

impl Unit for RatioUnit {
    const ALL: &'static [Self] = &[RatioUnit::Percent, RatioUnit::Permille, RatioUnit::Fraction];

    fn info(self) -> &'static UnitInfo {
        match self {
            RatioUnit::Percent => &PERCENT,
            RatioUnit::Permille => &PERMILLE,
            RatioUnit::Fraction => &FRACTION,
        }
    }
}

/// `1.percent()`, `0.35.fraction()`, ...
pub trait RatioExt {
    fn percent(self) -> Ratio;
    fn permille(self) -> Ratio;
    fn fraction(self) -> Ratio;
}

impl<T: Magnitude> RatioExt for T {
    fn percent(self) -> Ratio {
        self.into_quantity(RatioUnit::Percent)
    }

    fn permille(self) -> Ratio {
        self.into_quantity(RatioUnit::Permille)
    }

    fn fraction(self) -> Ratio {
        self.into_quantity(RatioUnit::Fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_round_trip() {
        assert!((1.percent().in_percent() - 1.0).abs() < 0.05);
        assert!((42.25.percent().in_percent() - 42.3).abs() < 1e-9);
        assert_eq!(100.percent(), Ratio::WHOLE);
    }

    #[test]
    fn test_fraction_and_permille_agree() {
        assert_eq!(0.5.fraction(), 500.permille());
        assert_eq!(0.5.fraction(), 50.percent());
        assert!((35.percent().in_fraction() - 0.35).abs() < 1e-12);
        assert_eq!(7.permille().in_permille(), 7.0);
    }

    #[test]
    fn test_integer_permille_is_exact() {
        assert_eq!(i64::MAX.permille().reference(), i64::MAX);
    }

    #[test]
    fn test_to_string() {
        let r = 42.5.percent();
        assert_eq!(r.to_string_in(RatioUnit::Percent, 1), "42.5%");
        assert_eq!(r.to_string_in(RatioUnit::Permille, 2), "425‰");
        assert_eq!(r.to_string_in(RatioUnit::Fraction, 5), "0.425fraction");
        assert_eq!(r.to_string(), "42.5 %");
        assert_eq!(r.format_display(RatioUnit::Fraction, 1), "0.4");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Ratio::parse("42.5%").unwrap(), 42.5.percent());
        assert_eq!(Ratio::parse("425‰").unwrap(), 42.5.percent());
        assert_eq!(Ratio::parse("0.425fraction").unwrap(), 42.5.percent());
        assert_eq!(Ratio::parse_or_none("garbage"), None);
        assert_eq!(Ratio::parse_or_none(""), None);
    }

    #[test]
    fn test_clamp_with_ord() {
        let supersaturated = 103.percent();
        assert_eq!(supersaturated.clamp(Ratio::ZERO, Ratio::WHOLE), Ratio::WHOLE);
    }
}
