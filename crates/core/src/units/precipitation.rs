//! Precipitation depth, stored in micrometres.

use super::{Conversion, Magnitude, Quantity, Unit, UnitInfo};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Precipitation depth in micrometres (liquid water equivalent unless noted)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Precipitation(i64);

impl Quantity for Precipitation {
    type Unit = PrecipitationUnit;
    const NAME: &'static str = "precipitation";

    #[inline]
    fn from_reference(magnitude: i64) -> Self {
        Precipitation(magnitude)
    }

    #[inline]
    fn reference(self) -> i64 {
        self.0
    }
}

impl Precipitation {
    pub const ZERO: Precipitation = Precipitation(0);

    #[inline]
    #[must_use]
    pub fn in_millimeters(self) -> f64 {
        self.to_f64(PrecipitationUnit::Millimeter)
    }

    #[inline]
    #[must_use]
    pub fn in_micrometers(self) -> f64 {
        self.0 as f64
    }
}

impl Add for Precipitation {
    type Output = Precipitation;
    fn add(self, rhs: Precipitation) -> Precipitation {
        Precipitation(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Precipitation {
    fn sum<I: Iterator<Item = Precipitation>>(iter: I) -> Self {
        iter.fold(Precipitation::ZERO, Add::add)
    }
}

impl fmt::Display for Precipitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_display(PrecipitationUnit::Millimeter, 1))
    }
}

// ============================================================================
// UNITS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrecipitationUnit {
    #[serde(rename = "µm")]
    Micrometer,
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "L/m²")]
    LiterPerSquareMeter,
}

const MICROMETER: UnitInfo = UnitInfo {
    id: "µm",
    symbol: "µm",
    name: "micrometers",
    max_decimals: 0,
    conversion: Conversion::REFERENCE,
};

const MILLIMETER: UnitInfo = UnitInfo {
    id: "mm",
    symbol: "mm",
    name: "millimeters",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 1_000.0, |r| r / 1_000.0),
};

const CENTIMETER: UnitInfo = UnitInfo {
    id: "cm",
    symbol: "cm",
    name: "centimeters",
    max_decimals: 4,
    conversion: Conversion::new(|v| v * 10_000.0, |r| r / 10_000.0),
};

const INCH: UnitInfo = UnitInfo {
    id: "in",
    symbol: "in",
    name: "inches",
    max_decimals: 5,
    conversion: Conversion::new(|v| v * 25_400.0, |r| r / 25_400.0),
};

// One litre spread over one square metre is one millimetre deep
const LITER_PER_SQUARE_METER: UnitInfo = UnitInfo {
    id: "L/m²",
    symbol: "L/m²",
    name: "liters per square meter",
    max_decimals: 3,
    conversion: MILLIMETER.conversion,
};

impl Unit for PrecipitationUnit {
    const ALL: &'static [Self] = &[
        PrecipitationUnit::Micrometer,
        PrecipitationUnit::Millimeter,
        PrecipitationUnit::Centimeter,
        PrecipitationUnit::Inch,
        PrecipitationUnit::LiterPerSquareMeter,
    ];

    fn info(self) -> &'static UnitInfo {
        match self {
            PrecipitationUnit::Micrometer => &MICROMETER,
            PrecipitationUnit::Millimeter => &MILLIMETER,
            PrecipitationUnit::Centimeter => &CENTIMETER,
            PrecipitationUnit::Inch => &INCH,
            PrecipitationUnit::LiterPerSquareMeter => &LITER_PER_SQUARE_METER,
        }
    }
}

/// `5.mm()`, `0.2.inches()`, ...
pub trait PrecipitationExt {
    fn micrometers(self) -> Precipitation;
    fn mm(self) -> Precipitation;
    fn cm(self) -> Precipitation;
    fn inches(self) -> Precipitation;
}

impl<T: Magnitude> PrecipitationExt for T {
    fn micrometers(self) -> Precipitation {
        self.into_quantity(PrecipitationUnit::Micrometer)
    }

    fn mm(self) -> Precipitation {
        self.into_quantity(PrecipitationUnit::Millimeter)
    }

    fn cm(self) -> Precipitation {
        self.into_quantity(PrecipitationUnit::Centimeter)
    }

    fn inches(self) -> Precipitation {
        self.into_quantity(PrecipitationUnit::Inch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimeters() {
        assert_eq!(5.mm().reference(), 5_000);
        assert_eq!(5.mm().in_millimeters(), 5.0);
        assert_eq!(0.5.cm(), 5.mm());
        assert_eq!(
            Precipitation::new(5.0, PrecipitationUnit::LiterPerSquareMeter),
            5.mm()
        );
    }

    #[test]
    fn test_inches() {
        assert_eq!(1.inches(), 25.4.mm());
        assert!((10.mm().to_f64(PrecipitationUnit::Inch) - 0.393_700_787).abs() < 1e-9);
    }

    #[test]
    fn test_sum() {
        let total: Precipitation = [1.mm(), 2.5.mm(), 300.micrometers()].into_iter().sum();
        assert_eq!(total, 3.8.mm());
    }

    #[test]
    fn test_sum_saturates() {
        let flood = Precipitation::from_reference(i64::MAX - 10);
        assert_eq!(flood + 1.mm(), Precipitation::from_reference(i64::MAX));
        let total: Precipitation = [flood, flood, 5.mm()].into_iter().sum();
        assert_eq!(total, Precipitation::from_reference(i64::MAX));
    }

    #[test]
    fn test_to_string_and_parse() {
        let p = 12.345.mm();
        assert_eq!(p.to_string_in(PrecipitationUnit::Millimeter, 9), "12.345mm");
        assert_eq!(p.to_string_in(PrecipitationUnit::Micrometer, 2), "12345µm");
        assert_eq!(p.to_string(), "12.3 mm");
        assert_eq!(Precipitation::parse("12.345mm").unwrap(), p);
        assert_eq!(Precipitation::parse("1.2345cm").unwrap(), p);
        assert_eq!(Precipitation::parse("12.345L/m²").unwrap(), p);
    }
}
