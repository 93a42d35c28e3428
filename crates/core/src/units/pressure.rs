//! Atmospheric pressure, stored in pascals.

use super::{Conversion, Magnitude, Quantity, Unit, UnitInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pressure in pascals
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Pressure(i64);

impl Quantity for Pressure {
    type Unit = PressureUnit;
    const NAME: &'static str = "pressure";

    #[inline]
    fn from_reference(magnitude: i64) -> Self {
        Pressure(magnitude)
    }

    #[inline]
    fn reference(self) -> i64 {
        self.0
    }
}

impl Pressure {
    /// ICAO standard sea level pressure (1013.25 hPa)
    pub const STANDARD_ATMOSPHERE: Pressure = Pressure(101_325);

    #[inline]
    #[must_use]
    pub fn in_pascals(self) -> f64 {
        self.0 as f64
    }

    #[inline]
    #[must_use]
    pub fn in_hectopascals(self) -> f64 {
        self.to_f64(PressureUnit::Hectopascal)
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_display(PressureUnit::Hectopascal, 1))
    }
}

// ============================================================================
// UNITS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    #[serde(rename = "Pa")]
    Pascal,
    #[serde(rename = "hPa")]
    Hectopascal,
    #[serde(rename = "mbar")]
    Millibar,
    #[serde(rename = "kPa")]
    Kilopascal,
    #[serde(rename = "atm")]
    Atmosphere,
    #[serde(rename = "mmHg")]
    MillimeterOfMercury,
    #[serde(rename = "inHg")]
    InchOfMercury,
    #[serde(rename = "psi")]
    PoundPerSquareInch,
}

const PASCAL: UnitInfo = UnitInfo {
    id: "Pa",
    symbol: "Pa",
    name: "pascals",
    max_decimals: 0,
    conversion: Conversion::REFERENCE,
};

const HECTOPASCAL: UnitInfo = UnitInfo {
    id: "hPa",
    symbol: "hPa",
    name: "hectopascals",
    max_decimals: 2,
    conversion: Conversion::new(|v| v * 100.0, |r| r / 100.0),
};

const MILLIBAR: UnitInfo = UnitInfo {
    id: "mbar",
    symbol: "mb",
    name: "millibars",
    max_decimals: 2,
    conversion: HECTOPASCAL.conversion,
};

const KILOPASCAL: UnitInfo = UnitInfo {
    id: "kPa",
    symbol: "kPa",
    name: "kilopascals",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 1_000.0, |r| r / 1_000.0),
};

const ATMOSPHERE: UnitInfo = UnitInfo {
    id: "atm",
    symbol: "atm",
    name: "atmospheres",
    max_decimals: 6,
    conversion: Conversion::new(|v| v * 101_325.0, |r| r / 101_325.0),
};

const MILLIMETER_OF_MERCURY: UnitInfo = UnitInfo {
    id: "mmHg",
    symbol: "mmHg",
    name: "millimeters of mercury",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 133.322_387_415, |r| r / 133.322_387_415),
};

const INCH_OF_MERCURY: UnitInfo = UnitInfo {
    id: "inHg",
    symbol: "inHg",
    name: "inches of mercury",
    max_decimals: 4,
    conversion: Conversion::new(|v| v * 3_386.389, |r| r / 3_386.389),
};

const POUND_PER_SQUARE_INCH: UnitInfo = UnitInfo {
    id: "psi",
    symbol: "psi",
    name: "pounds per square inch",
    max_decimals: 4,
    conversion: Conversion::new(|v| v * 6_894.757_293_168, |r| r / 6_894.757_293_168),
};

impl Unit for PressureUnit {
    const ALL: &'static [Self] = &[
        PressureUnit::Pascal,
        PressureUnit::Hectopascal,
        PressureUnit::Millibar,
        PressureUnit::Kilopascal,
        PressureUnit::Atmosphere,
        PressureUnit::MillimeterOfMercury,
        PressureUnit::InchOfMercury,
        PressureUnit::PoundPerSquareInch,
    ];

    fn info(self) -> &'static UnitInfo {
        match self {
            PressureUnit::Pascal => &PASCAL,
            PressureUnit::Hectopascal => &HECTOPASCAL,
            PressureUnit::Millibar => &MILLIBAR,
            PressureUnit::Kilopascal => &KILOPASCAL,
            PressureUnit::Atmosphere => &ATMOSPHERE,
            PressureUnit::MillimeterOfMercury => &MILLIMETER_OF_MERCURY,
            PressureUnit::InchOfMercury => &INCH_OF_MERCURY,
            PressureUnit::PoundPerSquareInch => &POUND_PER_SQUARE_INCH,
        }
    }
}

/// `1013.25.hectopascals()`, `29.92.inches_of_mercury()`, ...
pub trait PressureExt {
    fn pascals(self) -> Pressure;
    fn hectopascals(self) -> Pressure;
    fn millibars(self) -> Pressure;
    fn inches_of_mercury(self) -> Pressure;
    fn millimeters_of_mercury(self) -> Pressure;
}

impl<T: Magnitude> PressureExt for T {
    fn pascals(self) -> Pressure {
        self.into_quantity(PressureUnit::Pascal)
    }

    fn hectopascals(self) -> Pressure {
        self.into_quantity(PressureUnit::Hectopascal)
    }

    fn millibars(self) -> Pressure {
        self.into_quantity(PressureUnit::Millibar)
    }

    fn inches_of_mercury(self) -> Pressure {
        self.into_quantity(PressureUnit::InchOfMercury)
    }

    fn millimeters_of_mercury(self) -> Pressure {
        self.into_quantity(PressureUnit::MillimeterOfMercury)
    }
}
