//! Wind speed, stored in millimetres per second.

use super::{Conversion, Magnitude, Quantity, Unit, UnitInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Speed in mm/s
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Speed(i64);

impl Quantity for Speed {
    type Unit = SpeedUnit;
    const NAME: &'static str = "speed";

    #[inline]
    fn from_reference(magnitude: i64) -> Self {
        Speed(magnitude)
    }

    #[inline]
    fn reference(self) -> i64 {
        self.0
    }
}

/// Lower bound of Beaufort forces 1 to 12, in mm/s (WMO code table 1100).
const BEAUFORT_LOWER_BOUNDS: [i64; 12] = [
    300, 1_600, 3_400, 5_500, 8_000, 10_800, 13_900, 17_200, 20_800, 24_500, 28_500, 32_700,
];

impl Speed {
    pub const ZERO: Speed = Speed(0);

    #[inline]
    #[must_use]
    pub fn in_meters_per_second(self) -> f64 {
        self.to_f64(SpeedUnit::MeterPerSecond)
    }

    #[inline]
    #[must_use]
    pub fn in_kilometers_per_hour(self) -> f64 {
        self.to_f64(SpeedUnit::KilometerPerHour)
    }

    /// Beaufort force, 0 (calm) to 12 (hurricane).
    #[must_use]
    pub fn beaufort(self) -> u8 {
        BEAUFORT_LOWER_BOUNDS
            .iter()
            .take_while(|&&bound| self.0 >= bound)
            .count() as u8
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_display(SpeedUnit::KilometerPerHour, 1))
    }
}

// ============================================================================
// UNITS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedUnit {
    #[serde(rename = "m/s")]
    MeterPerSecond,
    #[serde(rename = "km/h")]
    KilometerPerHour,
    #[serde(rename = "mph")]
    MilePerHour,
    #[serde(rename = "kn")]
    Knot,
    #[serde(rename = "ft/s")]
    FootPerSecond,
}

const METER_PER_SECOND: UnitInfo = UnitInfo {
    id: "m/s",
    symbol: "m/s",
    name: "meters per second",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 1_000.0, |r| r / 1_000.0),
};

const KILOMETER_PER_HOUR: UnitInfo = UnitInfo {
    id: "km/h",
    symbol: "km/h",
    name: "kilometers per hour",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 1_000.0 / 3.6, |r| r * 3.6 / 1_000.0),
};

const MILE_PER_HOUR: UnitInfo = UnitInfo {
    id: "mph",
    symbol: "mph",
    name: "miles per hour",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 447.04, |r| r / 447.04),
};

const KNOT: UnitInfo = UnitInfo {
    id: "kn",
    symbol: "kn",
    name: "knots",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 1_852_000.0 / 3_600.0, |r| r * 3_600.0 / 1_852_000.0),
};

const FOOT_PER_SECOND: UnitInfo = UnitInfo {
    id: "ft/s",
    symbol: "ft/s",
    name: "feet per second",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 304.8, |r| r / 304.8),
};

impl Unit for SpeedUnit {
    const ALL: &'static [Self] = &[
        SpeedUnit::MeterPerSecond,
        SpeedUnit::KilometerPerHour,
        SpeedUnit::MilePerHour,
        SpeedUnit::Knot,
        SpeedUnit::FootPerSecond,
    ];

    fn info(self) -> &'static UnitInfo {
        match self {
            SpeedUnit::MeterPerSecond => &METER_PER_SECOND,
            SpeedUnit::KilometerPerHour => &KILOMETER_PER_HOUR,
            SpeedUnit::MilePerHour => &MILE_PER_HOUR,
            SpeedUnit::Knot => &KNOT,
            SpeedUnit::FootPerSecond => &FOOT_PER_SECOND,
        }
    }
}

/// `10.kilometers_per_hour()`, `3.5.meters_per_second()`, ...
pub trait SpeedExt {
    fn meters_per_second(self) -> Speed;
    fn kilometers_per_hour(self) -> Speed;
    fn miles_per_hour(self) -> Speed;
    fn knots(self) -> Speed;
    fn feet_per_second(self) -> Speed;
}

impl<T: Magnitude> SpeedExt for T {
    fn meters_per_second(self) -> Speed {
        self.into_quantity(SpeedUnit::MeterPerSecond)
    }

    fn kilometers_per_hour(self) -> Speed {
        self.into_quantity(SpeedUnit::KilometerPerHour)
    }

    fn miles_per_hour(self) -> Speed {
        self.into_quantity(SpeedUnit::MilePerHour)
    }

    fn knots(self) -> Speed {
        self.into_quantity(SpeedUnit::Knot)
    }

    fn feet_per_second(self) -> Speed {
        self.into_quantity(SpeedUnit::FootPerSecond)
    }
}
