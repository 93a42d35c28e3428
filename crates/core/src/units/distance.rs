//! Altitude, visibility and other lengths, stored in millimetres.

use super::{Conversion, Magnitude, Quantity, Unit, UnitInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance in millimetres
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Distance(i64);

impl Quantity for Distance {
    type Unit = DistanceUnit;
    const NAME: &'static str = "distance";

    #[inline]
    fn from_reference(magnitude: i64) -> Self {
        Distance(magnitude)
    }

    #[inline]
    fn reference(self) -> i64 {
        self.0
    }
}

impl Distance {
    pub const ZERO: Distance = Distance(0);

    #[inline]
    #[must_use]
    pub fn in_meters(self) -> f64 {
        self.to_f64(DistanceUnit::Meter)
    }

    #[inline]
    #[must_use]
    pub fn in_kilometers(self) -> f64 {
        self.to_f64(DistanceUnit::Kilometer)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_display(DistanceUnit::Meter, 1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[serde(rename = "mm")]
    Millimeter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "mi")]
    Mile,
    #[serde(rename = "nmi")]
    NauticalMile,
}

const MILLIMETER: UnitInfo = UnitInfo {
    id: "mm",
    symbol: "mm",
    name: "millimeters",
    max_decimals: 0,
    conversion: Conversion::REFERENCE,
};

const CENTIMETER: UnitInfo = UnitInfo {
    id: "cm",
    symbol: "cm",
    name: "centimeters",
    max_decimals: 1,
    conversion: Conversion::new(|v| v * 10.0, |r| r / 10.0),
};

const METER: UnitInfo = UnitInfo {
    id: "m",
    symbol: "m",
    name: "meters",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 1_000.0, |r| r / 1_000.0),
};

const KILOMETER: UnitInfo = UnitInfo {
    id: "km",
    symbol: "km",
    name: "kilometers",
    max_decimals: 6,
    conversion: Conversion::new(|v| v * 1_000_000.0, |r| r / 1_000_000.0),
};

const FOOT: UnitInfo = UnitInfo {
    id: "ft",
    symbol: "ft",
    name: "feet",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 304.8, |r| r / 304.8),
};

const MILE: UnitInfo = UnitInfo {
    id: "mi",
    symbol: "mi",
    name: "miles",
    max_decimals: 7,
    conversion: Conversion::new(|v| v * 1_609_344.0, |r| r / 1_609_344.0),
};

const NAUTICAL_MILE: UnitInfo = UnitInfo {
    id: "nmi",
    symbol: "NM",
    name: "nautical miles",
    max_decimals: 7,
    conversion: Conversion::new(|v| v * 1_852_000.0, |r| r / 1_852_000.0),
};

impl Unit for DistanceUnit {
    const ALL: &'static [Self] = &[
        DistanceUnit::Millimeter,
        DistanceUnit::Centimeter,
        DistanceUnit::Meter,
        DistanceUnit::Kilometer,
        DistanceUnit::Foot,
        DistanceUnit::Mile,
        DistanceUnit::NauticalMile,
    ];

    fn info(self) -> &'static UnitInfo {
        match self {
            DistanceUnit::Millimeter => &MILLIMETER,
            DistanceUnit::Centimeter => &CENTIMETER,
            DistanceUnit::Meter => &METER,
            DistanceUnit::Kilometer => &KILOMETER,
            DistanceUnit::Foot => &FOOT,
            DistanceUnit::Mile => &MILE,
            DistanceUnit::NauticalMile => &NAUTICAL_MILE,
        }
    }
}

/// `350.meters()`, `1200.feet()`, ...
pub trait DistanceExt {
    fn meters(self) -> Distance;
    fn kilometers(self) -> Distance;
    fn feet(self) -> Distance;
    fn miles(self) -> Distance;
}

impl<T: Magnitude> DistanceExt for T {
    fn meters(self) -> Distance {
        self.into_quantity(DistanceUnit::Meter)
    }

    fn kilometers(self) -> Distance {
        self.into_quantity(DistanceUnit::Kilometer)
    }

    fn feet(self) -> Distance {
        self.into_quantity(DistanceUnit::Foot)
    }

    fn miles(self) -> Distance {
        self.into_quantity(DistanceUnit::Mile)
    }
}
