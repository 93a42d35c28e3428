//! Pollen grain counts per cubic metre of air.

use super::{Conversion, Magnitude, Quantity, Unit, UnitInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pollen concentration in grains/m³
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct PollenConcentration(i64);

impl Quantity for PollenConcentration {
    type Unit = PollenConcentrationUnit;
    const NAME: &'static str = "pollen concentration";

    #[inline]
    fn from_reference(magnitude: i64) -> Self {
        PollenConcentration(magnitude)
    }

    #[inline]
    fn reference(self) -> i64 {
        self.0
    }
}

impl PollenConcentration {
    #[inline]
    #[must_use]
    pub fn in_per_cubic_meter(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for PollenConcentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_display(PollenConcentrationUnit::PerCubicMeter, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollenConcentrationUnit {
    #[serde(rename = "/m³")]
    PerCubicMeter,
}

const PER_CUBIC_METER: UnitInfo = UnitInfo {
    id: "/m³",
    symbol: "/m³",
    name: "per cubic meter",
    max_decimals: 0,
    conversion: Conversion::REFERENCE,
};

impl Unit for PollenConcentrationUnit {
    const ALL: &'static [Self] = &[PollenConcentrationUnit::PerCubicMeter];

    fn info(self) -> &'static UnitInfo {
        match self {
            PollenConcentrationUnit::PerCubicMeter => &PER_CUBIC_METER,
        }
    }
}

/// `120.per_cubic_meter()`
pub trait PollenConcentrationExt {
    fn per_cubic_meter(self) -> PollenConcentration;
}

impl<T: Magnitude> PollenConcentrationExt for T {
    fn per_cubic_meter(self) -> PollenConcentration {
        self.into_quantity(PollenConcentrationUnit::PerCubicMeter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let grass = 120.per_cubic_meter();
        assert_eq!(grass.in_per_cubic_meter(), 120.0);
        assert_eq!(grass.to_string(), "120 /m³");
        assert_eq!(grass.to_string_in(PollenConcentrationUnit::PerCubicMeter, 4), "120/m³");
        assert_eq!(PollenConcentration::parse("120/m³").unwrap(), grass);
        assert_eq!(7.6.per_cubic_meter(), 8.per_cubic_meter());
    }
}
