//! Air pollutant mass concentration, stored in micrograms per cubic metre.

use super::{Conversion, Magnitude, Quantity, Unit, UnitInfo};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pollutant concentration in µg/m³ (PM2.5, PM10, O₃, NO₂, SO₂, CO)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(transparent)]
#[serde(transparent)]
pub struct PollutantConcentration(i64);

impl Quantity for PollutantConcentration {
    type Unit = PollutantConcentrationUnit;
    const NAME: &'static str = "pollutant concentration";

    #[inline]
    fn from_reference(magnitude: i64) -> Self {
        PollutantConcentration(magnitude)
    }

    #[inline]
    fn reference(self) -> i64 {
        self.0
    }
}

impl PollutantConcentration {
    #[inline]
    #[must_use]
    pub fn in_micrograms_per_cubic_meter(self) -> f64 {
        self.0 as f64
    }

    #[inline]
    #[must_use]
    pub fn in_milligrams_per_cubic_meter(self) -> f64 {
        self.to_f64(PollutantConcentrationUnit::MilligramPerCubicMeter)
    }
}

impl fmt::Display for PollutantConcentration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_display(PollutantConcentrationUnit::MicrogramPerCubicMeter, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollutantConcentrationUnit {
    #[serde(rename = "µg/m³")]
    MicrogramPerCubicMeter,
    #[serde(rename = "mg/m³")]
    MilligramPerCubicMeter,
}

const MICROGRAM_PER_CUBIC_METER: UnitInfo = UnitInfo {
    id: "µg/m³",
    symbol: "µg/m³",
    name: "micrograms per cubic meter",
    max_decimals: 0,
    conversion: Conversion::REFERENCE,
};

const MILLIGRAM_PER_CUBIC_METER: UnitInfo = UnitInfo {
    id: "mg/m³",
    symbol: "mg/m³",
    name: "milligrams per cubic meter",
    max_decimals: 3,
    conversion: Conversion::new(|v| v * 1_000.0, |r| r / 1_000.0),
};

impl Unit for PollutantConcentrationUnit {
    const ALL: &'static [Self] = &[
        PollutantConcentrationUnit::MicrogramPerCubicMeter,
        PollutantConcentrationUnit::MilligramPerCubicMeter,
    ];

    fn info(self) -> &'static UnitInfo {
        match self {
            PollutantConcentrationUnit::MicrogramPerCubicMeter => &MICROGRAM_PER_CUBIC_METER,
            PollutantConcentrationUnit::MilligramPerCubicMeter => &MILLIGRAM_PER_CUBIC_METER,
        }
    }
}

/// `35.micrograms_per_cubic_meter()`, `5.milligrams_per_cubic_meter()`
pub trait PollutantConcentrationExt {
    fn micrograms_per_cubic_meter(self) -> PollutantConcentration;
    fn milligrams_per_cubic_meter(self) -> PollutantConcentration;
}

impl<T: Magnitude> PollutantConcentrationExt for T {
    fn micrograms_per_cubic_meter(self) -> PollutantConcentration {
        self.into_quantity(PollutantConcentrationUnit::MicrogramPerCubicMeter)
    }

    fn milligrams_per_cubic_meter(self) -> PollutantConcentration {
        self.into_quantity(PollutantConcentrationUnit::MilligramPerCubicMeter)
    }
}
