//! Unit-aware formatting for [`std::time::Duration`] (sunshine hours, daylight).

use super::format_number;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationUnit {
    #[serde(rename = "s")]
    Second,
    #[serde(rename = "min")]
    Minute,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "d")]
    Day,
}

impl DurationUnit {
    pub const ALL: [DurationUnit; 4] = [
        DurationUnit::Second,
        DurationUnit::Minute,
        DurationUnit::Hour,
        DurationUnit::Day,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DurationUnit::Second => "s",
            DurationUnit::Minute => "min",
            DurationUnit::Hour => "h",
            DurationUnit::Day => "d",
        }
    }

    fn seconds(self) -> f64 {
        match self {
            DurationUnit::Second => 1.0,
            DurationUnit::Minute => 60.0,
            DurationUnit::Hour => 3_600.0,
            DurationUnit::Day => 86_400.0,
        }
    }

    fn max_decimals(self) -> u8 {
        match self {
            DurationUnit::Second => 3,
            DurationUnit::Minute | DurationUnit::Hour | DurationUnit::Day => 2,
        }
    }
}

/// Unit conversions on [`Duration`].
pub trait DurationExt {
    /// Length of the duration expressed in `unit`.
    fn to_f64_in(&self, unit: DurationUnit) -> f64;

    /// `<number><unit id>`, e.g. `"7.5h"`; decimals are clamped per unit.
    fn format_in(&self, unit: DurationUnit, decimals: u8) -> String;
}

impl DurationExt for Duration {
    fn to_f64_in(&self, unit: DurationUnit) -> f64 {
        self.as_secs_f64() / unit.seconds()
    }

    fn format_in(&self, unit: DurationUnit, decimals: u8) -> String {
        let number = format_number(self.to_f64_in(unit), decimals.min(unit.max_decimals()));
        format!("{number}{}", unit.id())
    }
}
