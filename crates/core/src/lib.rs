//! Weather Unit Core Library
//!
//! Typed physical quantities for weather data and the meteorological
//! derivations computed from them.
//!
//! ## Value types
//!
//! Temperatures, ratios, precipitation amounts, concentrations, pressures,
//! speeds and distances are integer newtypes in a fixed canonical unit.
//! They convert to any sibling unit, format to a compact machine string
//! (`"21.5°C"`, `"4.2mm"`) and parse that string back.
//!
//! ## Derivations
//!
//! [`meteo`] fills in values a forecast provider left out: apparent
//! temperature, wind chill, humidex, relative humidity, dew point, total
//! precipitation and mean sea level pressure.
//!
//! ```
//! use weather_unit_core::meteo::compute_wind_chill_temperature;
//! use weather_unit_core::{SpeedExt, TemperatureExt};
//!
//! let feels_like =
//!     compute_wind_chill_temperature(Some((-5).celsius()), Some(10.kilometers_per_hour()));
//! assert!(feels_like.is_some_and(|t| t < (-5).celsius()));
//! ```

pub mod error;
pub mod meteo;
pub mod units;

// Re-export core types
pub use error::{ParseFailure, UnitError};
pub use units::{convert, Conversion, Magnitude, Quantity, Unit, UnitInfo};

// Re-export value types and their units
pub use units::{
    Distance, DistanceUnit, DurationUnit, PollenConcentration, PollenConcentrationUnit,
    PollutantConcentration, PollutantConcentrationUnit, Precipitation, PrecipitationUnit,
    Pressure, PressureUnit, Ratio, RatioUnit, Speed, SpeedUnit, Temperature, TemperatureDelta,
    TemperatureUnit,
};

// Re-export constructor extensions
pub use units::{
    DistanceExt, DurationExt, PollenConcentrationExt, PollutantConcentrationExt,
    PrecipitationExt, PressureExt, RatioExt, SpeedExt, TemperatureExt,
};
