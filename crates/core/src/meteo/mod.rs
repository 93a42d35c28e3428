//! Meteorological derivations over typed quantities
//!
//! Forecast providers rarely report every variable. These functions fill
//! the gaps from what is available:
//! - Feels-like temperatures: apparent temperature, wind chill, humidex
//! - Humidity: relative humidity from dew point and back
//! - Total precipitation from rain, snowfall and ice
//! - Mean sea level pressure from station pressure
//!
//! Every input is an `Option`. A missing required input, or one outside the
//! domain where the formula is valid, gives `None` rather than an error.
//! Domain rejections are logged at `trace` level.

mod humidity;
mod precipitation;
mod pressure;
mod temperature;

pub use humidity::{compute_dew_point, compute_relative_humidity};
pub use precipitation::{compute_total_precipitation, snow_to_liquid_ratio};
pub use pressure::compute_mean_sea_level_pressure;
pub use temperature::{
    compute_apparent_temperature, compute_humidex, compute_wind_chill_temperature,
};

use crate::units::{Quantity, Temperature, TemperatureUnit};

/// Build a result temperature from degrees Celsius, dropping NaN.
fn celsius(value: f64) -> Option<Temperature> {
    Temperature::try_new(value, TemperatureUnit::Celsius).ok()
}
