use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use weather_unit_core::meteo::{
    compute_apparent_temperature, compute_dew_point, compute_humidex,
    compute_mean_sea_level_pressure, compute_relative_humidity, compute_total_precipitation,
    compute_wind_chill_temperature,
};
use weather_unit_core::{
    Distance, ParseFailure, PollenConcentration, PollutantConcentration, Precipitation, Pressure,
    Quantity, Ratio, Speed, Temperature, Unit, UnitError,
};

/// Weather unit conversions and derived values
///
/// Quantities are written the way the library prints them: the number
/// immediately followed by the unit id, e.g. `21.5°C`, `64%`, `18km/h`.
#[derive(Parser, Debug)]
#[command(name = "weather-unit")]
#[command(about = "Convert weather quantities and derive feels-like values", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a number between two units of the same quantity
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Source unit id (°C, hPa, km/h, ...)
        from: String,

        /// Target unit id
        to: String,

        /// Decimals to print, capped at the target unit's precision
        #[arg(short, long, default_value_t = 2)]
        decimals: u8,
    },

    /// Parse a quantity string and show its canonical magnitude
    Parse {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Australian apparent temperature
    Apparent {
        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Temperature>)]
        temperature: Temperature,

        #[arg(long, value_parser = quantity::<Ratio>)]
        humidity: Ratio,

        #[arg(long, value_parser = quantity::<Speed>)]
        wind_speed: Speed,
    },

    /// Wind chill temperature
    WindChill {
        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Temperature>)]
        temperature: Temperature,

        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Speed>)]
        wind_speed: Speed,
    },

    /// Canadian humidex
    Humidex {
        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Temperature>)]
        temperature: Temperature,

        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Temperature>)]
        dew_point: Temperature,
    },

    /// Dew point from temperature and relative humidity
    DewPoint {
        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Temperature>)]
        temperature: Temperature,

        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Ratio>)]
        humidity: Ratio,
    },

    /// Relative humidity from temperature and dew point
    RelativeHumidity {
        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Temperature>)]
        temperature: Temperature,

        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Temperature>)]
        dew_point: Temperature,
    },

    /// Liquid-equivalent total of rain, snowfall and ice
    TotalPrecipitation {
        /// Air temperature, used for the snow-to-liquid ratio
        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Temperature>)]
        temperature: Option<Temperature>,

        #[arg(long, value_parser = quantity::<Precipitation>)]
        rain: Option<Precipitation>,

        #[arg(long, value_parser = quantity::<Precipitation>)]
        snow: Option<Precipitation>,

        #[arg(long, value_parser = quantity::<Precipitation>)]
        ice: Option<Precipitation>,
    },

    /// Reduce station pressure to mean sea level
    Mslp {
        #[arg(long, value_parser = quantity::<Pressure>)]
        pressure: Pressure,

        /// Station height above sea level
        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Distance>)]
        altitude: Distance,

        #[arg(long, allow_hyphen_values = true, value_parser = quantity::<Temperature>)]
        temperature: Option<Temperature>,

        #[arg(long, value_parser = quantity::<Ratio>)]
        humidity: Option<Ratio>,

        /// Latitude in degrees, negative south of the equator
        #[arg(long, allow_negative_numbers = true)]
        latitude: Option<f64>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error("no quantity has both units {from:?} and {to:?}")]
    IncompatibleUnits { from: String, to: String },
}

fn quantity<Q: Quantity>(input: &str) -> Result<Q, UnitError> {
    Q::parse(input)
}

type Converter = fn(f64, &str, &str, u8) -> Option<Result<String, UnitError>>;
type Describer = fn(&str) -> Result<String, UnitError>;

const CONVERTERS: [Converter; 8] = [
    convert_as::<Temperature>,
    convert_as::<Ratio>,
    convert_as::<Precipitation>,
    convert_as::<PollutantConcentration>,
    convert_as::<PollenConcentration>,
    convert_as::<Pressure>,
    convert_as::<Speed>,
    convert_as::<Distance>,
];

const DESCRIBERS: [Describer; 8] = [
    describe_as::<Temperature>,
    describe_as::<Ratio>,
    describe_as::<Precipitation>,
    describe_as::<PollutantConcentration>,
    describe_as::<PollenConcentration>,
    describe_as::<Pressure>,
    describe_as::<Speed>,
    describe_as::<Distance>,
];

/// `None` unless both ids belong to `Q`.
fn convert_as<Q: Quantity>(
    value: f64,
    from: &str,
    to: &str,
    decimals: u8,
) -> Option<Result<String, UnitError>> {
    let from = <Q::Unit as Unit>::from_id(from)?;
    let to = <Q::Unit as Unit>::from_id(to)?;
    Some(Q::try_new(value, from).map(|q| q.to_string_in(to, decimals)))
}

fn describe_as<Q: Quantity + Display>(input: &str) -> Result<String, UnitError> {
    let q = Q::parse(input)?;
    Ok(format!("{}: {} ({q})", Q::NAME, q.reference()))
}

fn convert(value: f64, from: &str, to: &str, decimals: u8) -> Result<String, CliError> {
    tracing::debug!(value, from, to, decimals, "converting");
    match CONVERTERS
        .iter()
        .find_map(|converter| converter(value, from, to, decimals))
    {
        Some(converted) => Ok(converted?),
        None => Err(CliError::IncompatibleUnits {
            from: from.to_owned(),
            to: to.to_owned(),
        }),
    }
}

/// Try every quantity in turn; the first whose unit ids match decides.
fn describe(input: &str) -> Result<String, CliError> {
    for describer in DESCRIBERS {
        match describer(input) {
            Ok(description) => return Ok(description),
            Err(UnitError::Parse {
                reason: ParseFailure::UnknownUnit,
                ..
            }) => {}
            Err(error) => return Err(error.into()),
        }
    }
    Err(CliError::Unit(UnitError::Parse {
        quantity: "quantity",
        input: input.to_owned(),
        reason: ParseFailure::UnknownUnit,
    }))
}

fn or_not_available<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "n/a".to_owned(), |value| value.to_string())
}

fn run(command: Command) -> Result<String, CliError> {
    let output = match command {
        Command::Convert {
            value,
            from,
            to,
            decimals,
        } => convert(value, &from, &to, decimals)?,
        Command::Parse { input } => describe(&input)?,
        Command::Apparent {
            temperature,
            humidity,
            wind_speed,
        } => or_not_available(compute_apparent_temperature(
            Some(temperature),
            Some(humidity),
            Some(wind_speed),
        )),
        Command::WindChill {
            temperature,
            wind_speed,
        } => or_not_available(compute_wind_chill_temperature(
            Some(temperature),
            Some(wind_speed),
        )),
        Command::Humidex {
            temperature,
            dew_point,
        } => or_not_available(compute_humidex(Some(temperature), Some(dew_point))),
        Command::DewPoint {
            temperature,
            humidity,
        } => or_not_available(compute_dew_point(Some(temperature), Some(humidity))),
        Command::RelativeHumidity {
            temperature,
            dew_point,
        } => or_not_available(compute_relative_humidity(
            Some(temperature),
            Some(dew_point),
        )),
        Command::TotalPrecipitation {
            temperature,
            rain,
            snow,
            ice,
        } => or_not_available(compute_total_precipitation(temperature, rain, snow, ice)),
        Command::Mslp {
            pressure,
            altitude,
            temperature,
            humidity,
            latitude,
        } => or_not_available(compute_mean_sea_level_pressure(
            Some(pressure),
            Some(altitude),
            temperature,
            humidity,
            latitude,
        )),
    };
    Ok(output)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> Result<String, CliError> {
        let args = Args::try_parse_from(std::iter::once("weather-unit").chain(args.iter().copied()))
            .unwrap();
        run(args.command)
    }

    #[test]
    fn test_convert_infers_quantity() {
        assert_eq!(run_args(&["convert", "25", "°C", "°F"]).unwrap(), "77.0°F");
        assert_eq!(
            run_args(&["convert", "1013.25", "hPa", "inHg", "-d", "2"]).unwrap(),
            "29.92inHg"
        );
        assert_eq!(run_args(&["convert", "-40", "°F", "°C"]).unwrap(), "-40.0°C");
    }

    #[test]
    fn test_convert_rejects_mixed_quantities() {
        assert!(matches!(
            run_args(&["convert", "5", "mm", "hPa"]),
            Err(CliError::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn test_parse_describes_canonical_magnitude() {
        assert_eq!(run_args(&["parse", "21.5°C"]).unwrap(), "temperature: 215 (21.5 °C)");
        assert_eq!(run_args(&["parse", "42.5%"]).unwrap(), "ratio: 425 (42.5 %)");
        assert!(matches!(
            run_args(&["parse", "abc%"]),
            Err(CliError::Unit(UnitError::Parse {
                reason: ParseFailure::InvalidNumber,
                ..
            }))
        ));
        assert!(run_args(&["parse", "12 parsecs"]).is_err());
    }

    #[test]
    fn test_derivations() {
        assert_eq!(
            run_args(&["wind-chill", "--temperature", "15°C", "--wind-speed", "10km/h"]).unwrap(),
            "n/a"
        );
        assert_eq!(
            run_args(&["wind-chill", "--temperature", "-5°C", "--wind-speed", "10km/h"]).unwrap(),
            "-9.3 °C"
        );
        assert_eq!(run_args(&["total-precipitation"]).unwrap(), "n/a");
        assert_eq!(
            run_args(&["total-precipitation", "--temperature", "0°C", "--rain", "5mm"]).unwrap(),
            "5.0 mm"
        );
        assert_eq!(
            run_args(&["mslp", "--pressure", "1000hPa", "--altitude", "0m"]).unwrap(),
            "1000.0 hPa"
        );
    }
}
