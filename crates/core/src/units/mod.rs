//! Semantic unit types for weather quantities
//!
//! Every quantity is a newtype over one `i64` magnitude expressed in a fixed
//! canonical unit (deci-degrees Celsius, permille, micrometres, ...). The
//! canonical precision is picked so that the values a forecast provider can
//! report fit without loss.
//!
//! # Design Philosophy
//! - Integer storage: equality, ordering and hashing are exact
//! - Each unit is a record of two plain functions mapping to and from the
//!   canonical magnitude, so converting between any two units is two calls
//! - Construction rounds half up to the nearest canonical step
//! - NaN is rejected at construction, never stored
//! - Serde support: quantities serialize as their canonical integer, units
//!   as their id
//!
//! # Usage
//! ```
//! use weather_unit_core::units::{Quantity, RatioExt, TemperatureExt, TemperatureUnit};
//!
//! let temp = 25.celsius();
//! assert!((temp.in_fahrenheit() - 77.0).abs() < 0.01);
//! assert_eq!(temp.to_string_in(TemperatureUnit::Fahrenheit, 1), "77.0°F");
//!
//! let humidity = 1.percent();
//! assert!((humidity.in_percent() - 1.0).abs() < 0.05);
//! ```

mod distance;
mod duration;
mod parse;
mod pollen;
mod pollutant;
mod precipitation;
mod pressure;
mod ratio;
mod speed;
mod temperature;

pub use distance::*;
pub use duration::*;
pub use pollen::*;
pub use pollutant::*;
pub use precipitation::*;
pub use pressure::*;
pub use ratio::*;
pub use speed::*;
pub use temperature::*;

use crate::error::UnitError;
use std::fmt;

// ============================================================================
// UNIT DESCRIPTORS
// ============================================================================

/// Pair of pure functions mapping a unit to and from the canonical magnitude.
///
/// `from_reference(to_reference(x)) == x` up to floating-point rounding.
#[derive(Clone, Copy)]
pub struct Conversion {
    /// Unit value to canonical magnitude
    pub to_reference: fn(f64) -> f64,
    /// Canonical magnitude to unit value
    pub from_reference: fn(f64) -> f64,
    reference: bool,
}

fn identity(value: f64) -> f64 {
    value
}

impl Conversion {
    /// Conversion of the canonical unit itself.
    pub const REFERENCE: Conversion = Conversion {
        to_reference: identity,
        from_reference: identity,
        reference: true,
    };

    /// Build a conversion from its two directions.
    #[must_use]
    pub const fn new(to_reference: fn(f64) -> f64, from_reference: fn(f64) -> f64) -> Self {
        Conversion {
            to_reference,
            from_reference,
            reference: false,
        }
    }

    /// Whether this is the canonical unit, for which both directions are the identity.
    #[inline]
    pub fn is_reference(&self) -> bool {
        self.reference
    }
}

impl fmt::Debug for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conversion")
            .field("reference", &self.reference)
            .finish_non_exhaustive()
    }
}

/// Static description of one unit variant.
#[derive(Debug, Clone, Copy)]
pub struct UnitInfo {
    /// Machine suffix used by [`Quantity::to_string_in`] and [`Quantity::parse`]
    pub id: &'static str,
    /// Short display symbol
    pub symbol: &'static str,
    /// Plural English name
    pub name: &'static str,
    /// Largest number of decimals meaningful at canonical precision
    pub max_decimals: u8,
    pub conversion: Conversion,
}

/// A unit of some physical quantity.
///
/// Implemented by the `*Unit` enums. All behaviour comes from the
/// [`UnitInfo`] record of each variant.
pub trait Unit: Copy + Eq + fmt::Debug + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    fn info(self) -> &'static UnitInfo;

    #[inline]
    fn id(self) -> &'static str {
        self.info().id
    }

    #[inline]
    fn symbol(self) -> &'static str {
        self.info().symbol
    }

    #[inline]
    fn name(self) -> &'static str {
        self.info().name
    }

    #[inline]
    fn max_decimals(self) -> u8 {
        self.info().max_decimals
    }

    #[inline]
    fn conversion(self) -> Conversion {
        self.info().conversion
    }

    #[inline]
    fn is_reference(self) -> bool {
        self.info().conversion.is_reference()
    }

    /// Convert a raw value in this unit to `target`.
    fn convert_to(self, value: f64, target: Self) -> f64 {
        convert(value, self, target)
    }

    /// Look a unit up by its id.
    fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|unit| unit.id() == id)
    }
}

/// Convert a raw value between two units of the same quantity.
///
/// Routes through the canonical magnitude, skipping whichever leg is the
/// canonical unit already.
pub fn convert<U: Unit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    let reference = to_reference(value, from);
    from_reference(reference, to)
}

#[inline]
fn to_reference<U: Unit>(value: f64, unit: U) -> f64 {
    let conversion = unit.conversion();
    if conversion.is_reference() {
        value
    } else {
        (conversion.to_reference)(value)
    }
}

#[inline]
fn from_reference<U: Unit>(reference: f64, unit: U) -> f64 {
    let conversion = unit.conversion();
    if conversion.is_reference() {
        reference
    } else {
        (conversion.from_reference)(reference)
    }
}

/// Round half up to the nearest integer, saturating at the `i64` bounds.
#[inline]
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

// ============================================================================
// QUANTITIES
// ============================================================================

/// A physical quantity stored as a canonical integer magnitude.
pub trait Quantity: Copy + Ord + Sized {
    type Unit: Unit;

    /// Human name used in errors, e.g. `"temperature"`.
    const NAME: &'static str;

    /// Wrap a raw canonical magnitude.
    fn from_reference(magnitude: i64) -> Self;

    /// Raw canonical magnitude.
    fn reference(self) -> i64;

    /// Build from a value expressed in `unit`.
    ///
    /// Panics if the value is NaN once converted; see [`Quantity::try_new`].
    #[track_caller]
    fn new(value: f64, unit: Self::Unit) -> Self {
        match Self::try_new(value, unit) {
            Ok(quantity) => quantity,
            Err(error) => panic!("{error}"),
        }
    }

    /// Build from a value expressed in `unit`.
    ///
    /// # Errors
    /// [`UnitError::NotANumber`] if the converted value is NaN.
    fn try_new(value: f64, unit: Self::Unit) -> Result<Self, UnitError> {
        let canonical = to_reference(value, unit);
        if canonical.is_nan() {
            return Err(UnitError::NotANumber {
                quantity: Self::NAME,
            });
        }
        Ok(Self::from_reference(round_half_up(canonical)))
    }

    /// Build from an integer value; exact when `unit` is the canonical unit.
    fn from_int(value: i64, unit: Self::Unit) -> Self {
        if unit.is_reference() {
            Self::from_reference(value)
        } else {
            Self::new(value as f64, unit)
        }
    }

    /// Value expressed in `unit`.
    fn to_f64(self, unit: Self::Unit) -> f64 {
        from_reference(self.reference() as f64, unit)
    }

    /// Machine representation: the number immediately followed by the unit id.
    ///
    /// `decimals` is clamped to the unit's [`Unit::max_decimals`].
    fn to_string_in(self, unit: Self::Unit, decimals: u8) -> String {
        let number = format_number(self.to_f64(unit), decimals.min(unit.max_decimals()));
        format!("{number}{}", unit.id())
    }

    /// Human representation: the number, a space, then the unit symbol.
    ///
    /// Units without a symbol (plain fractions) render as the bare number.
    fn format_display(self, unit: Self::Unit, decimals: u8) -> String {
        let number = format_number(self.to_f64(unit), decimals.min(unit.max_decimals()));
        match unit.symbol() {
            "" => number,
            symbol => format!("{number} {symbol}"),
        }
    }

    /// Parse the output of [`Quantity::to_string_in`].
    ///
    /// # Errors
    /// [`UnitError::Parse`] for malformed input, [`UnitError::NotANumber`]
    /// if the number cannot be represented.
    fn parse(input: &str) -> Result<Self, UnitError> {
        let (value, unit) = parse::split_value_and_unit::<Self::Unit>(Self::NAME, input)?;
        Self::try_new(value, unit)
    }

    /// [`Quantity::parse`], discarding the error.
    fn parse_or_none(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }
}

/// Fixed-decimal rendering that never prints a negative zero.
pub(crate) fn format_number(value: f64, decimals: u8) -> String {
    let rendered = format!("{:.*}", usize::from(decimals), value);
    match rendered.strip_prefix('-') {
        Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => unsigned.to_owned(),
        _ => rendered,
    }
}

/// Numeric types accepted by the constructor extension traits
/// ([`TemperatureExt`], [`RatioExt`], ...).
pub trait Magnitude: Copy {
    fn into_quantity<Q: Quantity>(self, unit: Q::Unit) -> Q;
}

impl Magnitude for i32 {
    #[inline]
    fn into_quantity<Q: Quantity>(self, unit: Q::Unit) -> Q {
        Q::from_int(i64::from(self), unit)
    }
}

impl Magnitude for i64 {
    #[inline]
    fn into_quantity<Q: Quantity>(self, unit: Q::Unit) -> Q {
        Q::from_int(self, unit)
    }
}

impl Magnitude for f64 {
    #[inline]
    #[track_caller]
    fn into_quantity<Q: Quantity>(self, unit: Q::Unit) -> Q {
        Q::new(self, unit)
    }
}

// ============================================================================
// TESTS
// ============================================================================
