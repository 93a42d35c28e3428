//! Inverse of `Quantity::to_string_in`: `<number><unit id>`.

use super::Unit;
use crate::error::{ParseFailure, UnitError};
use tracing::debug;

/// Split `input` into its number and the unit whose id ends it.
///
/// The longest matching id wins, so `"5km"` resolves to kilometres rather
/// than metres.
pub(crate) fn split_value_and_unit<U: Unit>(
    quantity: &'static str,
    input: &str,
) -> Result<(f64, U), UnitError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(reject(quantity, input, ParseFailure::Empty));
    }

    let Some(unit) = U::ALL
        .iter()
        .copied()
        .filter(|unit| trimmed.ends_with(unit.id()))
        .max_by_key(|unit| unit.id().len())
    else {
        return Err(reject(quantity, input, ParseFailure::UnknownUnit));
    };

    let number = &trimmed[..trimmed.len() - unit.id().len()];
    if !is_plain_decimal(number) {
        return Err(reject(quantity, input, ParseFailure::InvalidNumber));
    }
    let value = number
        .parse::<f64>()
        .map_err(|_| reject(quantity, input, ParseFailure::InvalidNumber))?;
    Ok((value, unit))
}

fn reject(quantity: &'static str, input: &str, reason: ParseFailure) -> UnitError {
    debug!(quantity, input, %reason, "rejected quantity string");
    UnitError::parse(quantity, input, reason)
}

/// `[+-]digits[.digits]` with at least one digit; no exponent, no `inf`/`nan`.
fn is_plain_decimal(number: &str) -> bool {
    let unsigned = number
        .strip_prefix('-')
        .or_else(|| number.strip_prefix('+'))
        .unwrap_or(number);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let digits_only = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    !(integer.is_empty() && fraction.is_empty()) && digits_only(integer) && digits_only(fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DistanceUnit, PressureUnit, RatioUnit};

    #[test]
    fn test_plain_decimals() {
        assert!(is_plain_decimal("5"));
        assert!(is_plain_decimal("-12.50"));
        assert!(is_plain_decimal("+0.5"));
        assert!(is_plain_decimal(".5"));
        assert!(is_plain_decimal("5."));
        assert!(!is_plain_decimal(""));
        assert!(!is_plain_decimal("."));
        assert!(!is_plain_decimal("-"));
        assert!(!is_plain_decimal("1e3"));
        assert!(!is_plain_decimal("inf"));
        assert!(!is_plain_decimal("NaN"));
        assert!(!is_plain_decimal("1 000"));
        assert!(!is_plain_decimal("1.2.3"));
    }

    #[test]
    fn test_longest_suffix_wins() {
        let (value, unit) = split_value_and_unit::<DistanceUnit>("distance", "5km").unwrap();
        assert_eq!(value, 5.0);
        assert_eq!(unit, DistanceUnit::Kilometer);

        let (_, unit) = split_value_and_unit::<DistanceUnit>("distance", "5mm").unwrap();
        assert_eq!(unit, DistanceUnit::Millimeter);

        let (_, unit) = split_value_and_unit::<PressureUnit>("pressure", "1013.25hPa").unwrap();
        assert_eq!(unit, PressureUnit::Hectopascal);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let (value, unit) = split_value_and_unit::<RatioUnit>("ratio", "  42.5%\n").unwrap();
        assert_eq!(value, 42.5);
        assert_eq!(unit, RatioUnit::Percent);
    }

    #[test]
    fn test_rejections() {
        let reason = |input: &str| match split_value_and_unit::<RatioUnit>("ratio", input) {
            Err(UnitError::Parse { reason, .. }) => reason,
            other => panic!("expected a parse error for {input:?}, got {other:?}"),
        };
        assert_eq!(reason("   "), ParseFailure::Empty);
        assert_eq!(reason("garbage"), ParseFailure::UnknownUnit);
        assert_eq!(reason("42"), ParseFailure::UnknownUnit);
        assert_eq!(reason("%"), ParseFailure::InvalidNumber);
        assert_eq!(reason("4 2%"), ParseFailure::InvalidNumber);
        assert_eq!(reason("42 %"), ParseFailure::InvalidNumber);
        assert_eq!(reason("1e2%"), ParseFailure::InvalidNumber);
    }
}
