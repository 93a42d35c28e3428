//! Error types for value construction and parsing.
//!
//! Derivations in [`crate::meteo`] never fail; missing or out-of-domain
//! inputs come back as `None`. Only building a value can go wrong.

use thiserror::Error;

/// Error raised when a physical quantity cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The number was NaN once converted to the canonical unit.
    #[error("{quantity} value is NaN")]
    NotANumber { quantity: &'static str },

    /// The string does not follow the `<number><unit id>` format.
    #[error("cannot parse {quantity} from {input:?}: {reason}")]
    Parse {
        quantity: &'static str,
        input: String,
        reason: ParseFailure,
    },
}

/// Why a string was rejected by a quantity parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("empty input")]
    Empty,

    #[error("no known unit suffix")]
    UnknownUnit,

    #[error("invalid number")]
    InvalidNumber,
}

impl UnitError {
    pub(crate) fn parse(quantity: &'static str, input: &str, reason: ParseFailure) -> Self {
        UnitError::Parse {
            quantity,
            input: input.to_owned(),
            reason,
        }
    }
}
