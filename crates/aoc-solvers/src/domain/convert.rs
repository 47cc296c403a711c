//! Numeric parser for puzzle input
//!
//! Converts a whole span of text into an integer. Partial parses are
//! rejected, and each failure names the offending text.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;
use thiserror::Error;

/// Numeric conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Nothing to convert
    #[error("Empty string to convert")]
    Empty,
    /// Not a number, or only a prefix of the text is one
    #[error("Invalid argument: {input:?}")]
    Malformed { input: String },
    /// Value does not fit the requested type
    #[error("Result out of range: {input:?}")]
    OutOfRange { input: String },
}

/// Primitive integer types accepted by [`convert`]
pub trait Integer: FromStr<Err = ParseIntError> {}

macro_rules! impl_integer {
    ($($t:ty),*) => {
        $(impl Integer for $t {})*
    };
}

impl_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Convert all of `text` into an integer of type `T`
///
/// Only a leading `-` is accepted as a sign, and only for signed types.
///
/// # Errors
/// - [`ConvertError::Empty`] when `text` is empty
/// - [`ConvertError::Malformed`] when any part of `text` is not a digit
/// - [`ConvertError::OutOfRange`] when the value overflows `T`
pub fn convert<T: Integer>(text: &str) -> Result<T, ConvertError> {
    if text.is_empty() {
        return Err(ConvertError::Empty);
    }
    if text.starts_with('+') {
        return Err(ConvertError::Malformed {
            input: text.to_string(),
        });
    }

    text.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ConvertError::OutOfRange {
            input: text.to_string(),
        },
        _ => ConvertError::Malformed {
            input: text.to_string(),
        },
    })
}
