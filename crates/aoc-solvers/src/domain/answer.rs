//! Puzzle answer carried to the entry point for printing

use std::fmt;

/// Computed puzzle answer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Answer {
    Unsigned(u64),
    Signed(i64),
    Text(String),
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(impl From<$t> for Answer {
            fn from(value: $t) -> Self {
                Answer::$variant(<$target>::from(value))
            }
        })*
    };
}

impl_from_int!(Unsigned, u64, u8, u16, u32, u64);
impl_from_int!(Signed, i64, i8, i16, i32, i64);

impl From<String> for Answer {
    fn from(value: String) -> Self {
        Answer::Text(value)
    }
}

impl From<&str> for Answer {
    fn from(value: &str) -> Self {
        Answer::Text(value.to_string())
    }
}

impl PartialEq<u64> for Answer {
    fn eq(&self, other: &u64) -> bool {
        matches!(self, Answer::Unsigned(value) if value == other)
    }
}

impl PartialEq<i64> for Answer {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Answer::Signed(value) if value == other)
    }
}

impl PartialEq<&str> for Answer {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Answer::Text(value) if value == other)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Unsigned(value) => write!(f, "{value}"),
            Answer::Signed(value) => write!(f, "{value}"),
            Answer::Text(value) => write!(f, "{value}"),
        }
    }
}
