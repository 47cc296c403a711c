//! Puzzle solvers
//!
//! Each day module exposes `p1` and `p2` with the [`Solver`](crate::app::run::Solver)
//! signature. Solvers compose the sequence adaptors over the raw input text.

pub mod y2022;
pub mod y2024;
pub mod y2025;

use crate::domain::convert::ConvertError;
use thiserror::Error;

/// Solver errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A number in the input could not be converted
    #[error(transparent)]
    Convert(#[from] ConvertError),
    /// The input does not have the expected structure
    #[error("Malformed input: {0}")]
    Malformed(String),
    /// The computation produced no result
    #[error("No result: {0}")]
    NoResult(&'static str),
}

impl SolveError {
    pub(crate) fn malformed(what: impl Into<String>) -> Self {
        Self::Malformed(what.into())
    }
}
