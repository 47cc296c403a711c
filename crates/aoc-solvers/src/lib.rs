//! aoc-solvers - Advent of Code solvers built on lazy sequence adaptors
//!
//! This crate provides:
//! - Lazy sequence adaptors (chunk, slide, indexed, stride) and a first-seeded fold
//! - A strict numeric parser for puzzle input
//! - The shared entry point used by every per-day solver binary
//! - The puzzle solvers themselves

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::run::run;
pub use domain::answer::Answer;
pub use domain::convert::{ConvertError, convert};
pub use domain::seq::{End, Sequence, View, Window, fold_left_first};
