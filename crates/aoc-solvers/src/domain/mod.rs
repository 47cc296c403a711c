//! Domain layer - Pure computational logic
//!
//! This module contains the sequence adaptors and parsing helpers,
//! without any I/O dependencies.

pub mod answer;
pub mod collections;
pub mod convert;
pub mod seq;
pub mod text;
