//! Infrastructure layer - I/O and process setup
//!
//! This module handles standard input and logger installation.

pub mod input;
pub mod logging;
