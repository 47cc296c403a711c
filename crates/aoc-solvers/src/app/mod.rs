//! Application layer - Use case implementations
//!
//! This module wires the domain and infrastructure layers into the solver
//! entry point and hosts the puzzle solvers.

pub mod puzzles;
pub mod run;
