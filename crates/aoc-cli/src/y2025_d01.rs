//! Advent of Code 2025 day 1 solver
//!
//! Usage: y2025_d01 <verbosity> <part> < input.txt
//!
//! Verbosity is 0 (warn), 1 (info) or 2 (debug); part is 1 or 2.
//! The answer is printed on a single line to stdout.

use aoc_solvers::app::puzzles::y2025::d01;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_solvers::run(d01::p1, d01::p2)
}
