//! Advent of Code 2022 day 5 solver
//!
//! Usage: y2022_d05 <verbosity> <part> < input.txt
//!
//! Verbosity is 0 (warn), 1 (info) or 2 (debug); part is 1 or 2.
//! The answer is printed on a single line to stdout.

use aoc_solvers::app::puzzles::y2022::d05;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_solvers::run(d05::p1, d05::p2)
}
