//! Advent of Code 2022 day 6 solver
//!
//! Usage: y2022_d06 <verbosity> <part> < input.txt
//!
//! Verbosity is 0 (warn), 1 (info) or 2 (debug); part is 1 or 2.
//! The answer is printed on a single line to stdout.

use aoc_solvers::app::puzzles::y2022::d06;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_solvers::run(d06::p1, d06::p2)
}
