//! Advent of Code 2022 day 3 solver
//!
//! Usage: y2022_d03 <verbosity> <part> < input.txt
//!
//! Verbosity is 0 (warn), 1 (info) or 2 (debug); part is 1 or 2.
//! The answer is printed on a single line to stdout.

use aoc_solvers::app::puzzles::y2022::d03;
use std::process::ExitCode;

fn main() -> ExitCode {
    aoc_solvers::run(d03::p1, d03::p2)
}
