//! Solver entry point
//!
//! Every per-day binary calls [`run`] with its two solvers. The process is
//! invoked as `<binary> <verbosity> <part>` with the puzzle input on stdin,
//! prints the answer on one line and exits with 0, or prints the error to
//! stderr and exits with 1.

use crate::app::puzzles::SolveError;
use crate::constants::{ARG_COUNT, LOG_LEVELS, PART_COUNT};
use crate::domain::answer::Answer;
use crate::domain::convert::{ConvertError, convert};
use crate::infra::{input, logging};
use log::{LevelFilter, debug, error, info};
use std::env;
use std::io;
use std::process::ExitCode;
use std::time::Instant;
use thiserror::Error;

/// Solver function for one puzzle part
pub type Solver = fn(&str) -> Result<Answer, SolveError>;

/// Puzzle part selected on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    P1,
    P2,
}

/// Parsed command line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Maximum log level
    pub level: LevelFilter,
    /// Part to solve
    pub part: Part,
}

/// Entry point errors
#[derive(Debug, Error)]
pub enum RunError {
    /// Wrong number of arguments
    #[error("Invalid number of arguments: {0} (expected {expected}: <verbosity> <part>)", expected = ARG_COUNT)]
    Usage(usize),
    /// An argument is not a number
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ConvertError),
    /// Verbosity outside 0-2
    #[error("Invalid verbosity level: {0}")]
    InvalidVerbosity(u8),
    /// Part outside 1-2
    #[error("Invalid part: {0}")]
    InvalidPart(u8),
    /// Standard input could not be read
    #[error("Failed to read input: {0}")]
    Input(#[from] io::Error),
    /// The solver failed
    #[error(transparent)]
    Solve(#[from] SolveError),
}

impl RunOptions {
    /// Parse `args` (including the program name)
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, RunError> {
        let [_, verbosity, part] = args else {
            return Err(RunError::Usage(args.len().saturating_sub(1)));
        };

        let verbosity: u8 = convert(verbosity.as_ref())?;
        let level = *LOG_LEVELS
            .get(usize::from(verbosity))
            .ok_or(RunError::InvalidVerbosity(verbosity))?;

        let part = match convert::<u8>(part.as_ref())? {
            1 => Part::P1,
            n if n == PART_COUNT => Part::P2,
            n => return Err(RunError::InvalidPart(n)),
        };

        Ok(Self { level, part })
    }
}

/// Run the solver for `part` over `input`
pub fn solve(part: Part, input: &str, p1: Solver, p2: Solver) -> Result<Answer, RunError> {
    let solver = match part {
        Part::P1 => p1,
        Part::P2 => p2,
    };
    let start = Instant::now();
    let answer = solver(input)?;
    info!(
        "Solved {:?} in {:.3} seconds",
        part,
        start.elapsed().as_secs_f64()
    );
    Ok(answer)
}

/// Process entry point shared by the solver binaries
pub fn run(p1: Solver, p2: Solver) -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match try_run(&args, p1, p2) {
        Ok(answer) => {
            println!("{answer}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(args: &[String], p1: Solver, p2: Solver) -> Result<Answer, RunError> {
    let options = RunOptions::from_args(args)?;
    logging::init(options.level);

    let input = input::read_stdin()?;
    debug!("Read {} bytes of input", input.len());

    solve(options.part, &input, p1, p2)
}
