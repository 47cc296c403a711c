//! 2022 day 2: Rock Paper Scissors
//!
//! Each line is `<opponent> <column>`: opponent shape `A`/`B`/`C`, second
//! column `X`/`Y`/`Z`. Part 1 reads the column as our shape, part 2 as the
//! desired outcome (lose/draw/win).

use crate::app::puzzles::SolveError;
use crate::domain::answer::Answer;
use crate::domain::seq::Sequence;
use crate::domain::text::split_lines_until_empty;

/// Shapes and outcomes are both encoded as 0..3
const SHAPES: u64 = 3;
const POINTS_PER_OUTCOME: u64 = 3;

fn parse_round(line: &str) -> Result<(u64, u64), SolveError> {
    match line.as_bytes() {
        [opponent @ b'A'..=b'C', b' ', column @ b'X'..=b'Z'] => {
            Ok((u64::from(opponent - b'A'), u64::from(column - b'X')))
        }
        _ => Err(SolveError::malformed(format!("round {line:?}"))),
    }
}

/// Outcome index (0 lose, 1 draw, 2 win) of `ours` against `theirs`
fn outcome(theirs: u64, ours: u64) -> u64 {
    (ours + SHAPES + 1 - theirs) % SHAPES
}

/// Shape (0 rock, 1 paper, 2 scissors) that reaches `outcome` against `theirs`
fn shape_for(theirs: u64, outcome: u64) -> u64 {
    (theirs + outcome + SHAPES - 1) % SHAPES
}

fn score(shape: u64, outcome: u64) -> u64 {
    shape + 1 + outcome * POINTS_PER_OUTCOME
}

fn solve(input: &str, round_score: impl Fn(u64, u64) -> u64) -> Result<Answer, SolveError> {
    let scores = split_lines_until_empty(input)
        .map(|line| parse_round(line).map(|(theirs, column)| round_score(theirs, column)))
        .collect::<Result<Vec<_>, _>>()?;
    let total = scores
        .fold_left_first(|a, b| a + b)
        .ok_or(SolveError::NoResult("no rounds"))?;
    Ok(total.into())
}

pub fn p1(input: &str) -> Result<Answer, SolveError> {
    solve(input, |theirs, ours| score(ours, outcome(theirs, ours)))
}

pub fn p2(input: &str) -> Result<Answer, SolveError> {
    solve(input, |theirs, wanted| score(shape_for(theirs, wanted), wanted))
}
