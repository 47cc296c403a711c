//! 2022 day 1: Calorie Counting
//!
//! Groups of calorie values are separated by blank lines. Part 1 is the
//! largest group sum, part 2 the sum of the three largest.

use crate::app::puzzles::SolveError;
use crate::domain::answer::Answer;
use crate::domain::convert::convert;
use crate::domain::seq::Sequence;
use crate::domain::text::split_lines_until_empty;
use log::debug;

const TOP_COUNT: usize = 3;

fn calorie_sums(input: &str) -> Result<Vec<u64>, SolveError> {
    input
        .split("\n\n")
        .map(|group| {
            let calories = split_lines_until_empty(group)
                .map(convert::<u64>)
                .collect::<Result<Vec<_>, _>>()?;
            calories
                .fold_left_first(|a, b| a + b)
                .ok_or(SolveError::NoResult("empty calorie group"))
        })
        .collect()
}

pub fn p1(input: &str) -> Result<Answer, SolveError> {
    let max = calorie_sums(input)?
        .fold_left_first(u64::max)
        .ok_or(SolveError::NoResult("no elves"))?;
    Ok(max.into())
}

pub fn p2(input: &str) -> Result<Answer, SolveError> {
    let mut sums = calorie_sums(input)?;
    debug!("Initial: {sums:?}");

    sums.sort_unstable_by(|a, b| b.cmp(a));
    debug!("Sorted: {sums:?}");

    let total = sums
        .into_iter()
        .take(TOP_COUNT)
        .fold_left_first(|a, b| a + b)
        .ok_or(SolveError::NoResult("no elves"))?;
    Ok(total.into())
}
