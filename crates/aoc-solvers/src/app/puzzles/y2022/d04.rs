//! 2022 day 4: Camp Cleanup
//!
//! Each line holds two section ranges `a-b,c-d`. Part 1 counts pairs where
//! one range contains the other, part 2 pairs that overlap at all.

use crate::app::puzzles::SolveError;
use crate::domain::answer::Answer;
use crate::domain::convert::convert;
use crate::domain::text::split_lines_until_empty;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Section {
    start: u32,
    end: u32,
}

impl Section {
    fn parse(text: &str) -> Result<Self, SolveError> {
        let (start, end) = text
            .split_once('-')
            .ok_or_else(|| SolveError::malformed(format!("section {text:?}")))?;
        Ok(Self {
            start: convert(start)?,
            end: convert(end)?,
        })
    }

    fn contains(&self, other: &Section) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    fn is_separate_from(&self, other: &Section) -> bool {
        self.end < other.start || other.end < self.start
    }
}

fn section_pairs(
    input: &str,
) -> impl Iterator<Item = Result<(Section, Section), SolveError>> + '_ {
    split_lines_until_empty(input).map(|line| {
        let (first, second) = line
            .split_once(',')
            .ok_or_else(|| SolveError::malformed(format!("section pair {line:?}")))?;
        Ok((Section::parse(first)?, Section::parse(second)?))
    })
}

fn count_pairs(
    input: &str,
    predicate: impl Fn(&Section, &Section) -> bool,
) -> Result<Answer, SolveError> {
    let mut count = 0i64;
    for pair in section_pairs(input) {
        let (first, second) = pair?;
        if predicate(&first, &second) {
            count += 1;
        }
    }
    Ok(count.into())
}

pub fn p1(input: &str) -> Result<Answer, SolveError> {
    count_pairs(input, |a, b| a.contains(b) || b.contains(a))
}

pub fn p2(input: &str) -> Result<Answer, SolveError> {
    count_pairs(input, |a, b| !a.is_separate_from(b))
}
