//! 2025 day 2: Gift Shop
//!
//! The input is a single line of comma-separated ID ranges `start-end`.
//! An ID is invalid when its digits are a pattern repeated twice (part 1) or
//! at least twice (part 2). The answer is the sum of the invalid IDs.

use crate::app::puzzles::SolveError;
use crate::domain::answer::Answer;
use crate::domain::convert::convert;
use crate::domain::seq::Sequence;
use crate::domain::text::split_lines_until_empty;
use log::debug;
use std::ops::RangeInclusive;

fn ranges_line(input: &str) -> Result<&str, SolveError> {
    let mut lines = split_lines_until_empty(input);
    match (lines.next(), lines.next()) {
        (Some(line), None) => Ok(line),
        _ => Err(SolveError::malformed("expected exactly one line of ID ranges")),
    }
}

fn parse_range(text: &str) -> Result<RangeInclusive<u64>, SolveError> {
    let (start, end) = text
        .split_once('-')
        .ok_or_else(|| SolveError::malformed(format!("ID range {text:?}")))?;
    Ok(convert(start)?..=convert(end)?)
}

/// Digits made of the first half repeated twice
fn is_doubled(id: &str) -> bool {
    let (first, second) = id.split_at(id.len() / 2);
    id.len() % 2 == 0 && first == second
}

/// Digits made of some shorter pattern repeated
fn is_repeated(id: &str) -> bool {
    (1..id.len())
        .filter(|len| id.len() % len == 0)
        .any(|len| {
            let unit = &id.as_bytes()[..len];
            id.bytes()
                .chunk(len)
                .into_iter()
                .all(|part| part.eq(unit.iter().copied()))
        })
}

fn solve(input: &str, is_invalid: fn(&str) -> bool) -> Result<Answer, SolveError> {
    let sums = ranges_line(input)?
        .split(',')
        .map(|text| {
            let range = parse_range(text)?;
            debug!("Checking range {range:?}");
            let sum = range
                .map(|id| (id, id.to_string()))
                .filter(|(_, digits)| is_invalid(digits))
                .map(|(id, digits)| {
                    debug!("Found invalid ID: {digits}");
                    id
                })
                .fold_left_first(|a, b| a + b);
            Ok(sum.unwrap_or(0))
        })
        .collect::<Result<Vec<u64>, SolveError>>()?;

    Ok(sums.fold_left_first(|a, b| a + b).unwrap_or(0).into())
}

pub fn p1(input: &str) -> Result<Answer, SolveError> {
    solve(input, is_doubled)
}

pub fn p2(input: &str) -> Result<Answer, SolveError> {
    solve(input, is_repeated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::text::prepare_example_input;

    const EXAMPLE_INPUT: &str = r"
11-22,95-115,998-1012,1188511880-1188511890,222220-222224,1698522-1698528,446443-446449,38593856-38593862,565653-565659,824824821-824824827,2121212118-2121212124
";

    #[test]
    fn test_p1() {
        let input = prepare_example_input(EXAMPLE_INPUT);
        assert_eq!(p1(input).unwrap(), 1_227_775_554u64);
    }

    #[test]
    fn test_p2() {
        let input = prepare_example_input(EXAMPLE_INPUT);
        assert_eq!(p2(input).unwrap(), 4_174_379_265u64);
    }

    #[test]
    fn test_patterns() {
        assert!(is_doubled("1212"));
        assert!(!is_doubled("121"));
        assert!(!is_doubled("1213"));
        assert!(is_repeated("111"));
        assert!(is_repeated("123123123"));
        assert!(!is_repeated("1231234"));
        assert!(!is_repeated("7"));
    }

    #[test]
    fn test_no_invalid_ids() {
        assert_eq!(p1("1-9\n").unwrap(), 0u64);
    }

    #[test]
    fn test_line_count() {
        assert!(matches!(p1(""), Err(SolveError::Malformed(_))));
        assert!(matches!(p1("1-2\n3-4\n"), Err(SolveError::Malformed(_))));
    }
}
