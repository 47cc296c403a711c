//! 2022 day 6: Tuning Trouble
//!
//! Find the first position in the datastream after a window of distinct
//! characters: 4 for the start-of-packet marker, 14 for the
//! start-of-message marker.

use crate::app::puzzles::SolveError;
use crate::domain::answer::Answer;
use crate::domain::seq::Sequence;
use itertools::Itertools;

const PACKET_MARKER_LEN: usize = 4;
const MESSAGE_MARKER_LEN: usize = 14;

fn marker_end(input: &str, len: usize) -> Result<Answer, SolveError> {
    let (index, _) = input
        .trim_end()
        .chars()
        .slide(len)
        .indexed()
        .into_iter()
        .find(|(_, window)| window.clone().all_unique())
        .ok_or(SolveError::NoResult("no marker in datastream"))?;
    Ok(((index + len) as u64).into())
}

pub fn p1(input: &str) -> Result<Answer, SolveError> {
    marker_end(input, PACKET_MARKER_LEN)
}

pub fn p2(input: &str) -> Result<Answer, SolveError> {
    marker_end(input, MESSAGE_MARKER_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLES: [(&str, u64, u64); 5] = [
        ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19),
        ("bvwbjplbgvbhsrlpgjmm", 5, 23),
        ("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
        ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29),
        ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
    ];

    #[test]
    fn test_p1() {
        for (input, expected, _) in EXAMPLES {
            assert_eq!(p1(input).unwrap(), expected, "input {input}");
        }
    }

    #[test]
    fn test_p2() {
        for (input, _, expected) in EXAMPLES {
            assert_eq!(p2(input).unwrap(), expected, "input {input}");
        }
    }

    #[test]
    fn test_trailing_newline_ignored() {
        assert_eq!(p1("mjqjpqmgbljsphdztnvjfqwrcgsmlb\n").unwrap(), 7u64);
    }

    #[test]
    fn test_no_marker() {
        assert!(matches!(p1("aabb"), Err(SolveError::NoResult(_))));
        assert!(matches!(p1("abc"), Err(SolveError::NoResult(_))));
    }
}
