//! 2025 day 1: Secret Entrance
//!
//! A dial numbered 0-99 starts at 50. Each line is a rotation `L<n>` or
//! `R<n>`. Part 1 counts the rotations that leave the dial at 0, part 2
//! every time the dial points at 0, including while it turns.

use crate::app::puzzles::SolveError;
use crate::domain::answer::Answer;
use crate::domain::convert::convert;
use crate::domain::seq::Sequence;
use crate::domain::text::split_lines_until_empty;
use log::debug;

const INITIAL_POSITION: u64 = 50;
const DIAL_SIZE: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Rotation {
    direction: Direction,
    steps: u64,
}

impl Rotation {
    fn parse(line: &str) -> Result<Self, SolveError> {
        let (direction, steps) = line
            .split_at_checked(1)
            .ok_or_else(|| SolveError::malformed(format!("rotation {line:?}")))?;
        let direction = match direction {
            "L" => Direction::Left,
            "R" => Direction::Right,
            _ => return Err(SolveError::malformed(format!("direction in {line:?}"))),
        };
        Ok(Self {
            direction,
            steps: convert(steps)?,
        })
    }
}

#[derive(Debug)]
struct Dial {
    position: u64,
}

impl Dial {
    fn new() -> Self {
        Self {
            position: INITIAL_POSITION,
        }
    }

    /// Rotate and return how many times the dial pointed at 0, the final
    /// position included
    fn rotate(&mut self, rotation: Rotation) -> u64 {
        let Rotation { direction, steps } = rotation;
        let zeros = match direction {
            Direction::Right => (self.position + steps) / DIAL_SIZE,
            Direction::Left if self.position == 0 => steps / DIAL_SIZE,
            Direction::Left if steps >= self.position => (steps - self.position) / DIAL_SIZE + 1,
            Direction::Left => 0,
        };
        self.position = match direction {
            Direction::Right => (self.position + steps) % DIAL_SIZE,
            Direction::Left => (self.position + DIAL_SIZE - steps % DIAL_SIZE) % DIAL_SIZE,
        };
        debug!("Dial rotated: {rotation:?} -> {} ({zeros} zeros)", self.position);
        zeros
    }
}

fn solve(input: &str, count_passes: bool) -> Result<Answer, SolveError> {
    let mut dial = Dial::new();
    let counts = split_lines_until_empty(input)
        .map(|line| {
            let zeros = dial.rotate(Rotation::parse(line)?);
            Ok(if count_passes {
                zeros
            } else {
                u64::from(dial.position == 0)
            })
        })
        .collect::<Result<Vec<_>, SolveError>>()?;

    let total = counts
        .fold_left_first(|a, b| a + b)
        .ok_or(SolveError::NoResult("no rotations"))?;
    Ok(total.into())
}

pub fn p1(input: &str) -> Result<Answer, SolveError> {
    solve(input, false)
}

pub fn p2(input: &str) -> Result<Answer, SolveError> {
    solve(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::text::prepare_example_input;

    const EXAMPLE_INPUT: &str = r"
L68
L30
R48
L5
R60
L55
L1
L99
R14
L82
";

    #[test]
    fn test_p1() {
        let input = prepare_example_input(EXAMPLE_INPUT);
        assert_eq!(p1(input).unwrap(), 3u64);
    }

    #[test]
    fn test_p2() {
        let input = prepare_example_input(EXAMPLE_INPUT);
        assert_eq!(p2(input).unwrap(), 6u64);
    }

    #[test]
    fn test_full_turns() {
        let mut dial = Dial::new();
        let right = |steps| Rotation {
            direction: Direction::Right,
            steps,
        };
        let left = |steps| Rotation {
            direction: Direction::Left,
            steps,
        };
        assert_eq!(dial.rotate(right(1000)), 10);
        assert_eq!(dial.position, 50);
        assert_eq!(dial.rotate(left(50)), 1);
        assert_eq!(dial.position, 0);
        assert_eq!(dial.rotate(left(250)), 2);
        assert_eq!(dial.position, 50);
    }

    #[test]
    fn test_bad_rotations() {
        assert!(matches!(p1("X5\n"), Err(SolveError::Malformed(_))));
        assert!(matches!(p1("L\n"), Err(SolveError::Convert(_))));
        assert!(matches!(p1(""), Err(SolveError::NoResult(_))));
    }
}
