//! 2022 day 5: Supply Stacks
//!
//! The input is a drawing of crate stacks, a blank line, then a list of
//! `move <n> from <a> to <b>` steps. Crate letters sit in every fourth
//! column of the drawing starting at column 1.
//!
//! Part 1 moves crates one at a time, part 2 moves each group at once. The
//! answer is the top crate of every stack.

use crate::app::puzzles::SolveError;
use crate::domain::answer::Answer;
use crate::domain::convert::convert;
use crate::domain::seq::Sequence;
use crate::domain::text::split_lines_until_empty;
use log::debug;

const CRATE_COLUMN: usize = 1;
const COLUMN_STEP: usize = 4;

type Stacks = Vec<Vec<char>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Move {
    count: usize,
    from: usize,
    to: usize,
}

fn parse_stacks(drawing: &str) -> Result<Stacks, SolveError> {
    let mut lines: Vec<&str> = drawing.lines().collect();
    let numbers = lines
        .pop()
        .ok_or_else(|| SolveError::malformed("missing stack drawing"))?;
    let mut stacks = vec![Vec::new(); numbers.split_whitespace().count()];

    for line in lines.iter().rev() {
        for (index, item) in line.chars().skip(CRATE_COLUMN).stride(COLUMN_STEP).indexed() {
            if item == ' ' {
                continue;
            }
            stacks
                .get_mut(index)
                .ok_or_else(|| SolveError::malformed(format!("crate outside stacks: {line:?}")))?
                .push(item);
        }
    }
    debug!("Stacks: {stacks:?}");
    Ok(stacks)
}

fn stack_index(text: &str, stack_count: usize) -> Result<usize, SolveError> {
    let number: usize = convert(text)?;
    if number == 0 || number > stack_count {
        return Err(SolveError::malformed(format!("no stack {number}")));
    }
    Ok(number - 1)
}

fn parse_move(line: &str, stack_count: usize) -> Result<Move, SolveError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let ["move", count, "from", from, "to", to] = words.as_slice() else {
        return Err(SolveError::malformed(format!("move {line:?}")));
    };
    Ok(Move {
        count: convert(count)?,
        from: stack_index(from, stack_count)?,
        to: stack_index(to, stack_count)?,
    })
}

fn take_crates(stacks: &mut Stacks, step: &Move) -> Result<Vec<char>, SolveError> {
    let source = &mut stacks[step.from];
    let remaining = source
        .len()
        .checked_sub(step.count)
        .ok_or_else(|| SolveError::malformed(format!("not enough crates for {step:?}")))?;
    Ok(source.split_off(remaining))
}

fn solve(input: &str, in_order: bool) -> Result<Answer, SolveError> {
    let (drawing, moves) = input
        .split_once("\n\n")
        .ok_or_else(|| SolveError::malformed("missing blank line after drawing"))?;
    let mut stacks = parse_stacks(drawing)?;

    for line in split_lines_until_empty(moves) {
        let step = parse_move(line, stacks.len())?;
        let mut crates = take_crates(&mut stacks, &step)?;
        if !in_order {
            crates.reverse();
        }
        stacks[step.to].extend(crates);
    }

    let tops: String = stacks.iter().filter_map(|stack| stack.last()).collect();
    Ok(tops.into())
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
    [D]
[N] [C]
[Z] [M] [P]
 1   2   3

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2
";

    #[test]
    fn test_p1() {
        let input = prepare_example_input(EXAMPLE_INPUT);
        assert_eq!(p1(input).unwrap(), "CMZ");
    }

    #[test]
    fn test_p2() {
        let input = prepare_example_input(EXAMPLE_INPUT);
        assert_eq!(p2(input).unwrap(), "MCD");
    }

    #[test]
    fn test_parse_stacks() {
        let stacks = parse_stacks("    [D]\n[N] [C]\n[Z] [M] [P]\n 1   2   3").unwrap();
        assert_eq!(stacks, vec![vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']]);
    }

    #[test]
    fn test_bad_move() {
        let input = "[A]\n 1\n\nmove 2 from 1 to 1\n";
        assert!(matches!(p1(input), Err(SolveError::Malformed(_))));
        let input = "[A]\n 1\n\nmove 1 from 1 to 2\n";
        assert!(matches!(p1(input), Err(SolveError::Malformed(_))));
    }
}
