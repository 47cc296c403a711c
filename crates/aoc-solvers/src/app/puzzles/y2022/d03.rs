//! 2022 day 3: Rucksack Reorganization
//!
//! Items are letters with priorities `a..=z` → 1..=26 and `A..=Z` → 27..=52.
//! Part 1 finds the item shared by both halves of each rucksack, part 2 the
//! badge shared by each group of three rucksacks.

use crate::app::puzzles::SolveError;
use crate::domain::answer::Answer;
use crate::domain::seq::Sequence;
use crate::domain::text::split_lines_until_empty;

const GROUP_SIZE: usize = 3;

/// Bit set of item priorities (bit `p` set for priority `p`)
fn item_set(items: &str) -> Result<u64, SolveError> {
    items.bytes().try_fold(0u64, |set, item| {
        let priority = match item {
            b'a'..=b'z' => item - b'a' + 1,
            b'A'..=b'Z' => item - b'A' + 27,
            _ => return Err(SolveError::malformed(format!("item {:?}", char::from(item)))),
        };
        Ok(set | 1u64 << priority)
    })
}

fn shared_priority(common: u64) -> Result<u64, SolveError> {
    if common == 0 {
        return Err(SolveError::NoResult("no shared item"));
    }
    Ok(u64::from(common.trailing_zeros()))
}

fn total(priorities: Vec<u64>) -> Result<Answer, SolveError> {
    let sum = priorities
        .fold_left_first(|a, b| a + b)
        .ok_or(SolveError::NoResult("no rucksacks"))?;
    Ok(sum.into())
}

pub fn p1(input: &str) -> Result<Answer, SolveError> {
    let priorities = split_lines_until_empty(input)
        .map(|line| {
            if line.len() % 2 != 0 {
                return Err(SolveError::malformed(format!(
                    "rucksack with odd item count: {line:?}"
                )));
            }
            let (left, right) = line.split_at(line.len() / 2);
            shared_priority(item_set(left)? & item_set(right)?)
        })
        .collect::<Result<Vec<_>, _>>()?;
    total(priorities)
}

pub fn p2(input: &str) -> Result<Answer, SolveError> {
    let priorities = split_lines_until_empty(input)
        .chunk(GROUP_SIZE)
        .into_iter()
        .map(|group| {
            if group.len() != GROUP_SIZE {
                return Err(SolveError::malformed(format!(
                    "incomplete group of {} rucksacks",
                    group.len()
                )));
            }
            let common = group
                .map(item_set)
                .try_fold(u64::MAX, |common, set| set.map(|set| common & set))?;
            shared_priority(common)
        })
        .collect::<Result<Vec<_>, _>>()?;
    total(priorities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::text::prepare_example_input;

    const EXAMPLE_INPUT: &str = r"
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    #[test]
    fn test_p1() {
        let input = prepare_example_input(EXAMPLE_INPUT);
        assert_eq!(p1(input).unwrap(), 157u64);
    }

    #[test]
    fn test_p2() {
        let input = prepare_example_input(EXAMPLE_INPUT);
        assert_eq!(p2(input).unwrap(), 70u64);
    }

    #[test]
    fn test_item_priorities() {
        assert_eq!(item_set("a").unwrap(), 1u64 << 1);
        assert_eq!(item_set("Z").unwrap(), 1u64 << 52);
        assert!(item_set("a1").is_err());
    }

    #[test]
    fn test_incomplete_group() {
        assert!(matches!(p2("ab\ncb\n"), Err(SolveError::Malformed(_))));
    }
}
