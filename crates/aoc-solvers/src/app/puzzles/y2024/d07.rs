//! 2024 day 7: Bridge Repair
//!
//! Each line is `<test value>: <numbers...>`. An equation is possible when
//! the operators between the numbers, evaluated left to right, can produce
//! the test value. Part 1 allows `+` and `*`, part 2 also concatenation.
//! The answer is the sum of the test values of the possible equations.

use crate::app::puzzles::SolveError;
use crate::domain::answer::Answer;
use crate::domain::convert::convert;
use crate::domain::seq::Sequence;
use crate::domain::text::split_lines_until_empty;
use log::info;

const MIN_NUMBERS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operator {
    Add,
    Multiply,
    Concatenate,
}

impl Operator {
    fn apply(self, lhs: u64, rhs: u64) -> Option<u64> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Concatenate => {
                let shift = 10u64.checked_pow(rhs.checked_ilog10().unwrap_or(0) + 1)?;
                lhs.checked_mul(shift)?.checked_add(rhs)
            }
        }
    }
}

const BASIC_OPERATORS: &[Operator] = &[Operator::Multiply, Operator::Add];
const ALL_OPERATORS: &[Operator] = &[Operator::Multiply, Operator::Add, Operator::Concatenate];

#[derive(Clone, Debug, PartialEq, Eq)]
struct Equation {
    test_value: u64,
    numbers: Vec<u64>,
}

impl Equation {
    fn parse(line: &str) -> Result<Self, SolveError> {
        let (test_value, numbers) = line
            .split_once(':')
            .ok_or_else(|| SolveError::malformed(format!("equation {line:?}")))?;
        let numbers = numbers
            .split_whitespace()
            .map(convert)
            .collect::<Result<Vec<u64>, _>>()?;
        if numbers.len() < MIN_NUMBERS {
            return Err(SolveError::malformed(format!(
                "equation needs at least {MIN_NUMBERS} numbers: {line:?}"
            )));
        }
        Ok(Self {
            test_value: convert(test_value)?,
            numbers,
        })
    }

    fn can_be_true(&self, operators: &[Operator]) -> bool {
        match self.numbers.split_first() {
            Some((&first, rest)) => self.reaches(first, rest, operators),
            None => false,
        }
    }

    /// Depth-first search over operator choices
    ///
    /// Every operator is non-decreasing for positive operands, so a partial
    /// result above the test value is dropped.
    fn reaches(&self, acc: u64, rest: &[u64], operators: &[Operator]) -> bool {
        let Some((&next, rest)) = rest.split_first() else {
            return acc == self.test_value;
        };
        operators.iter().any(|operator| {
            operator.apply(acc, next).is_some_and(|value| {
                value <= self.test_value && self.reaches(value, rest, operators)
            })
        })
    }
}

fn solve(input: &str, operators: &[Operator]) -> Result<Answer, SolveError> {
    let mut possible = Vec::new();
    for (index, line) in split_lines_until_empty(input).indexed() {
        let equation = Equation::parse(line)?;
        if equation.can_be_true(operators) {
            info!("Possible equation: {index} -> {}", equation.test_value);
            possible.push(equation.test_value);
        }
    }

    let total = possible
        .fold_left_first(|a, b| a + b)
        .ok_or(SolveError::NoResult("no equation can be made true"))?;
    Ok(total.into())
}

pub fn p1(input: &str) -> Result<Answer, SolveError> {
    solve(input, BASIC_OPERATORS)
}

pub fn p2(input: &str) -> Result<Answer, SolveError> {
    solve(input, ALL_OPERATORS)
}
