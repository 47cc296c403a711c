//! 2024 day 5: Print Queue
//!
//! The input is a block of page ordering rules `X|Y` (page X must be printed
//! before page Y), a blank line, then one update per line as comma-separated
//! page numbers. Part 1 sums the middle page of the correctly ordered
//! updates, part 2 reorders the others and sums their middle pages.

use crate::app::puzzles::SolveError;
use crate::domain::answer::Answer;
use crate::domain::collections::{HashMap, HashSet};
use crate::domain::convert::convert;
use crate::domain::text::split_lines_until_empty;
use log::debug;
use std::cmp::Ordering;

type Page = u8;

/// Pages that must follow each page
#[derive(Debug, Default)]
struct Rules {
    successors: HashMap<Page, HashSet<Page>>,
}

impl Rules {
    fn parse(text: &str) -> Result<Self, SolveError> {
        let mut rules = Self::default();
        for line in split_lines_until_empty(text) {
            let (before, after) = line
                .split_once('|')
                .ok_or_else(|| SolveError::malformed(format!("rule {line:?}")))?;
            rules
                .successors
                .entry(convert(before)?)
                .or_default()
                .insert(convert(after)?);
        }
        Ok(rules)
    }

    fn must_precede(&self, before: Page, after: Page) -> bool {
        self.successors
            .get(&before)
            .is_some_and(|successors| successors.contains(&after))
    }

    fn is_ordered(&self, pages: &[Page]) -> bool {
        let mut printed: HashSet<Page> = HashSet::default();
        pages.iter().all(|page| {
            if let Some(successors) = self.successors.get(page)
                && !printed.is_disjoint(successors)
            {
                return false;
            }
            printed.insert(*page);
            true
        })
    }

    fn compare(&self, a: Page, b: Page) -> Ordering {
        if self.must_precede(a, b) {
            Ordering::Less
        } else if self.must_precede(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

fn parse_updates(text: &str) -> Result<Vec<Vec<Page>>, SolveError> {
    split_lines_until_empty(text)
        .map(|line| {
            line.split(',')
                .map(|page| convert(page).map_err(SolveError::from))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

fn parse(input: &str) -> Result<(Rules, Vec<Vec<Page>>), SolveError> {
    let (rules, updates) = input
        .split_once("\n\n")
        .ok_or_else(|| SolveError::malformed("missing blank line after rules"))?;
    Ok((Rules::parse(rules)?, parse_updates(updates)?))
}

fn middle_page(pages: &[Page]) -> Result<u64, SolveError> {
    if pages.len() % 2 == 0 {
        return Err(SolveError::malformed(format!(
            "update without a middle page: {pages:?}"
        )));
    }
    Ok(u64::from(pages[pages.len() / 2]))
}

pub fn p1(input: &str) -> Result<Answer, SolveError> {
    let (rules, updates) = parse(input)?;

    let mut sum = 0u64;
    for pages in updates.iter().filter(|pages| rules.is_ordered(pages)) {
        debug!("Ordered update: {pages:?}");
        sum += middle_page(pages)?;
    }
    Ok(sum.into())
}

pub fn p2(input: &str) -> Result<Answer, SolveError> {
    let (rules, updates) = parse(input)?;

    let mut sum = 0u64;
    for mut pages in updates.into_iter().filter(|pages| !rules.is_ordered(pages)) {
        pages.sort_by(|a, b| rules.compare(*a, *b));
        debug!("Reordered update: {pages:?}");
        sum += middle_page(&pages)?;
    }
    Ok(sum.into())
}
