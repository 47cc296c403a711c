//! 2024 day 6: Guard Gallivant
//!
//! The guard starts at `^` facing north, walks forward and turns right in
//! front of every `#` until leaving the map. Part 1 counts the distinct
//! cells the guard visits. Part 2 counts the cells where one extra
//! obstruction makes the guard walk in a loop.

use crate::app::puzzles::SolveError;
use crate::domain::answer::Answer;
use crate::domain::seq::Sequence;
use crate::domain::text::split_lines_until_empty;
use log::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

type Point = (usize, usize);

#[derive(Debug)]
struct Lab {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    start: Point,
}

/// How a walk ended, with the directions seen on every cell
enum Walk {
    Exited(Vec<u8>),
    Looped,
}

impl Lab {
    fn parse(input: &str) -> Result<Self, SolveError> {
        let mut width = None;
        let mut height = 0;
        let mut walls = Vec::new();
        let mut start = None;

        for (y, line) in split_lines_until_empty(input).indexed() {
            if *width.get_or_insert(line.len()) != line.len() {
                return Err(SolveError::malformed(format!("row {y} has a different width")));
            }
            for (x, cell) in line.bytes().indexed() {
                match cell {
                    b'#' => walls.push(true),
                    b'.' => walls.push(false),
                    b'^' if start.is_none() => {
                        start = Some((x, y));
                        walls.push(false);
                    }
                    b'^' => return Err(SolveError::malformed("more than one guard")),
                    _ => {
                        return Err(SolveError::malformed(format!(
                            "cell {:?} at ({x}, {y})",
                            char::from(cell)
                        )));
                    }
                }
            }
            height += 1;
        }

        let start = start.ok_or_else(|| SolveError::malformed("no guard on the map"))?;
        Ok(Self {
            width: width.unwrap_or(0),
            height,
            walls,
            start,
        })
    }

    fn index(&self, (x, y): Point) -> usize {
        y * self.width + x
    }

    fn step(&self, (x, y): Point, direction: Direction) -> Option<Point> {
        match direction {
            Direction::North => y.checked_sub(1).map(|y| (x, y)),
            Direction::East => (x + 1 < self.width).then_some((x + 1, y)),
            Direction::South => (y + 1 < self.height).then_some((x, y + 1)),
            Direction::West => x.checked_sub(1).map(|x| (x, y)),
        }
    }

    /// Walk the guard from the start, treating `obstruction` as a wall
    fn walk(&self, obstruction: Option<Point>) -> Walk {
        let mut seen = vec![0u8; self.walls.len()];
        let mut position = self.start;
        let mut direction = Direction::North;

        loop {
            let cell = &mut seen[self.index(position)];
            if *cell & direction.bit() != 0 {
                return Walk::Looped;
            }
            *cell |= direction.bit();

            let Some(next) = self.step(position, direction) else {
                return Walk::Exited(seen);
            };
            if self.walls[self.index(next)] || Some(next) == obstruction {
                direction = direction.turn_right();
            } else {
                position = next;
            }
        }
    }

    fn point(&self, index: usize) -> Point {
        (index % self.width, index / self.width)
    }
}

fn visited_cells(lab: &Lab) -> Result<Vec<usize>, SolveError> {
    match lab.walk(None) {
        Walk::Exited(seen) => Ok(seen
            .iter()
            .indexed()
            .into_iter()
            .filter(|(_, directions)| **directions != 0)
            .map(|(index, _)| index)
            .collect()),
        Walk::Looped => Err(SolveError::NoResult("the guard never leaves the map")),
    }
}

pub fn p1(input: &str) -> Result<Answer, SolveError> {
    let lab = Lab::parse(input)?;
    let visited = visited_cells(&lab)?;
    Ok((visited.len() as u64).into())
}

pub fn p2(input: &str) -> Result<Answer, SolveError> {
    let lab = Lab::parse(input)?;
    let visited = visited_cells(&lab)?;
    info!("Trying obstructions on {} cells", visited.len() - 1);

    let mut loops = 0u64;
    for point in visited.into_iter().map(|index| lab.point(index)) {
        if point == lab.start {
            continue;
        }
        if let Walk::Looped = lab.walk(Some(point)) {
            debug!("Loop with obstruction at {point:?}");
            loops += 1;
        }
    }
    Ok(loops.into())
}
