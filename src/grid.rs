use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One unit square of the grid.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub fn new(x: i64, y: i64) -> Cell {
        Cell { x, y }
    }

    /// The cell `steps` cells away in `direction`, or an error if that lies
    /// outside the `i64` grid.
    pub fn step(self, direction: Direction, steps: i64) -> Result<Cell> {
        let (dx, dy) = direction.delta();
        let overflow = || Error::CoordinateOverflow { from: self, steps };

        Ok(Cell {
            x: dx
                .checked_mul(steps)
                .and_then(|d| self.x.checked_add(d))
                .ok_or_else(overflow)?,
            y: dy
                .checked_mul(steps)
                .and_then(|d| self.y.checked_add(d))
                .ok_or_else(overflow)?,
        })
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    East,
    West,
    North,
    South,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    pub fn delta(self) -> (i64, i64) {
        use Direction::*;

        match self {
            East => (1, 0),
            West => (-1, 0),
            North => (0, 1),
            South => (0, -1),
        }
    }

    pub fn token(self) -> &'static str {
        use Direction::*;

        match self {
            East => "E",
            West => "W",
            North => "N",
            South => "S",
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Direction> {
        Direction::ALL
            .into_iter()
            .find(|d| d.token() == s)
            .ok_or_else(|| Error::UnknownDirection(s.to_owned()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A straight run of `steps` cells in one direction. Always at least one step.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Move {
    direction: Direction,
    steps: i64,
}

impl Move {
    pub fn new(direction: Direction, steps: i64) -> Result<Move> {
        if steps < 1 {
            return Err(Error::InvalidSteps(steps));
        }

        Ok(Move { direction, steps })
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn steps(&self) -> i64 {
        self.steps
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.steps)
    }
}
