use std::collections::HashSet;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::position::Position;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Syntax error")]
    SyntaxError,
    #[error(transparent)]
    InvalidNumber(#[from] ParseIntError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bathroom {
    width: i64,
    height: i64,
}

const BATHROOM: Bathroom = Bathroom {
    width: 101,
    height: 103,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Robot {
    position: Position,
    velocity: Position,
}

/// Parses `x,y` into a row/column position.
fn parse_xy(s: &str) -> Result<Position, ParseError> {
    let (x, y) = s.split_once(',').ok_or(ParseError::SyntaxError)?;
    Ok(Position::new(y.parse()?, x.parse()?))
}

impl FromStr for Robot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (p, v) = s
            .strip_prefix("p=")
            .and_then(|rest| rest.split_once(" v="))
            .ok_or(ParseError::SyntaxError)?;
        Ok(Self {
            position: parse_xy(p)?,
            velocity: parse_xy(v)?,
        })
    }
}

impl Robot {
    fn after(self, seconds: i64, room: Bathroom) -> Position {
        let pos = self.position + self.velocity * seconds;
        Position::new(pos.row.rem_euclid(room.height), pos.col.rem_euclid(room.width))
    }
}

#[aoc_generator(day14)]
fn parse(input: &str) -> Result<Vec<Robot>, ParseError> {
    input.lines().map(str::parse).collect()
}

fn safety_factor(robots: &[Robot], seconds: i64, room: Bathroom) -> usize {
    let mid_row = room.height / 2;
    let mid_col = room.width / 2;
    let mut quadrants = [0; 4];
    for robot in robots {
        let pos = robot.after(seconds, room);
        if pos.row == mid_row || pos.col == mid_col {
            continue;
        }
        let ix = usize::from(pos.row > mid_row) * 2 + usize::from(pos.col > mid_col);
        quadrants[ix] += 1;
    }
    quadrants.iter().product()
}

/// The picture shows up when every robot stands on its own tile.
fn first_distinct(robots: &[Robot], room: Bathroom) -> Option<i64> {
    let mut occupied = HashSet::with_capacity(robots.len());
    (0..room.width * room.height).find(|&seconds| {
        occupied.clear();
        robots
            .iter()
            .all(|robot| occupied.insert(robot.after(seconds, room)))
    })
}

#[aoc(day14, part1)]
fn part_1(robots: &[Robot]) -> usize {
    safety_factor(robots, 100, BATHROOM)
}

#[aoc(day14, part2)]
fn part_2(robots: &[Robot]) -> Option<i64> {
    first_distinct(robots, BATHROOM)
}
