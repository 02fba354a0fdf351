use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Syntax error")]
    SyntaxError,
    #[error(transparent)]
    InvalidNumber(#[from] ParseIntError),
}

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Vector {
    x: i64,
    y: i64,
}

impl Vector {
    /// Parses `<label>: X<sep><x>, Y<sep><y>`.
    fn parse_line(line: &str, label: &str, sep: char) -> Result<Self, ParseError> {
        let rest = line
            .strip_prefix(label)
            .and_then(|rest| rest.strip_prefix(": X"))
            .and_then(|rest| rest.strip_prefix(sep))
            .ok_or(ParseError::SyntaxError)?;
        let (x, y) = rest.split_once(", Y").ok_or(ParseError::SyntaxError)?;
        let y = y.strip_prefix(sep).ok_or(ParseError::SyntaxError)?;
        Ok(Self {
            x: x.parse()?,
            y: y.parse()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Machine {
    a: Vector,
    b: Vector,
    prize: Vector,
}

impl FromStr for Machine {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let mut next = || lines.next().ok_or(ParseError::SyntaxError);
        Ok(Self {
            a: Vector::parse_line(next()?, "Button A", '+')?,
            b: Vector::parse_line(next()?, "Button B", '+')?,
            prize: Vector::parse_line(next()?, "Prize", '=')?,
        })
    }
}

impl Machine {
    /// The button vectors are never parallel in the puzzle input, so there is
    /// at most one solution; Cramer's rule finds it.
    fn presses(&self) -> Option<(i64, i64)> {
        let Self { a, b, prize } = *self;
        let det = a.x * b.y - a.y * b.x;
        if det == 0 {
            return None;
        }
        let na = prize.x * b.y - prize.y * b.x;
        let nb = a.x * prize.y - a.y * prize.x;
        if na % det != 0 || nb % det != 0 {
            return None;
        }
        let (na, nb) = (na / det, nb / det);
        (na >= 0 && nb >= 0).then_some((na, nb))
    }

    fn tokens(&self, limit: Option<i64>) -> Option<i64> {
        let (na, nb) = self.presses()?;
        if let Some(limit) = limit
            && (na > limit || nb > limit)
        {
            return None;
        }
        Some(3 * na + nb)
    }
}

#[aoc_generator(day13)]
fn parse(input: &str) -> Result<Vec<Machine>, ParseError> {
    input
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(str::parse)
        .collect()
}

#[aoc(day13, part1)]
fn part_1(machines: &[Machine]) -> i64 {
    machines.iter().filter_map(|m| m.tokens(Some(100))).sum()
}

#[aoc(day13, part2)]
fn part_2(machines: &[Machine]) -> i64 {
    machines
        .iter()
        .filter_map(|m| {
            let far = Machine {
                prize: Vector {
                    x: m.prize.x + PRIZE_OFFSET,
                    y: m.prize.y + PRIZE_OFFSET,
                },
                ..*m
            };
            far.tokens(None)
        })
        .sum()
}
