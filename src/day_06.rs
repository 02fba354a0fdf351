use std::collections::HashSet;

use thiserror::Error;

use crate::grid::{Grid, GridError};
use crate::position::{Direction, Position};

#[derive(Debug, Error)]
enum ParseError {
    #[error("Invalid tile: {0:?}")]
    InvalidTile(char),
    #[error("No guard on the map")]
    MissingGuard,
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone)]
struct Lab {
    obstructions: Grid<bool>,
    guard: Position,
}

#[aoc_generator(day6)]
fn parse(input: &str) -> Result<Lab, ParseError> {
    let tiles = Grid::parse_with(input, |b| match b {
        b'.' | b'#' | b'^' => Ok(b),
        _ => Err(ParseError::InvalidTile(b as char)),
    })?;
    let guard = tiles
        .find(|&b| b == b'^')
        .ok_or(ParseError::MissingGuard)?;
    Ok(Lab {
        obstructions: tiles.map(|&b| b == b'#'),
        guard,
    })
}

enum Outcome {
    Exited,
    Looped,
}

/// Walks the guard until they leave the map or return to an earlier state.
fn patrol(lab: &Lab, extra: Option<Position>, mut visit: impl FnMut(Position)) -> Outcome {
    let mut seen = lab.obstructions.map(|_| 0_u8);
    let mut pos = lab.guard;
    let mut dir = Direction::Up;
    loop {
        let mask = 1 << dir.index();
        if seen[pos] & mask != 0 {
            return Outcome::Looped;
        }
        seen[pos] |= mask;
        visit(pos);
        let next = pos + dir;
        match lab.obstructions.get(next) {
            None => return Outcome::Exited,
            Some(true) => dir = dir.turn_right(),
            Some(false) if extra == Some(next) => dir = dir.turn_right(),
            Some(false) => pos = next,
        }
    }
}

fn visited(lab: &Lab) -> HashSet<Position> {
    let mut visited = HashSet::new();
    patrol(lab, None, |pos| {
        visited.insert(pos);
    });
    visited
}

#[aoc(day6, part1)]
fn part_1(lab: &Lab) -> usize {
    visited(lab).len()
}

#[aoc(day6, part2)]
fn part_2(lab: &Lab) -> usize {
    // Only cells on the original route can change it.
    let candidates = visited(lab);
    tracing::debug!(candidates = candidates.len(), "testing obstructions");
    candidates
        .into_iter()
        .filter(|&pos| pos != lab.guard)
        .filter(|&pos| matches!(patrol(lab, Some(pos), |_| {}), Outcome::Looped))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
        ....#.....\n\
        .........#\n\
        ..........\n\
        ..#.......\n\
        .......#..\n\
        ..........\n\
        .#..^.....\n\
        ........#.\n\
        #.........\n\
        ......#...\
    ";

    #[test]
    fn test_parse() {
        let lab = parse(EXAMPLE).unwrap();
        assert_eq!(lab.guard, Position::new(6, 4));
        assert!(lab.obstructions[Position::new(0, 4)]);
        assert!(matches!(parse("...\n.#."), Err(ParseError::MissingGuard)));
    }

    #[test]
    fn test_part_1() {
        let lab = parse(EXAMPLE).unwrap();
        assert_eq!(part_1(&lab), 41);
    }

    #[test]
    fn test_part_2() {
        let lab = parse(EXAMPLE).unwrap();
        assert_eq!(part_2(&lab), 6);
    }
}
