use std::collections::HashSet;

use thiserror::Error;

use crate::grid::{Grid, GridError};
use crate::position::Position;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Invalid height: {0:?}")]
    InvalidHeight(char),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Impassable tiles (`.` in the examples) are stored as `u8::MAX`.
#[aoc_generator(day10)]
fn parse(input: &str) -> Result<Grid<u8>, ParseError> {
    Grid::parse_with(input, |b| match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'.' => Ok(u8::MAX),
        _ => Err(ParseError::InvalidHeight(b as char)),
    })
}

fn trailheads(map: &Grid<u8>) -> impl Iterator<Item = Position> + '_ {
    map.iter().filter(|&(_, &h)| h == 0).map(|(pos, _)| pos)
}

/// Calls `reached` once for every trail from `pos` to a height 9.
fn hike(map: &Grid<u8>, pos: Position, reached: &mut impl FnMut(Position)) {
    let height = map[pos];
    if height == 9 {
        reached(pos);
        return;
    }
    for next in pos.neighbors() {
        if map.get(next) == Some(&(height + 1)) {
            hike(map, next, reached);
        }
    }
}

#[aoc(day10, part1)]
fn part_1(map: &Grid<u8>) -> usize {
    trailheads(map)
        .map(|start| {
            let mut peaks = HashSet::new();
            hike(map, start, &mut |peak| {
                peaks.insert(peak);
            });
            peaks.len()
        })
        .sum()
}

#[aoc(day10, part2)]
fn part_2(map: &Grid<u8>) -> usize {
    trailheads(map)
        .map(|start| {
            let mut trails = 0;
            hike(map, start, &mut |_| trails += 1);
            trails
        })
        .sum()
}
