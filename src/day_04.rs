use crate::grid::{Grid, GridError};
use crate::position::Position;

#[aoc_generator(day4)]
fn parse(input: &str) -> Result<Grid<u8>, GridError> {
    Grid::parse_bytes(input)
}

const ALL_DIRECTIONS: [Position; 8] = [
    Position::new(-1, -1),
    Position::new(-1, 0),
    Position::new(-1, 1),
    Position::new(0, -1),
    Position::new(0, 1),
    Position::new(1, -1),
    Position::new(1, 0),
    Position::new(1, 1),
];

fn spells(grid: &Grid<u8>, start: Position, step: Position, word: &[u8]) -> bool {
    word.iter()
        .zip(0..)
        .all(|(&letter, n)| grid.get(start + step * n) == Some(&letter))
}

#[aoc(day4, part1)]
fn part_1(grid: &Grid<u8>) -> usize {
    grid.iter()
        .filter(|&(_, &b)| b == b'X')
        .map(|(pos, _)| {
            ALL_DIRECTIONS
                .iter()
                .filter(|&&step| spells(grid, pos, step, b"XMAS"))
                .count()
        })
        .sum()
}

#[aoc(day4, part2)]
fn part_2(grid: &Grid<u8>) -> usize {
    let is_mas = |a: Option<&u8>, b: Option<&u8>| {
        matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
    };
    grid.iter()
        .filter(|&(pos, &b)| {
            b == b'A'
                && is_mas(
                    grid.get(pos + Position::new(-1, -1)),
                    grid.get(pos + Position::new(1, 1)),
                )
                && is_mas(
                    grid.get(pos + Position::new(-1, 1)),
                    grid.get(pos + Position::new(1, -1)),
                )
        })
        .count()
}
