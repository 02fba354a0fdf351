use thiserror::Error;

use crate::grid::{Grid, GridError};
use crate::position::{Direction, InvalidDirection, Position};

#[derive(Debug, Error)]
enum ParseError {
    #[error("Syntax error")]
    SyntaxError,
    #[error("Invalid tile: {0:?}")]
    InvalidTile(char),
    #[error("No robot in the warehouse")]
    MissingRobot,
    #[error(transparent)]
    InvalidMove(#[from] InvalidDirection),
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Wall,
    Empty,
    Box,
    BoxLeft,
    BoxRight,
    Robot,
}

impl TryFrom<u8> for Tile {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            b'#' => Self::Wall,
            b'.' => Self::Empty,
            b'O' => Self::Box,
            b'[' => Self::BoxLeft,
            b']' => Self::BoxRight,
            b'@' => Self::Robot,
            _ => return Err(ParseError::InvalidTile(value as char)),
        })
    }
}

impl From<Tile> for u8 {
    fn from(value: Tile) -> Self {
        match value {
            Tile::Wall => b'#',
            Tile::Empty => b'.',
            Tile::Box => b'O',
            Tile::BoxLeft => b'[',
            Tile::BoxRight => b']',
            Tile::Robot => b'@',
        }
    }
}

#[derive(Debug, Clone)]
struct Warehouse {
    map: Grid<Tile>,
    moves: Vec<Direction>,
}

#[aoc_generator(day15)]
fn parse(input: &str) -> Result<Warehouse, ParseError> {
    let (map, moves) = input.split_once("\n\n").ok_or(ParseError::SyntaxError)?;
    let map = Grid::parse_with(map, Tile::try_from)?;
    let moves = moves
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .map(Direction::try_from)
        .collect::<Result<_, _>>()?;
    Ok(Warehouse { map, moves })
}

fn widen(map: &Grid<Tile>) -> Grid<Tile> {
    let mut wide = Grid::new(map.width() * 2, map.height(), Tile::Empty);
    for (pos, &tile) in map.iter() {
        let left = Position::new(pos.row, pos.col * 2);
        let right = left + Direction::Right;
        let (l, r) = match tile {
            Tile::Box => (Tile::BoxLeft, Tile::BoxRight),
            Tile::Robot => (Tile::Robot, Tile::Empty),
            other => (other, other),
        };
        wide[left] = l;
        wide[right] = r;
    }
    wide
}

/// Pushes everything in front of `robot` one step, if nothing hits a wall.
/// Returns the robot's new position.
fn step(map: &mut Grid<Tile>, robot: Position, dir: Direction) -> Position {
    let mut moving = vec![robot];
    let mut ix = 0;
    while let Some(&pos) = moving.get(ix) {
        ix += 1;
        let next = pos + dir;
        let mut push = |p: Position| {
            if !moving.contains(&p) {
                moving.push(p);
            }
        };
        match map[next] {
            Tile::Wall => return robot,
            Tile::Empty | Tile::Robot => {}
            Tile::Box => push(next),
            Tile::BoxLeft => {
                push(next);
                if dir.is_vertical() {
                    push(next + Direction::Right);
                }
            }
            Tile::BoxRight => {
                push(next);
                if dir.is_vertical() {
                    push(next + Direction::Left);
                }
            }
        }
    }
    let tiles = moving.iter().map(|&p| map[p]).collect::<Vec<_>>();
    for &pos in &moving {
        map[pos] = Tile::Empty;
    }
    for (&pos, tile) in moving.iter().zip(tiles) {
        map[pos + dir] = tile;
    }
    robot + dir
}

fn run(map: &Grid<Tile>, moves: &[Direction]) -> Result<Grid<Tile>, ParseError> {
    let mut map = map.clone();
    let mut robot = map
        .find(|&t| t == Tile::Robot)
        .ok_or(ParseError::MissingRobot)?;
    for &dir in moves {
        robot = step(&mut map, robot, dir);
        tracing::trace!(?dir, ?robot, "moved");
    }
    Ok(map)
}

fn gps_sum(map: &Grid<Tile>) -> i64 {
    map.iter()
        .filter(|&(_, &t)| matches!(t, Tile::Box | Tile::BoxLeft))
        .map(|(pos, _)| 100 * pos.row + pos.col)
        .sum()
}

#[aoc(day15, part1)]
fn part_1(warehouse: &Warehouse) -> Result<i64, ParseError> {
    run(&warehouse.map, &warehouse.moves).map(|map| gps_sum(&map))
}

#[aoc(day15, part2)]
fn part_2(warehouse: &Warehouse) -> Result<i64, ParseError> {
    run(&widen(&warehouse.map), &warehouse.moves).map(|map| gps_sum(&map))
}
