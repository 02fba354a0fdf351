//! Reindeer maze: cheapest walk from `S` to `E` where stepping forward costs
//! 1 and every quarter turn costs 1000.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use thiserror::Error;

use crate::grid::{Grid, GridError};
use crate::position::{Direction, Position};

const STEP_COST: u64 = 1;
const TURN_COST: u64 = 1000;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Invalid tile: {0:?}")]
    InvalidTile(char),
    #[error("Maze has no {0:?} tile")]
    Missing(char),
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone)]
struct Maze {
    walls: Grid<bool>,
    start: Position,
    end: Position,
}

#[aoc_generator(day16)]
fn parse(input: &str) -> Result<Maze, ParseError> {
    let tiles = Grid::parse_with(input, |b| match b {
        b'#' | b'.' | b'S' | b'E' => Ok(b),
        _ => Err(ParseError::InvalidTile(b as char)),
    })?;
    let start = tiles.find(|&b| b == b'S').ok_or(ParseError::Missing('S'))?;
    let end = tiles.find(|&b| b == b'E').ok_or(ParseError::Missing('E'))?;
    Ok(Maze {
        walls: tiles.map(|&b| b == b'#'),
        start,
        end,
    })
}

/// Lowest cost of every `(position, facing)` state, indexed by
/// [`Direction::index`].
type Costs = Grid<[u64; 4]>;

/// Dijkstra over `(position, facing)` states.
///
/// With `backwards` set, forward steps are walked in reverse, so the result
/// holds the cost from each state *to* the seeds instead of *from* them.
fn dijkstra(maze: &Maze, seeds: &[(Position, Direction)], backwards: bool) -> Costs {
    let mut costs = maze.walls.map(|_| [u64::MAX; 4]);
    let mut pending = BinaryHeap::new();
    for &(pos, dir) in seeds {
        pending.push((Reverse(0), pos, dir));
    }
    while let Some((Reverse(cost), pos, dir)) = pending.pop() {
        let best = &mut costs[pos][dir.index()];
        if *best <= cost {
            continue;
        }
        *best = cost;
        tracing::trace!(?pos, ?dir, cost, "settled");

        let next = if backwards { pos + dir.opposite() } else { pos + dir };
        if maze.walls.get(next) == Some(&false) && costs[next][dir.index()] > cost + STEP_COST {
            pending.push((Reverse(cost + STEP_COST), next, dir));
        }
        for turned in [dir.turn_left(), dir.turn_right()] {
            if costs[pos][turned.index()] > cost + TURN_COST {
                pending.push((Reverse(cost + TURN_COST), pos, turned));
            }
        }
    }
    costs
}

fn from_start(maze: &Maze) -> Costs {
    dijkstra(maze, &[(maze.start, Direction::Right)], false)
}

fn lowest_score(maze: &Maze, costs: &Costs) -> Option<u64> {
    costs[maze.end].iter().copied().min().filter(|&c| c != u64::MAX)
}

#[aoc(day16, part1)]
fn part_1(maze: &Maze) -> Option<u64> {
    lowest_score(maze, &from_start(maze))
}

#[aoc(day16, part2)]
fn part_2(maze: &Maze) -> Option<usize> {
    let forward = from_start(maze);
    let best = lowest_score(maze, &forward)?;
    let seeds = Direction::all().map(|dir| (maze.end, dir));
    let backward = dijkstra(maze, &seeds, true);

    // A state lies on a best path when the cheapest way in plus the cheapest
    // way out adds up to the best score.
    let tiles = forward
        .iter()
        .filter(|&(pos, there)| {
            Direction::all().into_iter().any(|dir| {
                let (a, b) = (there[dir.index()], backward[pos][dir.index()]);
                a != u64::MAX && b != u64::MAX && a + b == best
            })
        })
        .count();
    tracing::debug!(best, tiles, "best paths");
    Some(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const EXAMPLE1: &str = "\
        ###############\n\
        #.......#....E#\n\
        #.#.###.#.###.#\n\
        #.....#.#...#.#\n\
        #.###.#####.#.#\n\
        #.#.#.......#.#\n\
        #.#.#####.###.#\n\
        #...........#.#\n\
        ###.#.#####.#.#\n\
        #...#.....#.#.#\n\
        #.#.#.###.#.#.#\n\
        #.....#...#.#.#\n\
        #.###.#.#.#.#.#\n\
        #S..#.....#...#\n\
        ###############\
    ";

    const EXAMPLE2: &str = "\
        #################\n\
        #...#...#...#..E#\n\
        #.#.#.#.#.#.#.#.#\n\
        #.#.#.#...#...#.#\n\
        #.#.#.#.###.#.#.#\n\
        #...#.#.#.....#.#\n\
        #.#.#.#.#.#####.#\n\
        #.#...#.#.#.....#\n\
        #.#.#####.#.###.#\n\
        #.#.#.......#...#\n\
        #.#.###.#####.###\n\
        #.#.#...#.....#.#\n\
        #.#.#.#####.###.#\n\
        #.#.#.........#.#\n\
        #.#.#.#########.#\n\
        #S#.............#\n\
        #################\
    ";

    #[test]
    fn test_parse() {
        let maze = parse(EXAMPLE1).unwrap();
        assert_eq!(maze.start, Position::new(13, 1));
        assert_eq!(maze.end, Position::new(1, 13));
        assert!(matches!(parse("#.#\n#S#"), Err(ParseError::Missing('E'))));
    }

    #[test_case("#####\n#S.E#\n#####" => Some(2); "straight")]
    #[test_case("###\n#E#\n#S#\n###" => Some(1001); "one turn")]
    #[test_case("####\n#.E#\n#S##\n####" => Some(2002); "two turns")]
    #[test_case("#####\n#S#E#\n#####" => None; "walled off")]
    fn test_lowest_score(input: &str) -> Option<u64> {
        let maze = parse(input).unwrap();
        part_1(&maze)
    }

    #[test_case(EXAMPLE1 => Some(7036))]
    #[test_case(EXAMPLE2 => Some(11048))]
    fn test_part_1(input: &str) -> Option<u64> {
        crate::tests::init_tracing();
        let maze = parse(input).unwrap();
        part_1(&maze)
    }

    #[test_case(EXAMPLE1 => Some(45))]
    #[test_case(EXAMPLE2 => Some(64))]
    fn test_part_2(input: &str) -> Option<usize> {
        let maze = parse(input).unwrap();
        part_2(&maze)
    }
}
