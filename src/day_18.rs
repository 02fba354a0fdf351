use std::collections::VecDeque;
use std::num::ParseIntError;

use thiserror::Error;

use crate::grid::Grid;
use crate::position::Position;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Syntax error")]
    SyntaxError,
    #[error(transparent)]
    InvalidNumber(#[from] ParseIntError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MemorySpace {
    size: usize,
    fallen: usize,
}

const MEMORY_SPACE: MemorySpace = MemorySpace {
    size: 71,
    fallen: 1024,
};

#[aoc_generator(day18)]
fn parse(input: &str) -> Result<Vec<Position>, ParseError> {
    input
        .lines()
        .map(|line| {
            let (x, y) = line.split_once(',').ok_or(ParseError::SyntaxError)?;
            Ok(Position::new(y.parse()?, x.parse()?))
        })
        .collect()
}

/// Breadth-first search from the top-left to the bottom-right corner.
fn shortest_path(size: usize, corrupted: &[Position]) -> Option<usize> {
    let mut blocked = Grid::new(size, size, false);
    for &pos in corrupted {
        if let Some(cell) = blocked.get_mut(pos) {
            *cell = true;
        }
    }
    let start = Position::new(0, 0);
    let exit = Position::new(size as i64 - 1, size as i64 - 1);
    if blocked.get(start) != Some(&false) {
        return None;
    }
    blocked[start] = true;
    let mut pending = VecDeque::from([(start, 0)]);
    while let Some((pos, dist)) = pending.pop_front() {
        if pos == exit {
            return Some(dist);
        }
        for next in pos.neighbors() {
            if blocked.get(next) == Some(&false) {
                blocked[next] = true;
                pending.push_back((next, dist + 1));
            }
        }
    }
    None
}

/// Index of the first byte after which the exit can no longer be reached.
fn first_blocking(size: usize, bytes: &[Position]) -> Option<usize> {
    let reachable = |count: usize| shortest_path(size, &bytes[..count]).is_some();
    if reachable(bytes.len()) {
        return None;
    }
    // Reachable after `lo` bytes, blocked after `hi`.
    let (mut lo, mut hi) = (0, bytes.len());
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if reachable(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
        tracing::trace!(lo, hi, "narrowed");
    }
    Some(hi - 1)
}

#[aoc(day18, part1)]
fn part_1(bytes: &[Position]) -> Option<usize> {
    let MemorySpace { size, fallen } = MEMORY_SPACE;
    shortest_path(size, &bytes[..fallen.min(bytes.len())])
}

#[aoc(day18, part2)]
fn part_2(bytes: &[Position]) -> Option<String> {
    let ix = first_blocking(MEMORY_SPACE.size, bytes)?;
    let Position { row, col } = bytes[ix];
    Some(format!("{col},{row}"))
}
