use thiserror::Error;

use crate::grid::{Grid, GridError};
use crate::position::Position;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Invalid tile: {0:?}")]
    InvalidTile(char),
    #[error("Track has no {0:?} tile")]
    Missing(char),
    #[error("Track ends at {0:?} before reaching the end")]
    DeadEnd(Position),
    #[error(transparent)]
    Grid(#[from] GridError),
}

const MIN_SAVING: usize = 100;

/// The single track from start to end, in order.
#[derive(Debug, Clone)]
struct Track {
    path: Vec<Position>,
}

#[aoc_generator(day20)]
fn parse(input: &str) -> Result<Track, ParseError> {
    let tiles = Grid::parse_with(input, |b| match b {
        b'#' | b'.' | b'S' | b'E' => Ok(b),
        _ => Err(ParseError::InvalidTile(b as char)),
    })?;
    let start = tiles.find(|&b| b == b'S').ok_or(ParseError::Missing('S'))?;
    let end = tiles.find(|&b| b == b'E').ok_or(ParseError::Missing('E'))?;
    let mut path = vec![start];
    let mut prev = None;
    let mut pos = start;
    while pos != end {
        let next = pos
            .neighbors()
            .find(|&n| Some(n) != prev && tiles.get(n).is_some_and(|&b| b != b'#'))
            .ok_or(ParseError::DeadEnd(pos))?;
        prev = Some(pos);
        pos = next;
        path.push(pos);
    }
    tracing::debug!(length = path.len() - 1, "traced track");
    Ok(Track { path })
}

/// Counts pairs of track positions, at most `max_cheat` apart, where
/// cutting through the walls saves at least `min_saving` picoseconds.
fn count_cheats(track: &Track, max_cheat: usize, min_saving: usize) -> usize {
    let path = &track.path;
    let mut count = 0;
    for (from_ix, &from) in path.iter().enumerate() {
        // Jumping fewer than `min_saving` steps ahead can never save enough.
        for (to_ix, &to) in path.iter().enumerate().skip(from_ix + min_saving) {
            let Ok(cheat) = usize::try_from(from.manhattan(to)) else {
                continue;
            };
            if cheat <= max_cheat && to_ix - from_ix >= cheat + min_saving {
                count += 1;
            }
        }
    }
    count
}

#[aoc(day20, part1)]
fn part_1(track: &Track) -> usize {
    count_cheats(track, 2, MIN_SAVING)
}

#[aoc(day20, part2)]
fn part_2(track: &Track) -> usize {
    count_cheats(track, 20, MIN_SAVING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const EXAMPLE: &str = "\
        ###############\n\
        #...#...#.....#\n\
        #.#.#.#.#.###.#\n\
        #S#...#.#.#...#\n\
        #######.#.#.###\n\
        #######.#.#...#\n\
        #######.#.###.#\n\
        ###..E#...#...#\n\
        ###.#######.###\n\
        #...###...#...#\n\
        #.#####.#.###.#\n\
        #.#...#.#.#...#\n\
        #.#.#.#.#.#.###\n\
        #...#...#...###\n\
        ###############\
    ";

    #[test]
    fn test_parse() {
        let track = parse(EXAMPLE).unwrap();
        assert_eq!(track.path.len(), 85);
        assert_eq!(track.path[0], Position::new(3, 1));
        assert_eq!(track.path[84], Position::new(7, 5));
        assert!(matches!(
            parse("#####\n#S.E#\n#####").map(|t| t.path.len()),
            Ok(3)
        ));
        assert!(matches!(
            parse("######\n#S.#E#\n######"),
            Err(ParseError::DeadEnd(_))
        ));
    }

    #[test_case(2, 1 => 44)]
    #[test_case(2, 20 => 5)]
    #[test_case(2, 64 => 1)]
    #[test_case(20, 50 => 285)]
    #[test_case(20, 72 => 29)]
    #[test_case(20, 76 => 3)]
    fn test_count_cheats(max_cheat: usize, min_saving: usize) -> usize {
        let track = parse(EXAMPLE).unwrap();
        count_cheats(&track, max_cheat, min_saving)
    }
}
