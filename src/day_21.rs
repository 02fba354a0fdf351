//! Typing door codes through a chain of robots, each operating the
//! directional keypad of the next one.

use std::collections::HashMap;
use std::num::ParseIntError;

use thiserror::Error;

use crate::position::Position;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Invalid key {0:?} in door code")]
    InvalidKey(char),
    #[error("Door code must end with 'A'")]
    MissingActivate,
    #[error(transparent)]
    InvalidNumber(#[from] ParseIntError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DoorCode {
    keys: Vec<u8>,
    numeric: u64,
}

#[aoc_generator(day21)]
fn parse(input: &str) -> Result<Vec<DoorCode>, ParseError> {
    input
        .lines()
        .map(|line| {
            if let Some(bad) = line.bytes().find(|b| !matches!(b, b'0'..=b'9' | b'A')) {
                return Err(ParseError::InvalidKey(bad as char));
            }
            let digits = line.strip_suffix('A').ok_or(ParseError::MissingActivate)?;
            Ok(DoorCode {
                keys: line.bytes().collect(),
                numeric: digits.parse()?,
            })
        })
        .collect()
}

struct Keypad {
    rows: &'static [&'static [u8]],
    gap: Position,
}

const NUMERIC: Keypad = Keypad {
    rows: &[b"789", b"456", b"123", b" 0A"],
    gap: Position::new(3, 0),
};

const DIRECTIONAL: Keypad = Keypad {
    rows: &[b" ^A", b"<v>"],
    gap: Position::new(0, 0),
};

impl Keypad {
    fn position(&self, key: u8) -> Position {
        self.rows
            .iter()
            .zip(0..)
            .find_map(|(row, r)| {
                let c = row.iter().position(|&k| k == key)?;
                Some(Position::new(r, c as i64))
            })
            .unwrap_or(self.gap)
    }

    /// Candidate button sequences (ending in `A`) that move an arm from `from`
    /// to `to` and press. Only straight L-shaped routes can be optimal; zigzags
    /// only add presses further up the chain.
    fn routes(&self, from: u8, to: u8) -> Vec<Vec<u8>> {
        let a = self.position(from);
        let b = self.position(to);
        let delta = b - a;
        let vertical = if delta.row > 0 { b'v' } else { b'^' };
        let horizontal = if delta.col > 0 { b'>' } else { b'<' };
        let v = std::iter::repeat_n(vertical, delta.row.unsigned_abs() as usize);
        let h = std::iter::repeat_n(horizontal, delta.col.unsigned_abs() as usize);

        let mut routes: Vec<Vec<u8>> = Vec::with_capacity(2);
        if Position::new(a.row, b.col) != self.gap {
            routes.push(h.clone().chain(v.clone()).chain([b'A']).collect());
        }
        if Position::new(b.row, a.col) != self.gap {
            let route: Vec<u8> = v.chain(h).chain([b'A']).collect();
            if !routes.contains(&route) {
                routes.push(route);
            }
        }
        routes
    }
}

/// Memoized cost, in human button presses, of typing directional-keypad
/// sequences through layers of robots.
#[derive(Debug, Default)]
struct Chain {
    memo: HashMap<(u8, u8, usize), u64>,
}

impl Chain {
    /// Presses needed for the robot `depth` layers away from the human to
    /// type `keys`, starting with its arm on `A`.
    fn sequence_cost(&mut self, keys: &[u8], depth: usize) -> u64 {
        if depth == 0 {
            return keys.len() as u64;
        }
        let mut prev = b'A';
        let mut total = 0;
        for &key in keys {
            total += self.move_cost(prev, key, depth);
            prev = key;
        }
        total
    }

    fn move_cost(&mut self, from: u8, to: u8, depth: usize) -> u64 {
        if let Some(&cost) = self.memo.get(&(from, to, depth)) {
            return cost;
        }
        let cost = DIRECTIONAL
            .routes(from, to)
            .iter()
            .map(|route| self.sequence_cost(route, depth - 1))
            .min()
            .unwrap_or(0);
        self.memo.insert((from, to, depth), cost);
        cost
    }
}

/// Shortest number of presses on the outermost directional keypad when
/// `robots` directional-keypad robots sit between it and the door robot.
fn presses(code: &DoorCode, robots: usize) -> u64 {
    let mut chain = Chain::default();
    let mut prev = b'A';
    let mut total = 0;
    for &key in &code.keys {
        total += NUMERIC
            .routes(prev, key)
            .iter()
            .map(|route| chain.sequence_cost(route, robots))
            .min()
            .unwrap_or(0);
        prev = key;
    }
    total
}

fn complexity(codes: &[DoorCode], robots: usize) -> u64 {
    codes
        .iter()
        .map(|code| {
            let len = presses(code, robots);
            tracing::debug!(code = %String::from_utf8_lossy(&code.keys), len, "typed");
            len * code.numeric
        })
        .sum()
}

#[aoc(day21, part1)]
fn part_1(codes: &[DoorCode]) -> u64 {
    complexity(codes, 2)
}

#[aoc(day21, part2)]
fn part_2(codes: &[DoorCode]) -> u64 {
    complexity(codes, 25)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const EXAMPLE: &str = "\
        029A\n\
        980A\n\
        179A\n\
        456A\n\
        379A\
    ";

    #[test]
    fn test_parse() {
        let codes = parse(EXAMPLE).unwrap();
        assert_eq!(codes[0].keys, b"029A");
        assert_eq!(codes[0].numeric, 29);
        assert!(matches!(parse("12B"), Err(ParseError::InvalidKey('B'))));
        assert!(matches!(parse("123"), Err(ParseError::MissingActivate)));
    }

    #[test]
    fn test_routes_avoid_gap() {
        assert_eq!(NUMERIC.routes(b'A', b'1'), [b"^<<A".to_vec()]);
        assert_eq!(NUMERIC.routes(b'7', b'0'), [b">vvvA".to_vec()]);
        assert_eq!(DIRECTIONAL.routes(b'<', b'^'), [b">^A".to_vec()]);
        assert_eq!(DIRECTIONAL.routes(b'A', b'A'), [b"A".to_vec()]);
        assert_eq!(NUMERIC.routes(b'2', b'9').len(), 2);
    }

    #[test_case(0 => 12; "typed directly on the door")]
    #[test_case(1 => 28)]
    #[test_case(2 => 68)]
    fn test_presses_029a(robots: usize) -> u64 {
        let codes = parse("029A").unwrap();
        presses(&codes[0], robots)
    }

    #[test_case("980A" => 60)]
    #[test_case("179A" => 68)]
    #[test_case("456A" => 64)]
    #[test_case("379A" => 64)]
    fn test_presses(code: &str) -> u64 {
        let codes = parse(code).unwrap();
        presses(&codes[0], 2)
    }

    #[test]
    fn test_part_1() {
        let codes = parse(EXAMPLE).unwrap();
        assert_eq!(part_1(&codes), 126_384);
    }

    #[test]
    fn test_part_2() {
        crate::tests::init_tracing();
        let codes = parse(EXAMPLE).unwrap();
        assert_eq!(part_2(&codes), 154_115_708_116_294);
    }
}
