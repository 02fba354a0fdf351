use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::grid::{Grid, GridError};
use crate::position::Position;

#[derive(Debug, Clone)]
struct City {
    width: usize,
    height: usize,
    antennas: HashMap<u8, Vec<Position>>,
}

impl City {
    fn contains(&self, pos: Position) -> bool {
        (0..self.height as i64).contains(&pos.row) && (0..self.width as i64).contains(&pos.col)
    }

    fn pairs(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.antennas.values().flat_map(|positions| {
            positions
                .iter()
                .copied()
                .permutations(2)
                .map(|pair| (pair[0], pair[1]))
        })
    }
}

#[aoc_generator(day8)]
fn parse(input: &str) -> Result<City, GridError> {
    let grid = Grid::parse_bytes(input)?;
    let mut antennas = HashMap::<u8, Vec<Position>>::new();
    for (pos, &freq) in grid.iter() {
        if freq.is_ascii_alphanumeric() {
            antennas.entry(freq).or_default().push(pos);
        }
    }
    Ok(City {
        width: grid.width(),
        height: grid.height(),
        antennas,
    })
}

#[aoc(day8, part1)]
fn part_1(city: &City) -> usize {
    city.pairs()
        .map(|(a, b)| b + (b - a))
        .filter(|&pos| city.contains(pos))
        .collect::<HashSet<_>>()
        .len()
}

#[aoc(day8, part2)]
fn part_2(city: &City) -> usize {
    let mut antinodes = HashSet::new();
    for (a, b) in city.pairs() {
        let step = b - a;
        let mut pos = b;
        while city.contains(pos) {
            antinodes.insert(pos);
            pos += step;
        }
    }
    antinodes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
        ............\n\
        ........0...\n\
        .....0......\n\
        .......0....\n\
        ....0.......\n\
        ......A.....\n\
        ............\n\
        ............\n\
        ........A...\n\
        .........A..\n\
        ............\n\
        ............\
    ";

    const EXAMPLE_T: &str = "\
        T.........\n\
        ...T......\n\
        .T........\n\
        ..........\n\
        ..........\n\
        ..........\n\
        ..........\n\
        ..........\n\
        ..........\n\
        ..........\
    ";

    #[test]
    fn test_parse() {
        let city = parse(EXAMPLE).unwrap();
        assert_eq!(city.antennas[&b'0'].len(), 4);
        assert_eq!(city.antennas[&b'A'].len(), 3);
    }

    #[test]
    fn test_part_1() {
        let city = parse(EXAMPLE).unwrap();
        assert_eq!(part_1(&city), 14);
    }

    #[test]
    fn test_part_2() {
        let city = parse(EXAMPLE).unwrap();
        assert_eq!(part_2(&city), 34);
    }

    #[test]
    fn test_part_2_harmonics() {
        let city = parse(EXAMPLE_T).unwrap();
        assert_eq!(part_2(&city), 9);
    }
}
