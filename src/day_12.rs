use crate::grid::{Grid, GridError};
use crate::position::{Direction, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Region {
    plant: u8,
    area: usize,
    perimeter: usize,
    sides: usize,
}

#[aoc_generator(day12)]
fn parse(input: &str) -> Result<Vec<Region>, GridError> {
    let garden = Grid::parse_bytes(input)?;
    let regions = find_regions(&garden);
    tracing::debug!(regions = regions.len(), "mapped garden");
    Ok(regions)
}

fn find_regions(garden: &Grid<u8>) -> Vec<Region> {
    let mut assigned = garden.map(|_| false);
    let mut regions = Vec::new();
    let mut pending = Vec::new();
    for start in garden.positions() {
        if assigned[start] {
            continue;
        }
        let plant = garden[start];
        let same = |pos: Position| garden.get(pos) == Some(&plant);
        let mut region = Region {
            plant,
            area: 0,
            perimeter: 0,
            sides: 0,
        };
        assigned[start] = true;
        pending.push(start);
        while let Some(pos) = pending.pop() {
            region.area += 1;
            for dir in Direction::all() {
                let next = pos + dir;
                if !same(next) {
                    region.perimeter += 1;
                } else if !assigned[next] {
                    assigned[next] = true;
                    pending.push(next);
                }
                // Every side of a polygon ends in exactly one corner, so
                // count corners instead: convex when both edges are open,
                // concave when both are closed but the diagonal is open.
                let side = pos + dir.turn_right();
                let diagonal = next + dir.turn_right();
                let convex = !same(next) && !same(side);
                let concave = same(next) && same(side) && !same(diagonal);
                if convex || concave {
                    region.sides += 1;
                }
            }
        }
        regions.push(region);
    }
    regions
}

#[aoc(day12, part1)]
fn part_1(regions: &[Region]) -> usize {
    regions.iter().map(|r| r.area * r.perimeter).sum()
}

#[aoc(day12, part2)]
fn part_2(regions: &[Region]) -> usize {
    regions.iter().map(|r| r.area * r.sides).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const EXAMPLE1: &str = "\
        AAAA\n\
        BBCD\n\
        BBCC\n\
        EEEC\
    ";

    const EXAMPLE2: &str = "\
        OOOOO\n\
        OXOXO\n\
        OOOOO\n\
        OXOXO\n\
        OOOOO\
    ";

    const EXAMPLE3: &str = "\
        RRRRIICCFF\n\
        RRRRIICCCF\n\
        VVRRRCCFFF\n\
        VVRCCCJFFF\n\
        VVVVCJJCFE\n\
        VVIVCCJJEE\n\
        VVIIICJJEE\n\
        MIIIIIJJEE\n\
        MIIISIJEEE\n\
        MMMISSJEEE\
    ";

    const EXAMPLE_E: &str = "\
        EEEEE\n\
        EXXXX\n\
        EEEEE\n\
        EXXXX\n\
        EEEEE\
    ";

    const EXAMPLE_AB: &str = "\
        AAAAAA\n\
        AAABBA\n\
        AAABBA\n\
        ABBAAA\n\
        ABBAAA\n\
        AAAAAA\
    ";

    #[test]
    fn test_regions() {
        let regions = parse(EXAMPLE1).unwrap();
        let c = regions.iter().find(|r| r.plant == b'C').unwrap();
        assert_eq!(
            *c,
            Region {
                plant: b'C',
                area: 4,
                perimeter: 10,
                sides: 8
            }
        );
        assert_eq!(regions.len(), 5);
    }

    #[test]
    fn test_enclosed_regions() {
        let regions = parse(EXAMPLE2).unwrap();
        assert_eq!(regions.len(), 5);
        let o = regions.iter().find(|r| r.plant == b'O').unwrap();
        assert_eq!((o.area, o.perimeter, o.sides), (21, 36, 20));
    }

    #[test_case(EXAMPLE1 => 140)]
    #[test_case(EXAMPLE2 => 772)]
    #[test_case(EXAMPLE3 => 1930)]
    fn test_part_1(input: &str) -> usize {
        let regions = parse(input).unwrap();
        part_1(&regions)
    }

    #[test_case(EXAMPLE1 => 80)]
    #[test_case(EXAMPLE2 => 436)]
    #[test_case(EXAMPLE_E => 236)]
    #[test_case(EXAMPLE_AB => 368)]
    #[test_case(EXAMPLE3 => 1206)]
    fn test_part_2(input: &str) -> usize {
        let regions = parse(input).unwrap();
        part_2(&regions)
    }
}
