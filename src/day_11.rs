use std::collections::HashMap;
use std::num::ParseIntError;

#[aoc_generator(day11)]
fn parse(input: &str) -> Result<Vec<u64>, ParseIntError> {
    input.split_ascii_whitespace().map(str::parse).collect()
}

enum Blink {
    One(u64),
    Two(u64, u64),
}

fn blink(stone: u64) -> Blink {
    if stone == 0 {
        return Blink::One(1);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10_u64.pow(digits / 2);
        Blink::Two(stone / half, stone % half)
    } else {
        Blink::One(stone * 2024)
    }
}

/// Stone order never matters, so track how many stones carry each number.
fn count_after(stones: &[u64], blinks: usize) -> u64 {
    let mut counts = HashMap::<u64, u64>::new();
    for &stone in stones {
        *counts.entry(stone).or_default() += 1;
    }
    for step in 0..blinks {
        let mut next = HashMap::with_capacity(counts.len());
        for (stone, n) in counts {
            match blink(stone) {
                Blink::One(a) => *next.entry(a).or_default() += n,
                Blink::Two(a, b) => {
                    *next.entry(a).or_default() += n;
                    *next.entry(b).or_default() += n;
                }
            }
        }
        counts = next;
        tracing::trace!(step, distinct = counts.len(), "blinked");
    }
    counts.values().sum()
}

#[aoc(day11, part1)]
fn part_1(stones: &[u64]) -> u64 {
    count_after(stones, 25)
}

#[aoc(day11, part2)]
fn part_2(stones: &[u64]) -> u64 {
    count_after(stones, 75)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_blink() {
        let mut stones = parse("0 1 10 99 999").unwrap();
        stones = stones
            .into_iter()
            .flat_map(|s| match blink(s) {
                Blink::One(a) => vec![a],
                Blink::Two(a, b) => vec![a, b],
            })
            .collect();
        assert_eq!(stones, [1, 2024, 1, 0, 9, 9, 2_021_976]);
    }

    #[test]
    fn test_blink_twenty_digits() {
        match blink(10_000_000_000_000_000_000) {
            Blink::Two(a, b) => assert_eq!((a, b), (1_000_000_000, 0)),
            Blink::One(_) => panic!("twenty digits should split"),
        }
    }

    #[test_case("125 17", 1 => 3)]
    #[test_case("125 17", 6 => 22)]
    #[test_case("125 17", 25 => 55312)]
    fn test_count_after(input: &str, blinks: usize) -> u64 {
        crate::tests::init_tracing();
        let stones = parse(input).unwrap();
        count_after(&stones, blinks)
    }
}
