use std::cmp::Ordering;
use std::collections::HashSet;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Syntax error")]
    SyntaxError,
    #[error(transparent)]
    InvalidNumber(#[from] ParseIntError),
}

#[derive(Debug, Clone)]
struct PrintQueue {
    /// `(before, after)` pairs.
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl FromStr for PrintQueue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let mut rules = HashSet::new();
        for line in lines.by_ref().take_while(|line| !line.is_empty()) {
            let (before, after) = line.split_once('|').ok_or(ParseError::SyntaxError)?;
            rules.insert((before.parse()?, after.parse()?));
        }
        let updates = lines
            .map(|line| line.split(',').map(str::parse).collect())
            .collect::<Result<_, _>>()?;
        Ok(Self { rules, updates })
    }
}

impl PrintQueue {
    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update.is_sorted_by(|&a, &b| self.compare(a, b) != Ordering::Greater)
    }
}

fn middle(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

#[aoc_generator(day5)]
fn parse(input: &str) -> Result<PrintQueue, ParseError> {
    input.parse()
}

#[aoc(day5, part1)]
fn part_1(queue: &PrintQueue) -> u32 {
    queue
        .updates
        .iter()
        .filter(|update| queue.is_ordered(update))
        .map(|update| middle(update))
        .sum()
}

#[aoc(day5, part2)]
fn part_2(queue: &PrintQueue) -> u32 {
    queue
        .updates
        .iter()
        .filter(|update| !queue.is_ordered(update))
        .map(|update| {
            let mut fixed = update.clone();
            fixed.sort_by(|&a, &b| queue.compare(a, b));
            tracing::trace!(?update, ?fixed, "reordered");
            middle(&fixed)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const EXAMPLE: &str = "\
        47|53\n\
        97|13\n\
        97|61\n\
        97|47\n\
        75|29\n\
        61|13\n\
        75|53\n\
        29|13\n\
        97|29\n\
        53|29\n\
        61|53\n\
        97|53\n\
        61|29\n\
        47|13\n\
        75|47\n\
        97|75\n\
        47|61\n\
        75|61\n\
        47|29\n\
        75|13\n\
        53|13\n\
        \n\
        75,47,61,53,29\n\
        97,61,53,29,13\n\
        75,29,13\n\
        75,97,47,61,53\n\
        61,13,29\n\
        97,13,75,29,47\
    ";

    #[test]
    fn test_parse() {
        let queue = parse(EXAMPLE).unwrap();
        assert_eq!(queue.rules.len(), 21);
        assert_eq!(queue.updates.len(), 6);
        assert_eq!(queue.updates[2], [75, 29, 13]);
    }

    #[test_case(&[75, 47, 61, 53, 29] => true)]
    #[test_case(&[97, 61, 53, 29, 13] => true)]
    #[test_case(&[75, 29, 13] => true)]
    #[test_case(&[75, 97, 47, 61, 53] => false)]
    #[test_case(&[61, 13, 29] => false)]
    #[test_case(&[97, 13, 75, 29, 47] => false)]
    fn test_is_ordered(update: &[u32]) -> bool {
        let queue = parse(EXAMPLE).unwrap();
        queue.is_ordered(update)
    }

    #[test]
    fn test_part_1() {
        let queue = parse(EXAMPLE).unwrap();
        assert_eq!(part_1(&queue), 143);
    }

    #[test]
    fn test_part_2() {
        let queue = parse(EXAMPLE).unwrap();
        assert_eq!(part_2(&queue), 123);
    }
}
