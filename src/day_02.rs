use std::num::ParseIntError;

use itertools::Itertools;

#[aoc_generator(day2)]
fn parse(input: &str) -> Result<Vec<Vec<i32>>, ParseIntError> {
    input
        .lines()
        .map(|line| line.split_ascii_whitespace().map(str::parse).collect())
        .collect()
}

fn is_safe(levels: impl Iterator<Item = i32>) -> bool {
    let mut increasing = None;
    for (a, b) in levels.tuple_windows() {
        let step = b - a;
        if !(1..=3).contains(&step.abs()) {
            return false;
        }
        match increasing {
            None => increasing = Some(step > 0),
            Some(inc) if inc != (step > 0) => return false,
            Some(_) => {}
        }
    }
    true
}

fn is_safe_dampened(levels: &[i32]) -> bool {
    is_safe(levels.iter().copied())
        || (0..levels.len()).any(|skip| {
            is_safe(
                levels
                    .iter()
                    .enumerate()
                    .filter(|&(ix, _)| ix != skip)
                    .map(|(_, &level)| level),
            )
        })
}

#[aoc(day2, part1)]
fn part_1(reports: &[Vec<i32>]) -> usize {
    reports
        .iter()
        .filter(|levels| is_safe(levels.iter().copied()))
        .count()
}

#[aoc(day2, part2)]
fn part_2(reports: &[Vec<i32>]) -> usize {
    reports
        .iter()
        .filter(|levels| is_safe_dampened(levels))
        .count()
}
