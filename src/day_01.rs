use std::collections::HashMap;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Syntax error")]
    SyntaxError,
    #[error(transparent)]
    InvalidNumber(#[from] ParseIntError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Lists {
    left: Vec<u32>,
    right: Vec<u32>,
}

#[aoc_generator(day1)]
fn parse(input: &str) -> Result<Lists, ParseError> {
    let mut left = Vec::new();
    let mut right = Vec::new();
    for line in input.lines() {
        let mut parts = line.split_ascii_whitespace();
        let (Some(l), Some(r), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(ParseError::SyntaxError);
        };
        left.push(l.parse()?);
        right.push(r.parse()?);
    }
    Ok(Lists { left, right })
}

#[aoc(day1, part1)]
fn part_1(lists: &Lists) -> u32 {
    let mut left = lists.left.clone();
    let mut right = lists.right.clone();
    left.sort_unstable();
    right.sort_unstable();
    left.iter().zip(&right).map(|(l, r)| l.abs_diff(*r)).sum()
}

#[aoc(day1, part2)]
fn part_2(lists: &Lists) -> u64 {
    let mut counts = HashMap::<u32, u64>::new();
    for &r in &lists.right {
        *counts.entry(r).or_default() += 1;
    }
    lists
        .left
        .iter()
        .map(|l| u64::from(*l) * counts.get(l).copied().unwrap_or(0))
        .sum()
}
