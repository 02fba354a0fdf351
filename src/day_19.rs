use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Syntax error")]
    SyntaxError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Onsen {
    towels: Vec<String>,
    designs: Vec<String>,
}

impl FromStr for Onsen {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (towels, designs) = s.split_once("\n\n").ok_or(ParseError::SyntaxError)?;
        Ok(Self {
            towels: towels
                .split(',')
                .map(str::trim)
                .filter(|towel| !towel.is_empty())
                .map(str::to_owned)
                .collect(),
            designs: designs
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect(),
        })
    }
}

impl Onsen {
    /// Number of ways to lay out `design`: `ways[i]` counts arrangements of
    /// the first `i` stripes.
    fn arrangements(&self, design: &str) -> u64 {
        let mut ways = vec![0_u64; design.len() + 1];
        ways[0] = 1;
        for start in 0..design.len() {
            if ways[start] == 0 {
                continue;
            }
            for towel in &self.towels {
                if design[start..].starts_with(towel.as_str()) {
                    ways[start + towel.len()] += ways[start];
                }
            }
        }
        ways[design.len()]
    }
}

#[aoc_generator(day19)]
fn parse(input: &str) -> Result<Onsen, ParseError> {
    input.parse()
}

#[aoc(day19, part1)]
fn part_1(onsen: &Onsen) -> usize {
    onsen
        .designs
        .iter()
        .filter(|design| onsen.arrangements(design) > 0)
        .count()
}

#[aoc(day19, part2)]
fn part_2(onsen: &Onsen) -> u64 {
    onsen
        .designs
        .iter()
        .map(|design| onsen.arrangements(design))
        .sum()
}
