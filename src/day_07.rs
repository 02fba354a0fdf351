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

#[derive(Debug, Clone, PartialEq, Eq)]
struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl FromStr for Equation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, operands) = s.split_once(": ").ok_or(ParseError::SyntaxError)?;
        let operands = operands
            .split(' ')
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            target: target.parse()?,
            operands,
        })
    }
}

impl Equation {
    /// Operators are applied left to right, so undo them from the last
    /// operand backwards: every step must leave an exact remainder.
    fn solvable(&self, concatenation: bool) -> bool {
        fn undo(target: u64, operands: &[u64], concatenation: bool) -> bool {
            let Some((&last, rest)) = operands.split_last() else {
                return false;
            };
            if rest.is_empty() {
                return target == last;
            }
            if target >= last && undo(target - last, rest, concatenation) {
                return true;
            }
            if last != 0 && target % last == 0 && undo(target / last, rest, concatenation) {
                return true;
            }
            if concatenation
                && let Some(shift) = 10_u64.checked_pow(digits(last))
                && target % shift == last
            {
                return undo(target / shift, rest, concatenation);
            }
            false
        }
        undo(self.target, &self.operands, concatenation)
    }
}

fn digits(n: u64) -> u32 {
    n.checked_ilog10().unwrap_or(0) + 1
}

#[aoc_generator(day7)]
fn parse(input: &str) -> Result<Vec<Equation>, ParseError> {
    input.lines().map(str::parse).collect()
}

#[aoc(day7, part1)]
fn part_1(equations: &[Equation]) -> u64 {
    equations
        .iter()
        .filter(|eq| eq.solvable(false))
        .map(|eq| eq.target)
        .sum()
}

#[aoc(day7, part2)]
fn part_2(equations: &[Equation]) -> u64 {
    equations
        .iter()
        .filter(|eq| eq.solvable(true))
        .map(|eq| eq.target)
        .sum()
}
