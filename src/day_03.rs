use std::sync::LazyLock;

use regex::Regex;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").expect("valid pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

fn instructions(memory: &str) -> impl Iterator<Item = Instruction> + '_ {
    INSTRUCTION.captures_iter(memory).filter_map(|caps| {
        Some(match &caps[0] {
            "do()" => Instruction::Do,
            "don't()" => Instruction::Dont,
            _ => Instruction::Mul(caps[1].parse().ok()?, caps[2].parse().ok()?),
        })
    })
}

#[aoc(day3, part1)]
fn part_1(memory: &str) -> u64 {
    instructions(memory)
        .map(|instr| match instr {
            Instruction::Mul(a, b) => a * b,
            _ => 0,
        })
        .sum()
}

#[aoc(day3, part2)]
fn part_2(memory: &str) -> u64 {
    let mut enabled = true;
    let mut total = 0;
    for instr in instructions(memory) {
        match instr {
            Instruction::Do => enabled = true,
            Instruction::Dont => enabled = false,
            Instruction::Mul(a, b) if enabled => total += a * b,
            Instruction::Mul(..) => {}
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const EXAMPLE1: &str =
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    const EXAMPLE2: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    #[test]
    fn test_instructions() {
        let result = instructions(EXAMPLE2).collect::<Vec<_>>();
        assert_eq!(
            result,
            [
                Instruction::Mul(2, 4),
                Instruction::Dont,
                Instruction::Mul(5, 5),
                Instruction::Mul(11, 8),
                Instruction::Do,
                Instruction::Mul(8, 5),
            ]
        );
    }

    #[test_case("mul(1234,5)" => 0; "too many digits")]
    #[test_case("mul( 2,4)" => 0; "whitespace")]
    #[test_case("mul(123,4)" => 492)]
    fn test_operand_limits(memory: &str) -> u64 {
        part_1(memory)
    }

    #[test]
    fn test_part_1() {
        assert_eq!(part_1(EXAMPLE1), 161);
    }

    #[test]
    fn test_part_2() {
        assert_eq!(part_2(EXAMPLE2), 48);
    }
}
