use std::num::ParseIntError;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error)]
enum ParseError {
    #[error("Syntax error")]
    SyntaxError,
    #[error("Program values must satisfy 0 <= n < 8, found {0}")]
    InvalidValue(u8),
    #[error(transparent)]
    InvalidNumber(#[from] ParseIntError),
}

#[derive(Debug, Error, PartialEq, Eq)]
enum MachineError {
    #[error("Reserved combo operand 7 at {0}")]
    ReservedOperand(usize),
    #[error("Program still running after {max} steps, at {0}", max = MAX_STEPS)]
    StepLimit(usize),
    #[error("No value of register A makes the program output itself")]
    NoQuine,
}

type Value = u64;

const MAX_STEPS: usize = 1 << 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum OpCode {
    /// A = A >> combo
    Adv = 0,
    /// B = B ^ literal
    Bxl = 1,
    /// B = combo % 8
    Bst = 2,
    /// Jump to literal when A != 0
    Jnz = 3,
    /// B = B ^ C
    Bxc = 4,
    /// Output combo % 8
    Out = 5,
    /// B = A >> combo
    Bdv = 6,
    /// C = A >> combo
    Cdv = 7,
}

impl From<u8> for OpCode {
    fn from(value: u8) -> Self {
        match value & 7 {
            0 => Self::Adv,
            1 => Self::Bxl,
            2 => Self::Bst,
            3 => Self::Jnz,
            4 => Self::Bxc,
            5 => Self::Out,
            6 => Self::Bdv,
            _ => Self::Cdv,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Computer {
    registers: [Value; 3],
    program: Vec<u8>,
}

impl FromStr for Computer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let mut registers = [0; 3];
        for (register, name) in registers.iter_mut().zip(["A", "B", "C"]) {
            let line = lines.next().ok_or(ParseError::SyntaxError)?;
            *register = line
                .strip_prefix("Register ")
                .and_then(|rest| rest.strip_prefix(name))
                .and_then(|rest| rest.strip_prefix(": "))
                .ok_or(ParseError::SyntaxError)?
                .parse()?;
        }
        let program = lines
            .find(|line| !line.is_empty())
            .and_then(|line| line.strip_prefix("Program: "))
            .ok_or(ParseError::SyntaxError)?
            .split(',')
            .map(|n| match n.parse::<u8>()? {
                v @ 0..8 => Ok(v),
                v => Err(ParseError::InvalidValue(v)),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { registers, program })
    }
}

impl Computer {
    /// Runs the program from the top with register A replaced.
    fn run(&self, mut a: Value) -> Result<Vec<u8>, MachineError> {
        let [_, mut b, mut c] = self.registers;
        let mut ip = 0;
        let mut output = Vec::new();
        let mut steps = 0;
        while let (Some(&op), Some(&operand)) = (self.program.get(ip), self.program.get(ip + 1)) {
            if steps == MAX_STEPS {
                return Err(MachineError::StepLimit(ip));
            }
            steps += 1;
            let literal = Value::from(operand);
            let combo = match operand {
                0..=3 => Some(literal),
                4 => Some(a),
                5 => Some(b),
                6 => Some(c),
                _ => None,
            }
            .ok_or(MachineError::ReservedOperand(ip));
            ip += 2;
            match OpCode::from(op) {
                OpCode::Adv => a = divide(a, combo?),
                OpCode::Bxl => b ^= literal,
                OpCode::Bst => b = combo? % 8,
                OpCode::Jnz => {
                    if a != 0 {
                        ip = usize::from(operand);
                    }
                }
                OpCode::Bxc => b ^= c,
                OpCode::Out => output.push((combo? % 8) as u8),
                OpCode::Bdv => b = divide(a, combo?),
                OpCode::Cdv => c = divide(a, combo?),
            }
        }
        Ok(output)
    }

    /// Every loop of a quine-style program consumes the low three bits of A,
    /// so the last output depends only on the top bits. Build A from the end
    /// of the program, three bits at a time, keeping the smallest match.
    /// Candidates that never halt are skipped.
    fn find_quine(&self) -> Result<Value, MachineError> {
        fn search(
            computer: &Computer,
            prefix: Value,
            index: usize,
        ) -> Result<Option<Value>, MachineError> {
            for bits in 0..8 {
                let a = (prefix << 3) | bits;
                match computer.run(a) {
                    Ok(output) if output == computer.program[index..] => {}
                    Ok(_) | Err(MachineError::StepLimit(_)) => continue,
                    Err(err) => return Err(err),
                }
                tracing::trace!(a, index, "matched suffix");
                if index == 0 {
                    return Ok(Some(a));
                }
                if let Some(found) = search(computer, a, index - 1)? {
                    return Ok(Some(found));
                }
            }
            Ok(None)
        }
        match self.program.len() {
            0 => Err(MachineError::NoQuine),
            n => search(self, 0, n - 1)?.ok_or(MachineError::NoQuine),
        }
    }
}

/// `numerator / 2^exponent`, saturating to zero for huge exponents.
fn divide(numerator: Value, exponent: Value) -> Value {
    u32::try_from(exponent)
        .ok()
        .and_then(|exp| numerator.checked_shr(exp))
        .unwrap_or(0)
}

#[aoc_generator(day17)]
fn parse(input: &str) -> Result<Computer, ParseError> {
    input.parse()
}

#[aoc(day17, part1)]
fn part_1(computer: &Computer) -> Result<String, MachineError> {
    let output = computer.run(computer.registers[0])?;
    Ok(output.iter().join(","))
}

#[aoc(day17, part2)]
fn part_2(computer: &Computer) -> Result<Value, MachineError> {
    computer.find_quine()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const EXAMPLE1: &str = "\
        Register A: 729\n\
        Register B: 0\n\
        Register C: 0\n\
        \n\
        Program: 0,1,5,4,3,0\
    ";

    const EXAMPLE2: &str = "\
        Register A: 2024\n\
        Register B: 0\n\
        Register C: 0\n\
        \n\
        Program: 0,3,5,4,3,0\
    ";

    #[test]
    fn test_parse() {
        let computer = parse(EXAMPLE1).unwrap();
        assert_eq!(computer.registers, [729, 0, 0]);
        assert_eq!(computer.program, [0, 1, 5, 4, 3, 0]);
    }

    #[test]
    fn test_parse_invalid_value() {
        let input = "Register A: 1\nRegister B: 2\nRegister C: 3\n\nProgram: 0,8,3";
        assert!(matches!(parse(input), Err(ParseError::InvalidValue(8))));
    }

    #[test_case(10, &[5, 0, 5, 1, 5, 4] => vec![0, 1, 2])]
    #[test_case(2024, &[0, 1, 5, 4, 3, 0] => vec![4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0])]
    #[test_case(729, &[0, 1, 5, 4, 3, 0] => vec![4, 6, 3, 5, 6, 3, 5, 2, 1, 0])]
    fn test_run(a: Value, program: &[u8]) -> Vec<u8> {
        let computer = Computer {
            registers: [a, 0, 0],
            program: program.to_vec(),
        };
        computer.run(a).unwrap()
    }

    #[test]
    fn test_run_reserved_operand() {
        let computer = Computer {
            registers: [0, 0, 0],
            program: vec![5, 7],
        };
        assert_eq!(computer.run(0), Err(MachineError::ReservedOperand(0)));
    }

    #[test]
    fn test_part_1() {
        let computer = parse(EXAMPLE1).unwrap();
        assert_eq!(part_1(&computer).unwrap(), "4,6,3,5,6,3,5,2,1,0");
    }

    #[test]
    fn test_part_2() {
        crate::tests::init_tracing();
        let computer = parse(EXAMPLE2).unwrap();
        assert_eq!(part_2(&computer).unwrap(), 117_440);
        assert_eq!(computer.run(117_440).unwrap(), computer.program);
    }

    #[test]
    fn test_endless_loop() {
        let input = "Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 3,0";
        let computer = parse(input).unwrap();
        assert_eq!(computer.run(0), Ok(vec![]));
        assert_eq!(computer.run(1), Err(MachineError::StepLimit(0)));
        assert_eq!(computer.find_quine(), Err(MachineError::NoQuine));
    }
}
