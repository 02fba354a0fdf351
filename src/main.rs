use aoc_runner_derive::aoc_main;

aoc_main! { lib = advent_of_code_2024 }
