use std::num::ParseIntError;

const PRUNE: u64 = 16_777_216;
const ROUNDS: usize = 2000;

#[aoc_generator(day22)]
fn parse(input: &str) -> Result<Vec<u64>, ParseIntError> {
    input.lines().map(str::parse).collect()
}

const fn next_secret(mut secret: u64) -> u64 {
    secret = (secret ^ (secret * 64)) % PRUNE;
    secret = (secret ^ (secret / 32)) % PRUNE;
    (secret ^ (secret * 2048)) % PRUNE
}

fn secrets(seed: u64) -> impl Iterator<Item = u64> + Clone {
    std::iter::successors(Some(seed), |&s| Some(next_secret(s)))
}

/// Four price changes in -9..=9, packed base 19.
const WINDOWS: usize = 19 * 19 * 19 * 19;

fn push_change(window: usize, change: i64) -> usize {
    // Drop the oldest change, shift in the newest.
    (window * 19 + (change + 9) as usize) % WINDOWS
}

#[aoc(day22, part1)]
fn part_1(seeds: &[u64]) -> u64 {
    seeds
        .iter()
        .filter_map(|&seed| secrets(seed).nth(ROUNDS))
        .sum()
}

fn most_bananas(seeds: &[u64], rounds: usize) -> u64 {
    let mut totals = vec![0_u64; WINDOWS];
    let mut seen_by = vec![usize::MAX; WINDOWS];
    for (buyer, &seed) in seeds.iter().enumerate() {
        let prices = secrets(seed).take(rounds + 1).map(|s| (s % 10) as i64);
        let mut window = 0;
        for (ix, (prev, price)) in prices.clone().zip(prices.skip(1)).enumerate() {
            window = push_change(window, price - prev);
            // The monkey sells at the first occurrence only.
            if ix >= 3 && seen_by[window] != buyer {
                seen_by[window] = buyer;
                totals[window] += price as u64;
            }
        }
    }
    let best = totals.iter().copied().max().unwrap_or(0);
    tracing::debug!(buyers = seeds.len(), best, "scanned price changes");
    best
}

#[aoc(day22, part2)]
fn part_2(seeds: &[u64]) -> u64 {
    most_bananas(seeds, ROUNDS)
}
