// Iterables and Iterators
// https://www.hackerrank.com/challenges/iterables-and-iterators/problem
//
// Probability that a random size-K combination of the N letter positions
// contains at least one 'a'. Computed in closed form from binomial
// coefficients: 1 - C(not_a, K) / C(N, K).

use std::io::{self, BufRead};

use anyhow::{ensure, Context};

/// Exact binomial coefficient; every intermediate division is exact.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

pub fn probability_hits_a(n: usize, a_count: usize, k: usize) -> f64 {
    let not_a = n - a_count;
    if k > not_a {
        // Too few non-'a' positions to fill the combination without one.
        return 1.0;
    }
    1.0 - binomial(not_a as u64, k as u64) as f64 / binomial(n as u64, k as u64) as f64
}

/// Parses "x y z" into its letters, enforcing single lowercase letters
/// separated by single spaces and exactly `n` of them.
pub fn parse_letters(line: &str, n: usize) -> anyhow::Result<Vec<char>> {
    let chars: Vec<char> = line.trim().chars().collect();
    let malformed = "the letter line must be single lowercase letters separated by single spaces";

    ensure!(chars.len() % 2 == 1, malformed);
    let letters: Vec<char> = chars.iter().step_by(2).copied().collect();
    ensure!(letters.iter().all(|ch| ch.is_ascii_lowercase()), malformed);
    ensure!(
        chars.iter().skip(1).step_by(2).all(|&ch| ch == ' '),
        malformed
    );
    ensure!(letters.len() == n, "expected {n} letters, got {}", letters.len());
    Ok(letters)
}

fn main() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut next_line = || -> anyhow::Result<String> {
        Ok(lines.next().context("missing input line")??)
    };

    let n: usize = next_line()?.trim().parse().context("N must be an integer")?;
    ensure!((1..=10).contains(&n), "N must be 1 <= N <= 10");

    let letters = parse_letters(&next_line()?, n)?;

    let k: usize = next_line()?.trim().parse().context("K must be an integer")?;
    ensure!((1..=n).contains(&k), "K must be 1 <= K <= N");

    let a_count = letters.iter().filter(|&&ch| ch == 'a').count();
    // Debug keeps the decimal point on whole numbers (1.0, not 1), like
    // Python's float printing; fractional values are unchanged.
    println!("{:?}", probability_hits_a(n, a_count, k));
    Ok(())
}
