// Tuples
// https://www.hackerrank.com/challenges/python-tuples/problem
//
// Hashes a fixed-length tuple of integers. The hasher is std's default
// SipHash, so the value is stable for a given input within one build.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::{self, BufRead};

use anyhow::{ensure, Context};

pub fn hash_tuple(values: &[i64]) -> u64 {
    let mut hasher = DefaultHasher::new();
    values.hash(&mut hasher);
    hasher.finish()
}

pub fn validate(expected: usize, values: &[i64]) -> anyhow::Result<()> {
    ensure!(expected >= 1, "expected a positive non-zero integer");
    ensure!(
        values.len() == expected,
        "expected {expected} integers, got {}",
        values.len()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let count: usize = lines
        .next()
        .context("missing count line")??
        .trim()
        .parse()
        .context("expected a positive non-zero integer")?;

    let values: Vec<i64> = lines
        .next()
        .context("missing values line")??
        .split_whitespace()
        .map(|token| token.parse().context("expected integers"))
        .collect::<anyhow::Result<_>>()?;

    validate(count, &values)?;
    println!("{}", hash_tuple(&values));
    Ok(())
}
