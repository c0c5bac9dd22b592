// Compress the String!
// https://www.hackerrank.com/challenges/compress-the-string/problem
//
// Run-length encodes a digit string as "(count, digit)" pairs.

use std::io::{self, BufRead};

use anyhow::{ensure, Context};
use itertools::Itertools;

pub fn validate(input: &str) -> anyhow::Result<()> {
    ensure!(!input.is_empty(), "missing input string");
    for ch in input.chars() {
        ensure!(ch.is_ascii_digit(), "all characters must be digits, got {ch:?}");
    }
    Ok(())
}

pub fn run_length_encode(input: &str) -> String {
    input
        .chars()
        .dedup_with_count()
        .map(|(count, ch)| format!("({count}, {ch})"))
        .join(" ")
}

fn main() -> anyhow::Result<()> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;
    let input = line.trim();

    validate(input)?;
    println!("{}", run_length_encode(input));
    Ok(())
}
