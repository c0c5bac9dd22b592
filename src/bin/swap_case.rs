// sWAP cASE
// https://www.hackerrank.com/challenges/swap-case/problem
//
// Flips the case of every letter; everything else passes through.

use std::io::{self, BufRead};

use anyhow::{ensure, Context};

pub fn validate(input: &str) -> anyhow::Result<()> {
    let len = input.chars().count();
    ensure!(
        len > 0 && len <= 1000,
        "expected input length within 1..=1000, was {len}"
    );
    Ok(())
}

pub fn swap_case(input: &str) -> anyhow::Result<String> {
    validate(input)?;
    let swapped = input
        .chars()
        .flat_map(|ch| {
            if ch.is_lowercase() {
                ch.to_uppercase().collect::<Vec<char>>()
            } else if ch.is_uppercase() {
                ch.to_lowercase().collect()
            } else {
                vec![ch]
            }
        })
        .collect();
    Ok(swapped)
}

fn main() -> anyhow::Result<()> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;
    let line = line.trim_end_matches(['\r', '\n']);

    println!("{}", swap_case(line)?);
    Ok(())
}
