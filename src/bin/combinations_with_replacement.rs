// itertools.combinations_with_replacement()
// https://www.hackerrank.com/challenges/itertools-combinations-with-replacement/problem
//
// Size-k combinations with replacement of the sorted characters.

use std::io::{self, BufRead};

use anyhow::{ensure, Context};
use itertools::Itertools;

pub fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

pub fn combinations_with_replacement(s: &str, k: usize) -> Vec<String> {
    sorted_chars(s)
        .iter()
        .combinations_with_replacement(k)
        .map(|combo| combo.into_iter().collect::<String>())
        .collect()
}

fn main() -> anyhow::Result<()> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;

    let tokens: Vec<&str> = line.split_whitespace().collect();
    ensure!(tokens.len() == 2, "expected exactly 2 inputs");
    let k: usize = tokens[1]
        .parse()
        .context("expected an integer as the second input")?;
    ensure!(
        tokens[0].chars().count() >= k,
        "the string must be at least as long as the combination size"
    );

    for combo in combinations_with_replacement(tokens[0], k) {
        println!("{combo}");
    }
    Ok(())
}
