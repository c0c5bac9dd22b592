// itertools.permutations()
// https://www.hackerrank.com/challenges/itertools-permutations/problem
//
// Size-k permutations of the sorted characters, in lexicographic order.

use std::io::{self, BufRead};

use anyhow::{ensure, Context};
use itertools::Itertools;

pub fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

pub fn permutations_of(s: &str, k: usize) -> Vec<String> {
    sorted_chars(s)
        .iter()
        .permutations(k)
        .map(|perm| perm.into_iter().collect::<String>())
        .collect()
}

fn main() -> anyhow::Result<()> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;

    let tokens: Vec<&str> = line.split_whitespace().collect();
    ensure!(tokens.len() == 2, "expected 2 arguments");
    let k: usize = tokens[1]
        .parse()
        .context("expected an integer as permutation size argument")?;

    for perm in permutations_of(tokens[0], k) {
        println!("{perm}");
    }
    Ok(())
}
