// Incorrect Regex
// https://www.hackerrank.com/challenges/incorrect-regex/problem
//
// For each pattern line, prints True when it compiles and False otherwise.

use std::io::{self, BufRead};

use anyhow::Context;
use regex::Regex;

pub fn compiles(pattern: &str) -> bool {
    Regex::new(pattern).is_ok()
}

fn main() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let count: usize = lines
        .next()
        .context("missing pattern count")??
        .trim()
        .parse()
        .context("pattern count must be an integer")?;

    for _ in 0..count {
        let pattern = lines.next().context("missing pattern line")??;
        let pattern = pattern.trim_end_matches(['\r', '\n']);
        println!("{}", if compiles(pattern) { "True" } else { "False" });
    }
    Ok(())
}
