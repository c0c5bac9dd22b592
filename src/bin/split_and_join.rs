// String Split and Join
// https://www.hackerrank.com/challenges/python-string-split-and-join/problem
//
// Replaces whitespace runs with single dashes.

use std::io::{self, BufRead};

use anyhow::Context;

pub fn split_and_join(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join("-")
}

fn main() -> anyhow::Result<()> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;

    println!("{}", split_and_join(&line));
    Ok(())
}
