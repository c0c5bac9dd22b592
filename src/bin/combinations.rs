// itertools.combinations()
// https://www.hackerrank.com/challenges/itertools-combinations/problem
//
// All combinations of the sorted characters, sizes 1 through k, one per line.

use std::io::{self, BufRead};

use anyhow::{ensure, Context};
use itertools::Itertools;

pub fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}

pub fn combinations_up_to(s: &str, k: usize) -> Vec<String> {
    let chars = sorted_chars(s);
    let mut results = Vec::new();
    for size in 1..=k {
        for combo in chars.iter().combinations(size) {
            results.push(combo.into_iter().collect::<String>());
        }
    }
    results
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

    for combo in combinations_up_to(tokens[0], k) {
        println!("{combo}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample() {
        assert_eq!(
            combinations_up_to("HACK", 2),
            vec!["A", "C", "H", "K", "AC", "AH", "AK", "CH", "CK", "HK"]
        );
    }

    #[test]
    fn size_one_lists_sorted_characters() {
        assert_eq!(combinations_up_to("CBA", 1), vec!["A", "B", "C"]);
    }

    #[test]
    fn full_size_combination_is_the_sorted_string() {
        let combos = combinations_up_to("BA", 2);
        assert_eq!(combos.last().unwrap(), "AB");
    }

    #[test]
    fn duplicate_characters_produce_duplicate_combinations() {
        assert_eq!(combinations_up_to("AA", 2), vec!["A", "A", "AA"]);
    }

    #[test]
    fn zero_k_yields_nothing() {
        assert!(combinations_up_to("ABC", 0).is_empty());
    }
}
