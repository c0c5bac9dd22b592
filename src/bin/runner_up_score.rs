// Find the Runner-Up Score!
// https://www.hackerrank.com/challenges/find-second-maximum-number-in-a-list/problem
//
// Prints the highest score strictly below the maximum.

use std::io::{self, BufRead};

use anyhow::{bail, ensure, Context};

pub fn runner_up(scores: &[i64]) -> Option<i64> {
    let mut sorted = scores.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let top = *sorted.first()?;
    sorted.into_iter().find(|&score| score != top)
}

fn main() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let count: usize = lines
        .next()
        .context("missing count line")??
        .trim()
        .parse()
        .context("count must be an integer")?;

    let scores: Vec<i64> = lines
        .next()
        .context("missing scores line")??
        .split_whitespace()
        .map(|token| token.parse().context("scores must be integers"))
        .collect::<anyhow::Result<_>>()?;
    ensure!(scores.len() == count, "expected {count} scores, got {}", scores.len());

    let Some(result) = runner_up(&scores) else {
        bail!("no runner-up: all scores are equal");
    };
    println!("{result}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample() {
        assert_eq!(runner_up(&[2, 3, 6, 6, 5]), Some(5));
    }

    #[test]
    fn duplicated_maximum_is_skipped() {
        assert_eq!(runner_up(&[9, 9, 9, 4]), Some(4));
    }

    #[test]
    fn negative_scores() {
        assert_eq!(runner_up(&[-7, -7, -7, -7, -6]), Some(-7));
    }

    #[test]
    fn all_equal_has_no_runner_up() {
        assert_eq!(runner_up(&[5, 5, 5]), None);
    }

    #[test]
    fn empty_input_has_no_runner_up() {
        assert_eq!(runner_up(&[]), None);
    }

    #[test]
    fn two_distinct_values() {
        assert_eq!(runner_up(&[1, 2]), Some(1));
    }
}
