// Capitalize!
// https://www.hackerrank.com/challenges/capitalize/problem
//
// Uppercases the first letter of every space-separated word, lowercases the
// remaining letters and leaves everything else untouched. The result goes to
// the file named by the OUTPUT_PATH environment variable, as the judge
// expects for this problem.

use std::env;
use std::fs;
use std::io::{self, BufRead};

use anyhow::Context;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_MAX_LEN: usize = 999;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CapitalizeError {
    #[error("string cannot be empty; provide at least one character")]
    Empty,

    #[error("max length must be positive (max_len > 0), got {0}")]
    MaxLenNotPositive(usize),

    #[error("string length ({len}) cannot exceed max length ({max_len})")]
    TooLong { len: usize, max_len: usize },

    #[error(
        "forbidden character {ch:?} (U+{code:04X}) at position {pos}; \
         only alphanumeric characters and spaces are allowed"
    )]
    ForbiddenCharacter { ch: char, code: u32, pos: usize },
}

pub fn validate_input(
    string: &str,
    max_len: usize,
    only_alnum: bool,
) -> Result<(), CapitalizeError> {
    debug!("beginning input validation");

    let len = string.chars().count();
    if len == 0 {
        return Err(CapitalizeError::Empty);
    }
    if max_len < 1 {
        return Err(CapitalizeError::MaxLenNotPositive(max_len));
    }
    if len > max_len {
        return Err(CapitalizeError::TooLong { len, max_len });
    }

    if only_alnum {
        for (pos, ch) in string.chars().enumerate() {
            if !ch.is_alphanumeric() && ch != ' ' {
                return Err(CapitalizeError::ForbiddenCharacter {
                    ch,
                    code: ch as u32,
                    pos,
                });
            }
        }
    }

    debug!("finished input validation");
    Ok(())
}

/// Uppercases letters at the start of the string or directly after a space,
/// lowercases every other letter. Spacing and non-letters are preserved.
pub fn capitalize_words(string: &str) -> String {
    let mut result = String::with_capacity(string.len());
    let mut word_start = true;
    for ch in string.chars() {
        if word_start {
            result.extend(ch.to_uppercase());
        } else {
            result.extend(ch.to_lowercase());
        }
        word_start = ch == ' ';
    }
    result
}

pub fn solve(string: &str, max_len: usize, only_alnum: bool) -> Result<String, CapitalizeError> {
    validate_input(string, max_len, only_alnum)?;
    debug!("capitalizing string of length {}", string.chars().count());
    Ok(capitalize_words(string))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let output_path =
        env::var("OUTPUT_PATH").context("OUTPUT_PATH must name the output file")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;
    let line = line.trim_end_matches(['\r', '\n']);

    let result = solve(line, DEFAULT_MAX_LEN, true)?;

    fs::write(&output_path, format!("{result}\n"))
        .with_context(|| format!("failed to write {output_path}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(solve("mary ann", 999, true).unwrap(), "Mary Ann");
    }

    #[test]
    fn lowercases_interior_letters() {
        assert_eq!(solve("12abc   nAn", 999, true).unwrap(), "12abc   Nan");
    }

    #[test]
    fn preserves_leading_and_trailing_spaces() {
        assert_eq!(
            solve("  leading spaces", 999, true).unwrap(),
            "  Leading Spaces"
        );
        assert_eq!(solve("trailing  ", 999, true).unwrap(), "Trailing  ");
    }

    #[test]
    fn single_letter() {
        assert_eq!(solve("a", 999, true).unwrap(), "A");
    }

    #[test]
    fn digits_at_word_start_are_untouched() {
        assert_eq!(solve("1 w 2 r 3g", 999, true).unwrap(), "1 W 2 R 3g");
    }

    #[test]
    fn punctuation_does_not_start_a_word() {
        // Only a space starts a new word; letters after '-' stay lowercase.
        assert_eq!(
            solve("mary-jane o'brien", 999, false).unwrap(),
            "Mary-jane O'brien"
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(solve("", 999, true), Err(CapitalizeError::Empty));
    }

    #[test]
    fn punctuation_is_rejected_by_default() {
        assert_eq!(
            solve("###", 999, true),
            Err(CapitalizeError::ForbiddenCharacter {
                ch: '#',
                code: 0x23,
                pos: 0
            })
        );
    }

    #[test]
    fn over_long_input_is_rejected() {
        let long = "a".repeat(1000);
        assert_eq!(
            solve(&long, 999, true),
            Err(CapitalizeError::TooLong {
                len: 1000,
                max_len: 999
            })
        );
    }

    #[test]
    fn zero_max_len_is_rejected() {
        assert_eq!(
            solve("abc", 0, true),
            Err(CapitalizeError::MaxLenNotPositive(0))
        );
    }
}
