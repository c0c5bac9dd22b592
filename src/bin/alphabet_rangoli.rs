// Alphabet Rangoli
// https://www.hackerrank.com/challenges/alphabet-rangoli/problem
//
// Builds the symmetric letter pattern for a given size. The base pattern and
// fill character are configurable; size is checked against a maximum.

use std::io::{self, BufRead};

use anyhow::Context;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_PATTERN: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DEFAULT_FILL: char = '-';
pub const DEFAULT_MAX_SIZE: usize = 26;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangoliError {
    #[error("size must be positive (size > 0), got {0}")]
    SizeNotPositive(usize),

    #[error("max size must be positive (max_size > 0), got {0}")]
    MaxSizeNotPositive(usize),

    #[error("size of {size} exceeds max size of {max_size}")]
    SizeTooLarge { size: usize, max_size: usize },

    #[error("pattern cannot be empty; provide at least one character")]
    EmptyPattern,
}

pub fn validate_inputs(size: usize, pattern: &str, max_size: usize) -> Result<(), RangoliError> {
    if size < 1 {
        return Err(RangoliError::SizeNotPositive(size));
    }
    if max_size < 1 {
        return Err(RangoliError::MaxSizeNotPositive(max_size));
    }
    if size > max_size {
        return Err(RangoliError::SizeTooLarge { size, max_size });
    }
    if pattern.is_empty() {
        return Err(RangoliError::EmptyPattern);
    }
    Ok(())
}

/// Builds a rangoli with the default lowercase alphabet and `-` fill.
pub fn build_rangoli(size: usize) -> Result<String, RangoliError> {
    build_rangoli_with(size, DEFAULT_FILL, DEFAULT_PATTERN, DEFAULT_MAX_SIZE)
}

/// Builds a rangoli from an arbitrary base pattern.
///
/// The pattern repeats when `size` exceeds its length. Output has
/// `2 * size - 1` lines, each `4 * size - 3` characters wide.
pub fn build_rangoli_with(
    size: usize,
    fill: char,
    pattern: &str,
    max_size: usize,
) -> Result<String, RangoliError> {
    validate_inputs(size, pattern, max_size)?;

    debug!("starting rangoli construction of size {size}");

    // Outermost letter first: the first `size` pattern characters, reversed.
    let mut letters: Vec<char> = pattern.chars().cycle().take(size).collect();
    letters.reverse();

    let width = 4 * size - 3;
    let mut lines: Vec<String> = Vec::with_capacity(2 * size - 1);

    // Upper half and middle line.
    for row in 1..=size {
        let mut cells: Vec<char> = letters[..row].to_vec();
        cells.extend(letters[..row - 1].iter().rev());
        let core: String = itertools::intersperse(cells.into_iter(), fill).collect();

        let pad: String = std::iter::repeat(fill)
            .take((width - core.chars().count()) / 2)
            .collect();
        lines.push(format!("{pad}{core}{pad}"));
    }

    // Lower half mirrors the upper half.
    for row in (0..size - 1).rev() {
        lines.push(lines[row].clone());
    }

    debug!("finished rangoli construction of size {size}");

    Ok(lines.join("\n"))
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

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read size")?;
    let size: usize = line.trim().parse().context("size must be an integer")?;

    println!("{}", build_rangoli(size)?);
    Ok(())
}
