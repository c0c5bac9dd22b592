// Find a string
// https://www.hackerrank.com/challenges/find-a-string/problem
//
// Overlapping substring counting with configurable limits, plus the
// fault-tolerant variants: position listing, a safe counter that returns a
// default instead of failing, and batch counting over many strings.

use std::io::{self, BufRead};

use anyhow::Context;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Options and errors
// ============================================================================

#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum allowed length of the searched string.
    pub max_len: usize,
    /// Reject non-ASCII characters in either input.
    pub require_ascii: bool,
    /// Permit an empty substring (which matches at every position).
    pub allow_empty_substring: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            max_len: 200,
            require_ascii: true,
            allow_empty_substring: false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("max length must be positive, got {0}")]
    MaxLenNotPositive(usize),

    #[error("string cannot be empty; provide a non-empty string to search in")]
    EmptyString,

    #[error("string length ({len}) exceeds maximum of {max_len}")]
    StringTooLong { len: usize, max_len: usize },

    #[error("substring cannot be empty; provide one or allow empty substrings")]
    EmptySubstring,

    #[error("substring length ({sub_len}) cannot exceed string length ({len})")]
    SubstringTooLong { sub_len: usize, len: usize },

    #[error("{which} contains forbidden non-ascii character {ch:?} (U+{code:04X}) at position {pos}")]
    NonAscii {
        which: &'static str,
        ch: char,
        code: u32,
        pos: usize,
    },

    #[error("no strings to process")]
    EmptyBatch,

    #[error("invalid string at index {index}: {source}")]
    InvalidAtIndex {
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

fn check_ascii(which: &'static str, text: &str) -> Result<(), ValidationError> {
    for (pos, ch) in text.chars().enumerate() {
        if !ch.is_ascii() {
            return Err(ValidationError::NonAscii {
                which,
                ch,
                code: ch as u32,
                pos,
            });
        }
    }
    Ok(())
}

pub fn validate_inputs(
    string: &str,
    substring: &str,
    options: &SearchOptions,
) -> Result<(), ValidationError> {
    debug!("validating inputs");

    if options.max_len < 1 {
        return Err(ValidationError::MaxLenNotPositive(options.max_len));
    }

    let len = string.chars().count();
    if len == 0 {
        return Err(ValidationError::EmptyString);
    }
    if len > options.max_len {
        return Err(ValidationError::StringTooLong {
            len,
            max_len: options.max_len,
        });
    }

    let sub_len = substring.chars().count();
    if sub_len == 0 && !options.allow_empty_substring {
        return Err(ValidationError::EmptySubstring);
    }
    if sub_len > len {
        return Err(ValidationError::SubstringTooLong { sub_len, len });
    }

    if options.require_ascii {
        check_ascii("string", string)?;
        check_ascii("substring", substring)?;
    }

    debug!("input validation passed: len={len}, sub_len={sub_len}");
    Ok(())
}

// ============================================================================
// Counting
// ============================================================================

/// Counts occurrences of `substring` in `string`, including overlapping ones.
///
/// Case-sensitive. `count_substring("AAAA", "AA", ..)` is 3.
pub fn count_substring(
    string: &str,
    substring: &str,
    options: &SearchOptions,
) -> Result<usize, ValidationError> {
    validate_inputs(string, substring, options)?;

    let chars: Vec<char> = string.chars().collect();
    let sub: Vec<char> = substring.chars().collect();

    if sub.is_empty() {
        // The empty substring matches before every character and at the end.
        return Ok(chars.len() + 1);
    }
    if sub.len() > chars.len() {
        warn!("substring longer than string, returning 0");
        return Ok(0);
    }

    let count = chars
        .windows(sub.len())
        .filter(|window| *window == sub.as_slice())
        .count();

    debug!(
        "found {count} occurrence{} of the substring",
        if count == 1 { "" } else { "s" }
    );
    Ok(count)
}

/// Returns every position (0-based, by character) where `substring` occurs,
/// overlapping matches included.
pub fn find_all_positions(
    string: &str,
    substring: &str,
    options: &SearchOptions,
) -> Result<Vec<usize>, ValidationError> {
    validate_inputs(string, substring, options)?;

    let chars: Vec<char> = string.chars().collect();
    let sub: Vec<char> = substring.chars().collect();

    if sub.is_empty() {
        return Ok((0..=chars.len()).collect());
    }

    let positions: Vec<usize> = chars
        .windows(sub.len())
        .enumerate()
        .filter(|(_, window)| *window == sub.as_slice())
        .map(|(index, _)| index)
        .collect();

    debug!("found matches at positions {positions:?}");
    Ok(positions)
}

/// Never fails: missing inputs and validation errors yield `default`.
///
/// Meant for pipelines that must keep going when some records are bad.
pub fn count_substring_safe(
    string: Option<&str>,
    substring: Option<&str>,
    default: usize,
    options: &SearchOptions,
) -> usize {
    let (Some(string), Some(substring)) = (string, substring) else {
        warn!("received missing input, returning default value");
        return default;
    };

    match count_substring(string, substring, options) {
        Ok(count) => count,
        Err(err) => {
            warn!("validation failed: {err}; returning default value");
            default
        }
    }
}

/// Counts `substring` in each of `strings`.
///
/// With `skip_invalid`, strings that fail validation count as 0; otherwise
/// the first invalid string aborts the batch with its index attached.
pub fn count_substring_batch(
    strings: &[&str],
    substring: &str,
    skip_invalid: bool,
    options: &SearchOptions,
) -> Result<Vec<usize>, ValidationError> {
    if strings.is_empty() {
        return Err(ValidationError::EmptyBatch);
    }

    debug!("batch counting over {} strings", strings.len());

    let mut results = Vec::with_capacity(strings.len());
    for (index, string) in strings.iter().enumerate() {
        match count_substring(string, substring, options) {
            Ok(count) => results.push(count),
            Err(err) if skip_invalid => {
                warn!("skipping invalid string at index {index}: {err}");
                results.push(0);
            }
            Err(err) => {
                return Err(ValidationError::InvalidAtIndex {
                    index,
                    source: Box::new(err),
                });
            }
        }
    }
    Ok(results)
}

// ============================================================================
// Entry point
// ============================================================================

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

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let string = lines
        .next()
        .context("missing string line")?
        .context("failed to read string")?;
    let substring = lines
        .next()
        .context("missing substring line")?
        .context("failed to read substring")?;

    let count = count_substring(string.trim(), substring.trim(), &SearchOptions::default())?;
    println!("{count}");
    Ok(())
}
