// String Validators
// https://www.hackerrank.com/challenges/string-validators/problem
//
// Reports whether the input contains any alphanumeric, alphabetic, digit,
// lowercase and uppercase characters, one True/False line per property.

use std::io::{self, BufRead};

use anyhow::Context;
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_MAX_LEN: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StringCheckError {
    #[error("max length must be positive, got {0}")]
    MaxLenNotPositive(usize),

    #[error("string cannot be empty")]
    Empty,

    #[error("string length ({len}) must be less than {max_len}")]
    TooLong { len: usize, max_len: usize },
}

/// Results of the character type scan.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StringProperties {
    pub has_alnum: bool,
    pub has_alpha: bool,
    pub has_digit: bool,
    pub has_lower: bool,
    pub has_upper: bool,
}

impl StringProperties {
    fn all_set(&self) -> bool {
        self.has_alnum && self.has_alpha && self.has_digit && self.has_lower && self.has_upper
    }
}

pub fn validate_input(string: &str, max_len: usize) -> Result<(), StringCheckError> {
    debug!("beginning input validation");

    if max_len < 1 {
        return Err(StringCheckError::MaxLenNotPositive(max_len));
    }
    let len = string.chars().count();
    if len == 0 {
        return Err(StringCheckError::Empty);
    }
    if len >= max_len {
        return Err(StringCheckError::TooLong { len, max_len });
    }

    debug!("input validated successfully");
    Ok(())
}

/// Single pass over the string, stopping early once every flag is set.
pub fn has_character_types(
    string: &str,
    max_len: usize,
) -> Result<StringProperties, StringCheckError> {
    validate_input(string, max_len)?;

    debug!("scanning string of length {}", string.chars().count());

    let mut properties = StringProperties::default();
    for ch in string.chars() {
        properties.has_alnum |= ch.is_alphanumeric();
        properties.has_alpha |= ch.is_alphabetic();
        // Digit means a decimal digit; numeric-only characters like '½'
        // count as alphanumeric but not as digits.
        properties.has_digit |= ch.is_ascii_digit();
        properties.has_lower |= ch.is_lowercase();
        properties.has_upper |= ch.is_uppercase();
        if properties.all_set() {
            break;
        }
    }

    debug!("scan finished: {properties:?}");
    Ok(properties)
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
        .context("failed to read input")?;
    let line = line.trim_end_matches(['\r', '\n']);

    let properties = has_character_types(line, DEFAULT_MAX_LEN)?;
    for flag in [
        properties.has_alnum,
        properties.has_alpha,
        properties.has_digit,
        properties.has_lower,
        properties.has_upper,
    ] {
        println!("{}", if flag { "True" } else { "False" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_string_sets_every_flag() {
        let properties = has_character_types("qA2", DEFAULT_MAX_LEN).unwrap();
        assert_eq!(
            properties,
            StringProperties {
                has_alnum: true,
                has_alpha: true,
                has_digit: true,
                has_lower: true,
                has_upper: true,
            }
        );
    }

    #[test]
    fn punctuation_sets_nothing() {
        let properties = has_character_types("!!!", DEFAULT_MAX_LEN).unwrap();
        assert_eq!(properties, StringProperties::default());
    }

    #[test]
    fn digits_only() {
        let properties = has_character_types("123", DEFAULT_MAX_LEN).unwrap();
        assert!(properties.has_alnum);
        assert!(properties.has_digit);
        assert!(!properties.has_alpha);
        assert!(!properties.has_lower);
        assert!(!properties.has_upper);
    }

    #[test]
    fn lowercase_only() {
        let properties = has_character_types("abc", DEFAULT_MAX_LEN).unwrap();
        assert!(properties.has_alpha);
        assert!(properties.has_lower);
        assert!(!properties.has_upper);
        assert!(!properties.has_digit);
    }

    #[test]
    fn fractions_are_numeric_but_not_digits() {
        let properties = has_character_types("½", DEFAULT_MAX_LEN).unwrap();
        assert!(properties.has_alnum);
        assert!(!properties.has_digit);
        assert!(!properties.has_alpha);
    }

    #[test]
    fn empty_string_is_rejected() {
        assert_eq!(
            has_character_types("", DEFAULT_MAX_LEN),
            Err(StringCheckError::Empty)
        );
    }

    #[test]
    fn length_at_max_is_rejected() {
        // The bound is exclusive: length must stay below max_len.
        let input = "a".repeat(1000);
        assert_eq!(
            has_character_types(&input, DEFAULT_MAX_LEN),
            Err(StringCheckError::TooLong {
                len: 1000,
                max_len: 1000
            })
        );
    }

    #[test]
    fn zero_max_len_is_rejected() {
        assert_eq!(
            has_character_types("a", 0),
            Err(StringCheckError::MaxLenNotPositive(0))
        );
    }
}
