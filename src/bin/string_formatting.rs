// String Formatting
// https://www.hackerrank.com/challenges/python-string-formatting/problem
//
// Prints 1..=n in decimal, octal, upper hexadecimal and binary, each column
// right-aligned to the binary width of n.

use std::io::{self, BufRead};

use anyhow::{ensure, Context};
use itertools::Itertools;

pub fn binary_width(n: u32) -> usize {
    (32 - n.leading_zeros()) as usize
}

pub fn format_row(value: u32, width: usize) -> String {
    format!("{0:>w$} {0:>w$o} {0:>w$X} {0:>w$b}", value, w = width)
}

pub fn formatted_table(n: u32) -> anyhow::Result<String> {
    ensure!(n >= 1, "expected a positive integer");
    let width = binary_width(n);
    Ok((1..=n).map(|value| format_row(value, width)).join("\n"))
}

fn main() -> anyhow::Result<()> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;
    let n: u32 = line.trim().parse().context("expected a positive integer")?;

    println!("{}", formatted_table(n)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_tracks_the_binary_representation() {
        assert_eq!(binary_width(1), 1);
        assert_eq!(binary_width(2), 2);
        assert_eq!(binary_width(17), 5);
    }

    #[test]
    fn rows_align_to_the_binary_column() {
        assert_eq!(format_row(17, 5), "   17    21    11 10001");
    }

    #[test]
    fn table_for_two() {
        assert_eq!(formatted_table(2).unwrap(), " 1  1  1  1\n 2  2  2 10");
    }

    #[test]
    fn hexadecimal_uses_uppercase() {
        assert_eq!(format_row(10, 4), "  10   12    A 1010");
    }

    #[test]
    fn table_has_one_row_per_value() {
        assert_eq!(formatted_table(17).unwrap().lines().count(), 17);
    }

    #[test]
    fn zero_is_rejected() {
        assert!(formatted_table(0).is_err());
    }
}
