// Lists
// https://www.hackerrank.com/challenges/python-lists/problem
//
// Applies a fixed command vocabulary to a growing list of integers and
// prints the list contents on every "print" command.

use std::io::{self, BufRead};

use anyhow::{ensure, Context};

/// Inserts before the given index; indices beyond the end append, negative
/// indices count from the back, clamped at the front.
pub fn insert_at(array: &mut Vec<i64>, index: i64, value: i64) {
    let position = if index < 0 {
        array.len().saturating_sub(index.unsigned_abs() as usize)
    } else {
        (index as usize).min(array.len())
    };
    array.insert(position, value);
}

/// Removes the first occurrence of `value`.
pub fn remove_value(array: &mut Vec<i64>, value: i64) -> anyhow::Result<()> {
    let position = array
        .iter()
        .position(|&item| item == value)
        .with_context(|| format!("value {value} is not in the list"))?;
    array.remove(position);
    Ok(())
}

pub fn render(array: &[i64]) -> String {
    format!("{array:?}")
}

fn main() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let count: usize = lines
        .next()
        .context("missing command count")??
        .trim()
        .parse()
        .context("expected a positive non-zero integer")?;
    ensure!(count >= 1, "expected a positive non-zero integer");

    let mut array: Vec<i64> = Vec::new();
    for _ in 0..count {
        let line = lines.next().context("missing command line")??;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["insert", index, value] => insert_at(
                &mut array,
                index.parse().context("insert index must be an integer")?,
                value.parse().context("insert value must be an integer")?,
            ),
            ["print"] => println!("{}", render(&array)),
            ["remove", value] => remove_value(
                &mut array,
                value.parse().context("remove value must be an integer")?,
            )?,
            ["append", value] => {
                array.push(value.parse().context("append value must be an integer")?);
            }
            ["sort"] => array.sort_unstable(),
            ["pop"] => {
                array.pop().context("pop from an empty list")?;
            }
            ["reverse"] => array.reverse(),
            _ => println!("Unexpected input. Try again."),
        }
    }
    Ok(())
}
