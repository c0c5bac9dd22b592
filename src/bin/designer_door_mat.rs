// Designer Door Mat
// https://www.hackerrank.com/challenges/designer-door-mat/problem
//
// Draws the door mat: a widening band of ".|." cells above and below a
// centered WELCOME line, padded with dashes. Input errors are reported as a
// one-line diagnostic, matching the judge's expected behavior for bad input.

use std::io::{self, BufRead};

use anyhow::{ensure, Context};

const FILL: &str = ".|.";
const DASH: &str = "-";
const WORD: &str = "WELCOME";

pub fn validate(height: usize, width: usize) -> anyhow::Result<()> {
    ensure!(height % 2 == 1, "Height must be odd.");
    ensure!(width % 2 == 1, "Width must be odd.");
    ensure!(width == 3 * height, "Width must be three times the height.");
    Ok(())
}

pub fn build_line(row: usize, height: usize, width: usize) -> String {
    let middle = height / 2;
    if row == middle {
        // A 1x3 mat is narrower than the word itself; pad with nothing.
        let dashes = width.saturating_sub(WORD.len()) / 2;
        format!("{}{}{}", DASH.repeat(dashes), WORD, DASH.repeat(dashes))
    } else {
        let distance = middle.abs_diff(row);
        let fills = 1 + 2 * (middle - distance);
        let dashes = (width - fills * FILL.len()) / 2;
        format!(
            "{}{}{}",
            DASH.repeat(dashes),
            FILL.repeat(fills),
            DASH.repeat(dashes)
        )
    }
}

pub fn build_mat(height: usize, width: usize) -> anyhow::Result<String> {
    validate(height, width)?;
    Ok((0..height)
        .map(|row| build_line(row, height, width))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn run() -> anyhow::Result<()> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read input")?;

    let tokens: Vec<&str> = line.split_whitespace().collect();
    ensure!(tokens.len() == 2, "Expected exactly 2 space-separated integers.");
    let height: usize = tokens[0]
        .parse()
        .context("Expected exactly 2 space-separated integers.")?;
    let width: usize = tokens[1]
        .parse()
        .context("Expected exactly 2 space-separated integers.")?;

    println!("{}", build_mat(height, width)?);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        println!("Input error: {err}");
    }
}
