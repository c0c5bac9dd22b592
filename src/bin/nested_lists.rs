// Nested Lists
// https://www.hackerrank.com/challenges/nested-list/problem
//
// Prints the names of the students holding the second-lowest grade,
// alphabetically, one per line.

use std::io::{self, BufRead};

use anyhow::{ensure, Context};

pub fn second_lowest_names(records: &[(String, f64)]) -> anyhow::Result<Vec<String>> {
    let mut grades: Vec<f64> = records.iter().map(|record| record.1).collect();
    grades.sort_by(f64::total_cmp);
    grades.dedup();
    ensure!(
        grades.len() >= 2,
        "need at least two distinct grades, got {}",
        grades.len()
    );
    let second_lowest = grades[1];

    let mut names: Vec<String> = records
        .iter()
        .filter(|record| record.1 == second_lowest)
        .map(|record| record.0.clone())
        .collect();
    names.sort();
    Ok(names)
}

fn main() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut next_line = || -> anyhow::Result<String> {
        Ok(lines.next().context("missing input line")??)
    };

    let count: usize = next_line()?
        .trim()
        .parse()
        .context("student count must be an integer")?;

    let mut records: Vec<(String, f64)> = Vec::with_capacity(count);
    for _ in 0..count {
        let name = next_line()?.trim_end_matches(['\r', '\n']).to_string();
        let grade: f64 = next_line()?
            .trim()
            .parse()
            .context("grade must be a number")?;
        ensure!(grade.is_finite(), "grade must be finite");
        records.push((name, grade));
    }

    for name in second_lowest_names(&records)? {
        println!("{name}");
    }
    Ok(())
}
