// Mutations
// https://www.hackerrank.com/challenges/python-mutations/problem
//
// Replaces the character at a given position. Positions are counted in
// characters, not bytes.

use std::io::{self, BufRead};

use anyhow::{ensure, Context};

pub fn mutate_string(string: &str, position: usize, replacement: char) -> anyhow::Result<String> {
    let mut chars: Vec<char> = string.chars().collect();
    ensure!(
        position > 0 && position < chars.len(),
        "position {position} out of range"
    );
    chars[position] = replacement;
    Ok(chars.into_iter().collect())
}

fn main() -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let string = lines.next().context("missing string line")??;
    let string = string.trim_end_matches(['\r', '\n']);

    let edit = lines.next().context("missing edit line")??;
    let tokens: Vec<&str> = edit.split_whitespace().collect();
    ensure!(tokens.len() == 2, "expected a position and a character");

    let position: usize = tokens[0].parse().context("position must be an integer")?;
    ensure!(
        tokens[1].chars().count() == 1,
        "character must be a single string"
    );
    let replacement = tokens[1].chars().next().context("missing character")?;

    println!("{}", mutate_string(string, position, replacement)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_the_requested_character() {
        assert_eq!(mutate_string("abracadabra", 5, 'k').unwrap(), "abrackdabra");
    }

    #[test]
    fn replaces_the_last_character() {
        assert_eq!(mutate_string("abc", 2, 'z').unwrap(), "abz");
    }

    #[test]
    fn position_zero_is_out_of_range() {
        // The published constraint is 0 < position < len.
        assert!(mutate_string("abc", 0, 'z').is_err());
    }

    #[test]
    fn position_at_length_is_out_of_range() {
        assert!(mutate_string("abc", 3, 'z').is_err());
    }

    #[test]
    fn counts_positions_in_characters() {
        assert_eq!(mutate_string("héllo", 2, 'x').unwrap(), "héxlo");
    }
}
