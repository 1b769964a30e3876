use crate::{Error, Result};

use std::{collections::HashSet, fmt::Display};

////////////////////////////////////////////////////////////////////////////////

const ENCODED_SPACE: &str = "%20";

////////////////////////////////////////////////////////////////////////////////

/// Case-sensitive pairwise check, quadratic in the number of chars.
pub fn has_only_unique_chars(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();

    for (index, char) in chars.iter().enumerate() {
        if chars[index + 1..].contains(char) {
            return false;
        }
    }

    true
}

pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}

/// Checks that every char of `other` occurs somewhere in `input`.
///
/// This is a containment test, not an anagram test: multiplicities and
/// chars present only in `input` are ignored, so `("aab", "ab")` passes.
pub fn is_permutation(input: &str, other: &str) -> bool {
    let existing: HashSet<char> = input.chars().collect();
    other.chars().all(|char| existing.contains(&char))
}

/// Same containment test as [`is_permutation`] over arbitrary values.
pub fn is_permutation_of<K: PartialEq>(input: &[K], other: &[K]) -> bool {
    other.iter().all(|value| input.contains(value))
}

/// Replaces spaces with `%20` among the first `used_length` chars and drops
/// the rest. A negative `used_length` counts as zero.
pub fn encode_spaces(input: &str, used_length: isize) -> Result<String> {
    let used_length = usize::try_from(used_length).unwrap_or(0);
    let length = input.chars().count();

    if used_length > length {
        return Err(Error::LengthOutOfRange {
            used_length,
            length,
        });
    }

    let mut output = String::with_capacity(used_length);
    for char in input.chars().take(used_length) {
        match char {
            ' ' => output.push_str(ENCODED_SPACE),
            other => output.push(other),
        }
    }

    Ok(output)
}

////////////////////////////////////////////////////////////////////////////////

struct Run {
    char: char,
    count: usize,
}

impl Display for Run {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.char, self.count)
    }
}

fn runs(input: &str) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();

    for char in input.chars() {
        match runs.last_mut() {
            Some(run) if run.char == char => run.count += 1,
            _ => runs.push(Run { char, count: 1 }),
        }
    }

    runs
}

/// Run-length encodes `input`, keeping it as is unless the encoding takes
/// strictly fewer bytes.
pub fn compress(input: &str) -> String {
    let compressed: String = runs(input).iter().map(Run::to_string).collect();

    if compressed.len() < input.len() {
        compressed
    } else {
        input.to_string()
    }
}

////////////////////////////////////////////////////////////////////////////////

pub fn is_rotated(source: &str, candidate: &str) -> bool {
    if source.chars().count() != candidate.chars().count() {
        return false;
    }

    source.repeat(2).contains(candidate)
}

////////////////////////////////////////////////////////////////////////////////
