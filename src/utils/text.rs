//! Text utilities
//!
//! This module provides Unicode-aware string helpers used by the
//! letter-frequency calculation.

/// Count occurrences of a character in a string, case-insensitively.
///
/// Both sides are compared through full Unicode case folding
/// (`char::to_lowercase`), so non-Latin alphabets such as Cyrillic
/// match correctly. An empty string yields 0.
///
/// # Arguments
/// * `text` - The string to scan
/// * `letter` - The character to count
#[must_use]
pub fn count_char_case_insensitive(text: &str, letter: char) -> usize {
    // A single char may lowercase to more than one char, so compare
    // the folded sequences rather than single code points.
    let needle: Vec<char> = letter.to_lowercase().collect();

    text.chars()
        .filter(|c| c.to_lowercase().eq(needle.iter().copied()))
        .count()
}
