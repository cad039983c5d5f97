//! Post-processing and cleanup utilities
//!
//! Small text helpers shared by the extractor after the initial parse.

/// Collapse every run of whitespace (including line breaks inside table
/// cells) into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip trailing commas, then trailing periods, from a list entry.
pub fn strip_trailing_punctuation(text: &str) -> &str {
    text.trim_end_matches(',').trim_end_matches('.')
}

pub(crate) fn count_words(lines: &[String]) -> usize {
    lines.iter().map(|line| line.split_whitespace().count()).sum()
}
