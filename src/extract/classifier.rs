//! Line classification
//!
//! Decides what a single trimmed paragraph line is: a day header, a section
//! label, an itinerary terminator, or plain text.

use super::vocabulary::{
    DAY_HEADER_PATTERNS, DAY_PREFIX_PATTERN, SECTION_LABELS, SENTINEL_PREFIX, Section,
    TERMINATOR_PHRASES, fold_case,
};
use crate::package::models::DayEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    DayHeader(DayEntry),
    SectionLabel(Section),
    Terminator,
    Text,
}

impl LineKind {
    /// Section this line opens, `Section::None` for terminators and text
    pub fn section(&self) -> Section {
        match self {
            LineKind::DayHeader(_) => Section::Itinerary,
            LineKind::SectionLabel(section) => *section,
            LineKind::Terminator | LineKind::Text => Section::None,
        }
    }
}

/// Classify one trimmed, non-empty line. Day headers win over labels.
pub fn classify_line(line: &str) -> LineKind {
    if let Some(day) = parse_day_header(line) {
        return LineKind::DayHeader(day);
    }
    if let Some(section) = section_label(line) {
        return LineKind::SectionLabel(section);
    }
    if is_terminator(line) {
        return LineKind::Terminator;
    }
    LineKind::Text
}

/// Parse a day header such as `Day 3 - Bosphorus Cruise (B/L)`
pub fn parse_day_header(line: &str) -> Option<DayEntry> {
    let line = line.trim();

    for pattern in DAY_HEADER_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(line) {
            let (Some(day), Some(title), Some(meals)) =
                (captures.get(1), captures.get(2), captures.get(3))
            else {
                continue;
            };

            // A numeral too large for a day number is not a header
            let Ok(day_number) = day.as_str().parse::<u32>() else {
                continue;
            };

            let meals = meals.as_str().trim();
            return Some(DayEntry {
                day_number,
                title: title.as_str().trim().to_string(),
                description: String::new(),
                meals_code: if meals.is_empty() {
                    "-".to_string()
                } else {
                    meals.to_string()
                },
            });
        }
    }

    None
}

/// Section named by a whole-line label, compared case-insensitively
pub fn section_label(line: &str) -> Option<Section> {
    let folded = fold_case(line.trim());
    SECTION_LABELS
        .iter()
        .find(|(label, _)| fold_case(label) == folded)
        .map(|(_, section)| *section)
}

pub fn is_section_label(line: &str) -> bool {
    section_label(line).is_some()
}

/// Lines that close the itinerary: `***` markers and "end of service"
pub fn is_terminator(line: &str) -> bool {
    let line = line.trim();
    if line.starts_with(SENTINEL_PREFIX) {
        return true;
    }
    let folded = fold_case(line);
    TERMINATOR_PHRASES
        .iter()
        .any(|phrase| folded.starts_with(fold_case(phrase).as_str()))
}

/// True for lines that start like a day header even if they do not parse
pub fn looks_like_day_header(line: &str) -> bool {
    DAY_PREFIX_PATTERN.is_match(line.trim())
}
