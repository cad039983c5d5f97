//! Paragraph stream parser
//!
//! Walks the document's paragraph lines in order and accumulates the
//! day-by-day itinerary, the inclusion/exclusion/information lists, and the
//! raw title and duration labels.

use tracing::debug;

use super::classifier::{
    LineKind, classify_line, is_section_label, is_terminator, looks_like_day_header,
};
use super::vocabulary::{
    DURATION_PATTERN, RegionProfile, Section, contains_keyword, fold_case,
};
use crate::document::cleanup::strip_trailing_punctuation;
use crate::package::models::DayEntry;

/// Everything recovered from the paragraph stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedText {
    pub source_title: Option<String>,
    pub duration: Option<String>,
    pub itinerary: Vec<DayEntry>,
    pub included: Vec<String>,
    pub not_included: Vec<String>,
    pub information: Vec<String>,
}

pub struct ItineraryParser<'a> {
    profile: &'a RegionProfile,
    section: Section,
    /// Index into `parsed.itinerary` of the day receiving description text
    current_day: Option<usize>,
    parsed: ParsedText,
}

impl<'a> ItineraryParser<'a> {
    pub fn new(profile: &'a RegionProfile) -> Self {
        Self {
            profile,
            section: Section::None,
            current_day: None,
            parsed: ParsedText::default(),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Feed one paragraph line
    pub fn feed(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        match classify_line(line) {
            LineKind::DayHeader(day) => {
                self.parsed.itinerary.push(day);
                self.current_day = Some(self.parsed.itinerary.len() - 1);
                self.section = Section::Itinerary;
                return;
            }
            LineKind::SectionLabel(section) => {
                debug!(?section, "section label");
                self.section = section;
                return;
            }
            LineKind::Terminator | LineKind::Text => {}
        }

        if self.parsed.source_title.is_none() && self.is_title_line(line) {
            self.parsed.source_title = Some(line.to_string());
            return;
        }

        if self.parsed.duration.is_none() && DURATION_PATTERN.is_match(line) {
            self.parsed.duration = Some(line.to_string());
            return;
        }

        match self.section {
            Section::Itinerary => self.continue_day(line),
            Section::Included => push_list_entry(&mut self.parsed.included, line, true),
            Section::NotIncluded => push_list_entry(&mut self.parsed.not_included, line, true),
            Section::Information => push_list_entry(&mut self.parsed.information, line, false),
            Section::None | Section::Hotels | Section::Pricing => {}
        }
    }

    pub fn finish(self) -> ParsedText {
        self.parsed
    }

    fn is_title_line(&self, line: &str) -> bool {
        let folded = fold_case(line);
        self.profile
            .title_keywords
            .iter()
            .any(|keyword| contains_keyword(&folded, keyword))
    }

    fn continue_day(&mut self, line: &str) {
        let Some(index) = self.current_day else {
            return;
        };

        if is_terminator(line) {
            self.current_day = None;
            self.section = Section::None;
            return;
        }

        // A malformed header is not description text
        if looks_like_day_header(line) {
            return;
        }

        let description = &mut self.parsed.itinerary[index].description;
        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(line);
    }
}

fn push_list_entry(list: &mut Vec<String>, line: &str, strip_punctuation: bool) {
    if is_terminator(line) {
        return;
    }

    let entry = if strip_punctuation {
        strip_trailing_punctuation(line).trim_end()
    } else {
        line
    };

    if entry.is_empty() || is_section_label(entry) {
        return;
    }

    list.push(entry.to_string());
}

/// Parse a whole paragraph stream
pub fn parse_paragraphs<I, S>(lines: I, profile: &RegionProfile) -> ParsedText
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = ItineraryParser::new(profile);
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}
