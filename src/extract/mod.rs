//! Package extraction
//!
//! Turns a [`SourceDocument`](crate::document::SourceDocument) into the
//! structured pieces of a package: itinerary and lists from the paragraph
//! stream, hotels and pricing from the tables, and the derived destination,
//! title, description and highlights.

pub mod classifier;
pub mod derive;
pub mod itinerary;
pub mod slug;
pub mod tables;
pub mod vocabulary;

pub use classifier::{LineKind, classify_line, parse_day_header};
pub use itinerary::{ParsedText, parse_paragraphs};
pub use slug::slugify;
pub use tables::{ParsedTables, extract_price, parse_tables};
pub use vocabulary::{RegionProfile, Section, VOCABULARY_VERSION, profile};
