//! Keyword vocabulary used by the classifiers
//!
//! Everything the extractor recognises by wording lives here as data: the
//! section labels, terminators, day header patterns, table keywords, pricing
//! label tokens and the per-region city maps. Control flow in the parsers
//! only ever consults these tables.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::package::models::Region;

/// Bumped whenever an entry is added, removed or changes meaning
pub const VOCABULARY_VERSION: u32 = 1;

/// Logical section a document line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    None,
    Itinerary,
    Included,
    NotIncluded,
    Information,
    Hotels,
    Pricing,
}

/// Lowercase `text` for keyword comparison.
///
/// `İ` lowercases to `i` plus a combining dot (U+0307) and `ı` has no
/// ASCII counterpart, so both end up as a plain `i`. All vocabulary
/// comparisons fold both sides with this.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| *c != '\u{0307}')
        .map(|c| if c == 'ı' { 'i' } else { c })
        .collect()
}

/// True when folded `haystack` contains `keyword` under the same folding
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    haystack.contains(fold_case(keyword).as_str())
}

/// Whole-line section labels, compared case-folded (English and Turkish)
pub const SECTION_LABELS: &[(&str, Section)] = &[
    ("inclusions", Section::Included),
    ("dahil olan hizmetler", Section::Included),
    ("exclusions", Section::NotIncluded),
    ("dahil olmayan hizmetler", Section::NotIncluded),
    ("information", Section::Information),
    ("important information", Section::Information),
    ("bilgilendirme", Section::Information),
    ("önemli bilgiler", Section::Information),
    ("hotel options", Section::Hotels),
    ("otel seçenekleri", Section::Hotels),
    ("hotel information", Section::Hotels),
    ("package rates", Section::Pricing),
    ("paket fiyatları", Section::Pricing),
];

/// Literal line prefix that ends the itinerary
pub const SENTINEL_PREFIX: &str = "***";

/// Lowercased phrases that end the itinerary when a line starts with them
pub const TERMINATOR_PHRASES: &[&str] = &["end of service", "hizmetlerimizin sonu"];

/// Day header spellings, tried in order; captures are (day, title, meals)
pub static DAY_HEADER_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // "Day 1 - Arrival (D)", also with tabs before the meal group
        Regex::new(r"(?i)^Day\s*(\d+)\s*[-–]\s*(.+?)\s*\(([^)]*)\)").unwrap(),
        // "1. Gün - Varış (A)" / "1. Day - Arrival (D)"
        Regex::new(r"(?i)^(\d+)\.\s*(?:Gün|Day)\s*[-–]\s*(.+?)\s*\(([^)]*)\)").unwrap(),
    ]
});

/// Start of a day header, whether or not the rest of the line parses
pub static DAY_PREFIX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:Day\s*\d+|\d+\.\s*(?:Gün|Day))").unwrap());

/// "7 Nights / 8 Days", "3 Gece / 4 Gün"
pub static DURATION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\d+\s*(?:nights?|gece)\s*/\s*\d+\s*(?:days?|gün)").unwrap()
});

/// Night count inside a duration label
pub static NIGHTS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:nights?|gece)").unwrap());

/// First-cell keywords (lowercased) of a hotel options table
pub const HOTEL_TABLE_KEYS: &[&str] = &["city", "şehir", "location", "lokasyon"];

/// First-cell keywords (lowercased) of a pricing table
pub const PRICING_TABLE_KEYS: &[&str] = &["pax", "kişi", "person", "dbl"];

/// Upper-cased tokens marking a per-group-size price row
pub const PAX_TOKENS: &[&str] = &["PAX", "KİŞİ", "KIŞI"];

/// Upper-cased tokens marking the single supplement row
pub const SINGLE_TOKENS: &[&str] = &["SINGLE", "TEK"];

/// Upper-cased tokens marking a child rate row
pub const CHILD_TOKENS: &[&str] = &["CHILD", "ÇOCUK"];

/// Lowercased day-title keywords that make a day a highlight
pub const HIGHLIGHT_KEYWORDS: &[&str] = &["tour", "visit", "explore", "cruise"];

/// Region-specific wording
#[derive(Debug)]
pub struct RegionProfile {
    pub region: Region,
    /// Lowercased keywords identifying the document's title line
    pub title_keywords: &'static [&'static str],
    /// Lowercased city keyword → canonical city name, in scan order
    pub city_map: &'static [(&'static str, &'static str)],
    /// Destination used when no city is recognised
    pub fallback_destination: &'static str,
    /// Opening of the description, followed by " {destinations} with this {duration} package."
    pub description_opening: &'static str,
    /// Spanish opening, followed by " {destinations} con este paquete de {duration}."
    pub description_opening_es: &'static str,
    /// Highlights used when no day title qualifies; `{}` is the destinations
    pub fallback_highlights: &'static [&'static str],
}

pub static TURKEY: RegionProfile = RegionProfile {
    region: Region::Turkey,
    title_keywords: &["package", "paket"],
    city_map: &[
        ("istanbul", "Istanbul"),
        ("cappadocia", "Cappadocia"),
        ("kusadasi", "Kusadasi"),
        ("antalya", "Antalya"),
        ("ephesus", "Ephesus"),
        ("pamukkale", "Pamukkale"),
        ("bodrum", "Bodrum"),
        ("fethiye", "Fethiye"),
    ],
    fallback_destination: "Turkey",
    description_opening: "Experience the best of",
    description_opening_es: "Experimente lo mejor de",
    fallback_highlights: &[
        "Explore {}",
        "Professional English-speaking guide",
        "All transfers included",
        "Quality hotel accommodations",
    ],
};

pub static EUROPE: RegionProfile = RegionProfile {
    region: Region::Europe,
    title_keywords: &[
        "budapest",
        "vienna",
        "prague",
        "zagreb",
        "split",
        "dubrovnik",
        "helsinki",
        "rovaniemi",
        "finland",
        "croatia",
        "hungary",
        "austria",
        "czech",
    ],
    city_map: &[
        ("budapest", "Budapest"),
        ("vienna", "Vienna"),
        ("prague", "Prague"),
        ("zagreb", "Zagreb"),
        ("split", "Split"),
        ("dubrovnik", "Dubrovnik"),
        ("helsinki", "Helsinki"),
        ("rovaniemi", "Rovaniemi"),
        ("hvar", "Hvar"),
    ],
    fallback_destination: "Europe",
    description_opening: "Discover the beauty of",
    description_opening_es: "Descubra la belleza de",
    fallback_highlights: &[
        "Explore {}",
        "Professional English-speaking guide",
        "Private airport transfers",
        "Quality 4-star hotel accommodations",
    ],
};

pub fn profile(region: Region) -> &'static RegionProfile {
    match region {
        Region::Turkey => &TURKEY,
        Region::Europe => &EUROPE,
    }
}
