//! Destination, title, description and highlight derivation

use unicode_segmentation::UnicodeSegmentation;

use super::vocabulary::{
    HIGHLIGHT_KEYWORDS, NIGHTS_PATTERN, RegionProfile, contains_keyword, fold_case,
};
use crate::package::models::{DayEntry, PackageType, TourType};

/// Length of the first-day excerpt appended to descriptions
pub const EXCERPT_GRAPHEMES: usize = 200;

pub const MAX_HIGHLIGHTS: usize = 5;

/// Canonical cities mentioned in the title, then in the day titles, each
/// once in first-seen order. Falls back to the region name.
pub fn derive_destinations(
    raw_title: &str,
    itinerary: &[DayEntry],
    profile: &RegionProfile,
) -> Vec<String> {
    let mut destinations: Vec<String> = Vec::new();

    let mut scan = |text: &str| {
        let folded = fold_case(text);
        for (keyword, city) in profile.city_map {
            if contains_keyword(&folded, keyword) && !destinations.iter().any(|d| d == city) {
                destinations.push((*city).to_string());
            }
        }
    };

    scan(raw_title);
    for day in itinerary {
        scan(&day.title);
    }

    if destinations.is_empty() {
        destinations.push(profile.fallback_destination.to_string());
    }
    destinations
}

/// "A", "A & B", "A, B & C"
pub fn destination_phrase(destinations: &[String]) -> String {
    match destinations {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} & {second}"),
        [init @ .., last] => format!("{} & {last}", init.join(", ")),
    }
}

/// Night count from a duration label such as "7 Nights / 8 Days"
pub fn nights_in(duration: &str) -> Option<&str> {
    NIGHTS_PATTERN
        .captures(duration)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

pub fn synthesize_title(
    destinations: &[String],
    duration: &str,
    tour_type: TourType,
    package_type: PackageType,
) -> String {
    let phrase = destination_phrase(destinations);
    let tour_label = match tour_type {
        TourType::Sic => "Group Tour",
        TourType::Private => "Private Tour",
    };
    let suffix = match package_type {
        PackageType::LandOnly => " - Land Only",
        PackageType::WithHotel => "",
    };

    match nights_in(duration) {
        Some(nights) => format!("{phrase} {nights} Nights {tour_label}{suffix}"),
        None => format!("{phrase} {tour_label}{suffix}"),
    }
}

/// First `EXCERPT_GRAPHEMES` grapheme clusters of a day description
pub fn excerpt(text: &str) -> &str {
    match text.grapheme_indices(true).nth(EXCERPT_GRAPHEMES) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Template sentence plus an excerpt of the first day; empty without an
/// itinerary
pub fn synthesize_description(
    destinations: &str,
    duration: &str,
    itinerary: &[DayEntry],
    profile: &RegionProfile,
) -> String {
    let Some(first_day) = itinerary.first() else {
        return String::new();
    };

    let mut description = format!(
        "{} {destinations} with this {duration} package.",
        profile.description_opening
    );
    if !first_day.description.is_empty() {
        description.push(' ');
        description.push_str(excerpt(&first_day.description));
        description.push_str("...");
    }
    description
}

/// Day titles that name an activity, or the region's generic list
pub fn derive_highlights(
    itinerary: &[DayEntry],
    destinations: &str,
    profile: &RegionProfile,
) -> Vec<String> {
    let highlights: Vec<String> = itinerary
        .iter()
        .filter(|day| {
            let folded = fold_case(&day.title);
            HIGHLIGHT_KEYWORDS.iter().any(|k| contains_keyword(&folded, k))
        })
        .take(MAX_HIGHLIGHTS)
        .map(|day| day.title.clone())
        .collect();

    if !highlights.is_empty() {
        return highlights;
    }

    profile
        .fallback_highlights
        .iter()
        .map(|template| template.replace("{}", destinations))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::vocabulary::{EUROPE, TURKEY};
    use pretty_assertions::assert_eq;

    fn day(title: &str, description: &str) -> DayEntry {
        DayEntry {
            day_number: 1,
            title: title.to_string(),
            description: description.to_string(),
            meals_code: "B".to_string(),
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_destinations_are_deduplicated_in_first_seen_order() {
        let destinations = derive_destinations(
            "Istanbul Package - Istanbul Old City & Cappadocia",
            &[],
            &TURKEY,
        );
        assert_eq!(destinations, strings(&["Istanbul", "Cappadocia"]));
    }

    #[test]
    fn test_title_then_itinerary_scan() {
        let destinations = derive_destinations(
            "Cappadocia Highlights Package",
            &[
                day("Fly to Istanbul", ""),
                day("Ephesus & Pamukkale", ""),
                day("Istanbul Free Day", ""),
            ],
            &TURKEY,
        );
        // within one text, map order decides (ephesus before pamukkale)
        assert_eq!(
            destinations,
            strings(&["Cappadocia", "Istanbul", "Ephesus", "Pamukkale"])
        );
    }

    #[test]
    fn test_uppercase_turkish_city_names() {
        let destinations = derive_destinations(
            "İSTANBUL PAKETİ",
            &[day("KAPADOKYA & ANTALYA TURU", "")],
            &TURKEY,
        );
        assert_eq!(destinations, strings(&["Istanbul", "Antalya"]));
    }

    #[test]
    fn test_fallback_destination() {
        assert_eq!(derive_destinations("", &[], &TURKEY), strings(&["Turkey"]));
        assert_eq!(derive_destinations("Grand Tour", &[], &EUROPE), strings(&["Europe"]));
    }

    #[test]
    fn test_destination_phrase() {
        assert_eq!(destination_phrase(&strings(&["Istanbul"])), "Istanbul");
        assert_eq!(
            destination_phrase(&strings(&["Istanbul", "Cappadocia"])),
            "Istanbul & Cappadocia"
        );
        assert_eq!(
            destination_phrase(&strings(&["Budapest", "Vienna", "Prague", "Zagreb"])),
            "Budapest, Vienna, Prague & Zagreb"
        );
    }

    #[test]
    fn test_synthesized_titles() {
        let dest = strings(&["Istanbul", "Cappadocia", "Kusadasi"]);
        assert_eq!(
            synthesize_title(&dest, "7 Nights / 8 Days", TourType::Sic, PackageType::WithHotel),
            "Istanbul, Cappadocia & Kusadasi 7 Nights Group Tour"
        );
        assert_eq!(
            synthesize_title(
                &dest[..1],
                "3 Gece / 4 Gün",
                TourType::Private,
                PackageType::LandOnly
            ),
            "Istanbul 3 Nights Private Tour - Land Only"
        );
        assert_eq!(
            synthesize_title(&dest[..2], "", TourType::Private, PackageType::WithHotel),
            "Istanbul & Cappadocia Private Tour"
        );
    }

    #[test]
    fn test_description() {
        let itinerary = vec![day("Arrival", "Welcome to Istanbul.")];
        assert_eq!(
            synthesize_description("Istanbul", "3 Nights / 4 Days", &itinerary, &TURKEY),
            "Experience the best of Istanbul with this 3 Nights / 4 Days package. \
             Welcome to Istanbul...."
        );
        assert_eq!(
            synthesize_description("Istanbul", "3 Nights / 4 Days", &[], &TURKEY),
            ""
        );
        assert_eq!(
            synthesize_description("Vienna", "2 Nights / 3 Days", &[day("Arrival", "")], &EUROPE),
            "Discover the beauty of Vienna with this 2 Nights / 3 Days package."
        );
    }

    #[test]
    fn test_excerpt_is_truncated_on_grapheme_boundaries() {
        let long = "é".repeat(250);
        assert_eq!(excerpt(&long).chars().count(), 200);
        assert_eq!(excerpt("short"), "short");
    }

    #[test]
    fn test_highlights() {
        let itinerary = vec![
            day("Arrival", ""),
            day("Full Day Old City Tour", ""),
            day("Visit Ephesus", ""),
            day("Bosphorus Cruise", ""),
            day("Explore Cappadocia", ""),
            day("Turkish Bath Tour", ""),
            day("Jeep Tour", ""),
        ];
        let highlights = derive_highlights(&itinerary, "Istanbul", &TURKEY);
        assert_eq!(highlights.len(), 5);
        assert_eq!(highlights[0], "Full Day Old City Tour");
        assert_eq!(highlights[4], "Turkish Bath Tour");
    }

    #[test]
    fn test_fallback_highlights() {
        let highlights = derive_highlights(&[day("Arrival", "")], "Istanbul, Cappadocia", &TURKEY);
        assert_eq!(highlights[0], "Explore Istanbul, Cappadocia");
        assert_eq!(highlights.len(), 4);
    }
}
