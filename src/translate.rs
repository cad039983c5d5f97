//! Spanish variant of the human-readable package fields
//!
//! Each phrase table is compiled into a single regex alternation, longest
//! phrase first and bounded by word boundaries, and applied with one
//! `replace_all`. Replacement text is never scanned again, so a substitution
//! cannot be re-translated by a later entry (meal codes `B/L/D` become
//! `D/A/C`, not `C/A/C`).

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

use crate::extract::derive::excerpt;
use crate::extract::vocabulary::RegionProfile;
use crate::package::models::DayEntry;

/// Common tourism vocabulary, matched case-insensitively
const GENERAL: &[(&str, &str)] = &[
    // Tour types
    ("Group Tour", "Tour en Grupo"),
    ("Private Tour", "Tour Privado"),
    ("Land Only", "Solo Terrestre"),
    ("Nights", "Noches"),
    // Meals
    ("Breakfast", "Desayuno"),
    ("Lunch", "Almuerzo"),
    ("Dinner", "Cena"),
    // Common terms
    ("Day", "Día"),
    ("Arrival", "Llegada"),
    ("Departure", "Salida"),
    ("Transfer", "Traslado"),
    ("Full Day", "Día Completo"),
    ("Half Day", "Medio Día"),
    ("Free Day", "Día Libre"),
    ("at leisure", "tiempo libre"),
    ("airport", "aeropuerto"),
    ("cruise", "crucero"),
    ("visit", "visitar"),
    ("explore", "explorar"),
    // Cities
    ("Istanbul", "Estambul"),
    ("Cappadocia", "Capadocia"),
    ("Ephesus", "Éfeso"),
    ("Vienna", "Viena"),
    ("Prague", "Praga"),
    // Inclusions
    ("nights accommodation", "noches de alojamiento"),
    ("Meals as per itinerary", "Comidas según itinerario"),
    ("Return airport transfers", "Traslados de ida y vuelta al aeropuerto"),
    ("Private basis", "base privada"),
    (
        "Professional English-Speaking Guidance",
        "Guía profesional de habla inglesa",
    ),
    ("Group Tours", "Tours en grupo"),
    ("entrance fees", "entradas incluidas"),
    ("Local Taxes", "Impuestos locales"),
    // Exclusions
    ("Flights", "Vuelos"),
    ("Personal expenses", "Gastos personales"),
    ("Drinks at meals", "Bebidas en las comidas"),
    ("Tips", "Propinas"),
    ("porterage", "maleteros"),
    ("driver", "conductor"),
    ("guide", "guía"),
];

const TITLE: &[(&str, &str)] = &[
    ("Nights Group Tour", "Noches Tour en Grupo"),
    ("Nights Private Tour", "Noches Tour Privado"),
    ("Group Tour", "Tour en Grupo"),
    ("Private Tour", "Tour Privado"),
    ("Land Only", "Solo Terrestre"),
    ("Istanbul", "Estambul"),
    ("Cappadocia", "Capadocia"),
    ("Ephesus", "Éfeso"),
    ("Vienna", "Viena"),
    ("Prague", "Praga"),
];

const DAY_TITLE: &[(&str, &str)] = &[
    ("Fly", "Vuelo"),
    ("Full Day Tour", "Tour de Día Completo"),
    ("Half Day Tour", "Tour de Medio Día"),
    ("Free Day", "Día Libre"),
    ("Arrival", "Llegada"),
    ("Departure", "Salida"),
    ("Istanbul", "Estambul"),
    ("Cappadocia", "Capadocia"),
    ("Ephesus", "Éfeso"),
    ("Bosphorus Cruise", "Crucero por el Bósforo"),
];

const DESCRIPTION: &[(&str, &str)] = &[
    ("After breakfast at the hotel", "Después del desayuno en el hotel"),
    ("After breakfast", "Después del desayuno"),
    ("Arrive to", "Llegada a"),
    ("Arrival transfer to the hotel", "Traslado de llegada al hotel"),
    ("check-in", "registro"),
    ("The rest of the day is free", "El resto del día es libre"),
    ("at leisure", "tiempo libre"),
    ("guided tour", "tour guiado"),
    ("your tour will start", "su tour comenzará"),
    ("departure airport transfer", "traslado al aeropuerto de salida"),
    ("overnight", "pernocte"),
    ("Overnight", "Pernocte"),
    // Places
    ("Istanbul", "Estambul"),
    ("Cappadocia", "Capadocia"),
    ("Ephesus", "Éfeso"),
    ("Blue Mosque", "Mezquita Azul"),
    ("Topkapi Palace", "Palacio de Topkapi"),
    ("Grand Bazaar", "Gran Bazar"),
    ("Spice Bazaar", "Bazar de las Especias"),
    ("Bosphorus", "Bósforo"),
    ("St.Sophia", "Santa Sofía"),
    ("Hagia Sophia", "Santa Sofía"),
    ("Hippodrome", "Hipódromo"),
];

const DURATION: &[(&str, &str)] = &[
    ("Nights", "Noches"),
    ("Night", "Noche"),
    ("Days", "Días"),
    ("Day", "Día"),
];

/// Breakfast/Lunch/Dinner initials to Desayuno/Almuerzo/Cena
const MEAL_CODES: &[(&str, &str)] = &[("B", "D"), ("L", "A"), ("D", "C")];

/// A compiled find→replace table applied in one pass
pub struct PhraseTable {
    pattern: Regex,
    replacements: HashMap<String, &'static str>,
    case_insensitive: bool,
}

impl PhraseTable {
    pub fn new(pairs: &'static [(&'static str, &'static str)], case_insensitive: bool) -> Self {
        let mut phrases: Vec<&str> = pairs.iter().map(|(from, _)| *from).collect();
        // Leftmost-first alternation: longer phrases must be tried first
        phrases.sort_by_key(|phrase| std::cmp::Reverse(phrase.chars().count()));

        let alternation = phrases
            .iter()
            .map(|phrase| regex::escape(phrase))
            .collect::<Vec<_>>()
            .join("|");
        let flags = if case_insensitive { "(?i)" } else { "" };
        let pattern = Regex::new(&format!(r"{flags}\b(?:{alternation})\b")).unwrap();

        let replacements = pairs
            .iter()
            .map(|(from, to)| (Self::key(from, case_insensitive), *to))
            .collect();

        Self {
            pattern,
            replacements,
            case_insensitive,
        }
    }

    fn key(text: &str, case_insensitive: bool) -> String {
        if case_insensitive {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |captures: &Captures| {
                let matched = &captures[0];
                self.replacements
                    .get(&Self::key(matched, self.case_insensitive))
                    .map(|to| (*to).to_string())
                    .unwrap_or_else(|| matched.to_string())
            })
            .into_owned()
    }
}

static GENERAL_TABLE: Lazy<PhraseTable> = Lazy::new(|| PhraseTable::new(GENERAL, true));
static TITLE_TABLE: Lazy<PhraseTable> = Lazy::new(|| PhraseTable::new(TITLE, false));
static DAY_TITLE_TABLE: Lazy<PhraseTable> = Lazy::new(|| PhraseTable::new(DAY_TITLE, false));
static DESCRIPTION_TABLE: Lazy<PhraseTable> =
    Lazy::new(|| PhraseTable::new(DESCRIPTION, false));
static DURATION_TABLE: Lazy<PhraseTable> = Lazy::new(|| PhraseTable::new(DURATION, false));
static MEAL_TABLE: Lazy<PhraseTable> = Lazy::new(|| PhraseTable::new(MEAL_CODES, false));

pub fn translate_general(text: &str) -> String {
    GENERAL_TABLE.apply(text)
}

pub fn translate_title(title: &str) -> String {
    TITLE_TABLE.apply(title)
}

pub fn translate_day_title(title: &str) -> String {
    DAY_TITLE_TABLE.apply(title)
}

pub fn translate_description(description: &str) -> String {
    DESCRIPTION_TABLE.apply(description)
}

pub fn translate_duration(duration: &str) -> String {
    DURATION_TABLE.apply(duration)
}

pub fn translate_meals(meals: &str) -> String {
    let meals = meals.trim();
    if meals.is_empty() || meals == "-" {
        return "-".to_string();
    }
    MEAL_TABLE.apply(meals)
}

pub fn translate_list(items: &[String]) -> Vec<String> {
    items.iter().map(|item| translate_general(item)).collect()
}

pub fn translate_itinerary(itinerary: &[DayEntry]) -> Vec<DayEntry> {
    itinerary
        .iter()
        .map(|day| DayEntry {
            day_number: day.day_number,
            title: translate_day_title(&day.title),
            description: translate_description(&day.description),
            meals_code: translate_meals(&day.meals_code),
        })
        .collect()
}

/// Spanish counterpart of the derived description
pub fn translate_package_description(
    destinations: &str,
    duration: &str,
    itinerary: &[DayEntry],
    profile: &RegionProfile,
) -> String {
    let Some(first_day) = itinerary.first() else {
        return String::new();
    };

    let mut description = format!(
        "{} {} con este paquete de {}.",
        profile.description_opening_es,
        translate_general(destinations),
        translate_duration(duration)
    );
    if !first_day.description.is_empty() {
        description.push(' ');
        description.push_str(&translate_description(excerpt(&first_day.description)));
        description.push_str("...");
    }
    description
}
