//! Hotel and pricing table parsing
//!
//! Tables are recognised by the first cell of their header row. Hotel tables
//! list one city per row with a hotel column per tier; pricing tables list one
//! group size (or supplement/child rate) per row with a price column per tier.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::vocabulary::{
    CHILD_TOKENS, HOTEL_TABLE_KEYS, PAX_TOKENS, PRICING_TABLE_KEYS, SINGLE_TOKENS,
    contains_keyword, fold_case,
};
use crate::document::cleanup::collapse_whitespace;
use crate::document::models::TableData;
use crate::package::models::{
    ChildRates, HotelTier, Hotels, PaxTier, Pricing, RoomRate, TierValues,
};

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Hotels,
    Pricing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildBand {
    Age0To6,
    Age6To12,
}

/// What a pricing row's label selects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRow {
    Pax(PaxTier),
    SingleSupplement,
    Child(ChildBand),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTables {
    pub hotels: Hotels,
    pub pricing: Pricing,
}

/// Identify a table from its header cell; tables under two rows are skipped
pub fn classify_table(table: &TableData) -> Option<TableKind> {
    if table.metadata.row_count < 2 {
        return None;
    }

    let key = fold_case(table.header_key()?);
    if HOTEL_TABLE_KEYS.iter().any(|k| contains_keyword(&key, k)) {
        Some(TableKind::Hotels)
    } else if PRICING_TABLE_KEYS.iter().any(|k| contains_keyword(&key, k)) {
        Some(TableKind::Pricing)
    } else {
        None
    }
}

/// Parse every recognised table of a document
pub fn parse_tables(tables: &[TableData]) -> ParsedTables {
    let mut parsed = ParsedTables::default();

    for table in tables {
        match classify_table(table) {
            Some(TableKind::Hotels) => parse_hotel_table(table, &mut parsed.hotels),
            Some(TableKind::Pricing) => parse_pricing_table(table, &mut parsed.pricing),
            None => {
                debug!(
                    header = ?table.header_key(),
                    rows = table.metadata.row_count,
                    columns = table.metadata.column_count,
                    "skipping unrecognised table"
                );
            }
        }
    }

    parsed
}

pub fn parse_hotel_table(table: &TableData, hotels: &mut Hotels) {
    for row in table.body() {
        if row.len() < 4 {
            continue;
        }

        let city = row[0].trim();
        if city.is_empty() {
            continue;
        }

        for (tier, cell) in HotelTier::ALL.into_iter().zip(&row[1..4]) {
            let names = collapse_whitespace(cell);
            if !names.is_empty() {
                hotels.get_mut(tier).push(format!("{city}: {names}"));
            }
        }
    }
}

pub fn parse_pricing_table(table: &TableData, pricing: &mut Pricing) {
    for row in table.body() {
        if row.len() < 4 {
            continue;
        }

        let label = row[0].trim().to_uppercase();
        let prices = TierValues::from_fn(|tier| match tier {
            HotelTier::ThreeStar => extract_price(&row[1]),
            HotelTier::FourStar => extract_price(&row[2]),
            HotelTier::FiveStar => extract_price(&row[3]),
        });

        match classify_price_label(&label) {
            Some(PriceRow::Pax(tier)) => {
                // Last row for a group size wins
                pricing.pax_tiers.insert(
                    tier,
                    TierValues::from_fn(|t| RoomRate {
                        double: *prices.get(t),
                        single_supplement: 0,
                    }),
                );
            }
            Some(PriceRow::SingleSupplement) => {
                apply_single_supplement(pricing, &prices);
            }
            Some(PriceRow::Child(band)) => {
                let rates: &mut ChildRates = &mut pricing.child_rates;
                match band {
                    ChildBand::Age0To6 => rates.age0to6 = prices,
                    ChildBand::Age6To12 => rates.age6to12 = prices,
                }
            }
            None => {
                debug!(%label, "unrecognised pricing row");
            }
        }
    }
}

/// Set the single supplement on every group size seen so far
fn apply_single_supplement(pricing: &mut Pricing, prices: &TierValues<u32>) {
    for rates in pricing.pax_tiers.values_mut() {
        for tier in HotelTier::ALL {
            rates.get_mut(tier).single_supplement = *prices.get(tier);
        }
    }
}

/// Route an upper-cased row label. A child label with an age band wins over
/// group sizes, and group sizes win over the supplement.
pub fn classify_price_label(label: &str) -> Option<PriceRow> {
    if CHILD_TOKENS.iter().any(|token| label.contains(token)) {
        if label.contains("0-6") {
            return Some(PriceRow::Child(ChildBand::Age0To6));
        }
        if label.contains("6-12") || label.contains("12") {
            return Some(PriceRow::Child(ChildBand::Age6To12));
        }
    }

    if PAX_TOKENS.iter().any(|token| label.contains(token)) {
        let numbers: Vec<u32> = DIGITS
            .find_iter(label)
            .filter_map(|m| m.as_str().parse().ok())
            .collect();
        if let Some(tier) = PaxTier::MATCH_ORDER
            .into_iter()
            .find(|tier| numbers.contains(&tier.count()))
        {
            return Some(PriceRow::Pax(tier));
        }
    }

    if SINGLE_TOKENS.iter().any(|token| label.contains(token)) {
        return Some(PriceRow::SingleSupplement);
    }

    None
}

/// First integer in a price cell after removing thousands separators; 0 when
/// there is none
pub fn extract_price(cell: &str) -> u32 {
    let cleaned: String = cell.chars().filter(|c| *c != ',' && *c != '.').collect();
    DIGITS
        .find(&cleaned)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
