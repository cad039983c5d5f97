//! Package record data model
//!
//! These types define the canonical JSON shape of the package corpus. Key
//! names are camelCase to stay compatible with the corpus consumed by the
//! website.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PackageType {
    #[default]
    WithHotel,
    LandOnly,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TourType {
    /// Seat-in-coach group tours
    #[default]
    Sic,
    Private,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferType {
    #[default]
    Private,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Region {
    #[default]
    Turkey,
    Europe,
}

impl TourType {
    pub fn as_str(self) -> &'static str {
        match self {
            TourType::Sic => "SIC",
            TourType::Private => "PRIVATE",
        }
    }
}

impl Region {
    pub const ALL: [Region; 2] = [Region::Turkey, Region::Europe];

    pub fn name(self) -> &'static str {
        match self {
            Region::Turkey => "Turkey",
            Region::Europe => "Europe",
        }
    }

    /// Prefix every package id of this region starts with, if the region
    /// has a dedicated one
    pub fn id_prefix(self) -> Option<&'static str> {
        match self {
            Region::Turkey => None,
            Region::Europe => Some("EUR-"),
        }
    }

    /// Region a package id belongs to when the record carries no `region`
    pub fn from_package_id(package_id: &str) -> Region {
        Region::ALL
            .into_iter()
            .find(|region| {
                region
                    .id_prefix()
                    .is_some_and(|prefix| package_id.starts_with(prefix))
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Hotel quality classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelTier {
    ThreeStar,
    FourStar,
    FiveStar,
}

impl HotelTier {
    /// Tiers in the column order used by hotel and pricing tables
    pub const ALL: [HotelTier; 3] = [HotelTier::ThreeStar, HotelTier::FourStar, HotelTier::FiveStar];
}

/// One value per hotel tier
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierValues<T> {
    pub threestar: T,
    pub fourstar: T,
    pub fivestar: T,
}

impl<T> TierValues<T> {
    pub fn from_fn(mut f: impl FnMut(HotelTier) -> T) -> Self {
        Self {
            threestar: f(HotelTier::ThreeStar),
            fourstar: f(HotelTier::FourStar),
            fivestar: f(HotelTier::FiveStar),
        }
    }

    pub fn get(&self, tier: HotelTier) -> &T {
        match tier {
            HotelTier::ThreeStar => &self.threestar,
            HotelTier::FourStar => &self.fourstar,
            HotelTier::FiveStar => &self.fivestar,
        }
    }

    pub fn get_mut(&mut self, tier: HotelTier) -> &mut T {
        match tier {
            HotelTier::ThreeStar => &mut self.threestar,
            HotelTier::FourStar => &mut self.fourstar,
            HotelTier::FiveStar => &mut self.fivestar,
        }
    }
}

pub type Hotels = TierValues<Vec<String>>;

/// Traveler-group size a price applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaxTier {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "10")]
    Ten,
}

impl PaxTier {
    /// Matching order for table labels: larger counts first so "10" is
    /// never read as a smaller tier
    pub const MATCH_ORDER: [PaxTier; 5] = [
        PaxTier::Ten,
        PaxTier::Eight,
        PaxTier::Six,
        PaxTier::Four,
        PaxTier::Two,
    ];

    pub fn count(self) -> u32 {
        match self {
            PaxTier::Two => 2,
            PaxTier::Four => 4,
            PaxTier::Six => 6,
            PaxTier::Eight => 8,
            PaxTier::Ten => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomRate {
    pub double: u32,
    pub single_supplement: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChildRates {
    pub age0to6: TierValues<u32>,
    pub age6to12: TierValues<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pricing {
    pub pax_tiers: BTreeMap<PaxTier, TierValues<RoomRate>>,
    pub child_rates: ChildRates,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayEntry {
    #[serde(rename = "day")]
    pub day_number: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "meals")]
    pub meals_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageRecord {
    pub package_id: String,
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_title: Option<String>,
    pub duration: String,
    pub description: String,
    pub itinerary: Vec<DayEntry>,
    pub included: Vec<String>,
    pub not_included: Vec<String>,
    pub information: Vec<String>,
    pub highlights: Vec<String>,
    pub hotels: Hotels,
    pub pricing: Pricing,
    pub destinations: String,
    pub package_type: PackageType,
    pub tour_type: TourType,
    pub transfer_type: TransferType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    pub image: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_es: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_es: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary_es: Option<Vec<DayEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_es: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_included_es: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights_es: Option<Vec<String>>,

    /// Keys written by other tools, kept as-is across merges
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PackageRecord {
    /// Region from the record, or inferred from its id prefix
    pub fn resolved_region(&self) -> Region {
        self.region
            .unwrap_or_else(|| Region::from_package_id(&self.package_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_pax_tiers_serialize_in_numeric_order() {
        let mut pricing = Pricing::default();
        pricing.pax_tiers.insert(PaxTier::Ten, TierValues::default());
        pricing.pax_tiers.insert(PaxTier::Two, TierValues::default());

        let text = serde_json::to_string(&pricing).unwrap();
        assert!(text.find("\"2\"").unwrap() < text.find("\"10\"").unwrap());

        let value = serde_json::to_value(&pricing).unwrap();
        assert_eq!(value["childRates"]["age0to6"]["fivestar"], json!(0));
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(PackageType::LandOnly).unwrap(), json!("LAND_ONLY"));
        assert_eq!(serde_json::to_value(TourType::Sic).unwrap(), json!("SIC"));
        assert_eq!(serde_json::to_value(TransferType::Private).unwrap(), json!("PRIVATE"));
        assert_eq!(serde_json::to_value(Region::Europe).unwrap(), json!("Europe"));
    }

    #[test]
    fn test_day_entry_wire_names() {
        let day = DayEntry {
            day_number: 1,
            title: "City Tour".to_string(),
            description: String::new(),
            meals_code: "B/L/D".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&day).unwrap(),
            json!({"day": 1, "title": "City Tour", "description": "", "meals": "B/L/D"})
        );
    }

    #[test]
    fn test_region_inferred_from_id() {
        assert_eq!(Region::from_package_id("EUR-PVT-03"), Region::Europe);
        assert_eq!(Region::from_package_id("LAND-SIC-12"), Region::Turkey);
        assert_eq!(Region::from_package_id(""), Region::Turkey);
    }

    #[test]
    fn test_unknown_keys_survive_round_trip() {
        let stored = json!({
            "packageId": "SIC-01",
            "title": "Istanbul 3 Nights Group Tour",
            "featured": true,
            "pricing": {"paxTiers": {"2": {
                "threestar": {"double": 500, "singleSupplement": 100},
                "fourstar": {"double": 700, "singleSupplement": 150},
                "fivestar": {"double": 900, "singleSupplement": 200}
            }}}
        });

        let record: PackageRecord = serde_json::from_value(stored).unwrap();
        assert_eq!(record.region, None);
        assert_eq!(record.extra.get("featured"), Some(&json!(true)));
        assert_eq!(record.pricing.pax_tiers[&PaxTier::Two].fourstar.double, 700);

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["featured"], json!(true));
        assert!(back.get("region").is_none());
        assert!(back.get("titleEs").is_none());
    }
}
