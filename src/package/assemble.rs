//! Package assembly
//!
//! Combines the parsed paragraph stream and tables of one document with the
//! folder-level classification into a complete [`PackageRecord`].

use crate::document::SourceDocument;
use crate::extract::derive::{
    derive_destinations, derive_highlights, synthesize_description, synthesize_title,
};
use crate::extract::{RegionProfile, parse_paragraphs, parse_tables, profile, slugify};
use crate::package::models::{PackageRecord, PackageType, Region, TourType, TransferType};
use crate::translate;

/// Folder-level facts about a document that the document itself does not
/// carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageContext {
    pub package_type: PackageType,
    pub tour_type: TourType,
    pub region: Region,
    pub translate: bool,
}

impl Default for PackageContext {
    fn default() -> Self {
        Self {
            package_type: PackageType::default(),
            tour_type: TourType::default(),
            region: Region::default(),
            translate: true,
        }
    }
}

/// Id prefix encoding region, package type and tour type
pub fn package_id_prefix(
    region: Region,
    package_type: PackageType,
    tour_type: TourType,
) -> String {
    let base = match (package_type, tour_type) {
        (PackageType::WithHotel, TourType::Sic) => "SIC",
        (PackageType::WithHotel, TourType::Private) => "PVT",
        (PackageType::LandOnly, TourType::Sic) => "LAND-SIC",
        (PackageType::LandOnly, TourType::Private) => "LAND-PVT",
    };
    format!("{}{base}", region.id_prefix().unwrap_or(""))
}

/// Leading digits of the source file name, or "00"
pub fn package_number(source_name: &str) -> &str {
    let end = source_name
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(source_name.len());
    match &source_name[..end] {
        "" => "00",
        digits => digits,
    }
}

pub fn image_path(region: Region, slug: &str, destinations: &[String]) -> String {
    match region {
        Region::Turkey => format!("/images/packages/{slug}.jpg"),
        Region::Europe => {
            let first = destinations
                .first()
                .map(|d| d.to_lowercase())
                .unwrap_or_else(|| region.name().to_lowercase());
            format!("/images/packages/{first}-tour.jpg")
        }
    }
}

/// Build the record for one parsed document
pub fn assemble_package(
    document: &SourceDocument,
    source_name: &str,
    context: &PackageContext,
) -> PackageRecord {
    let profile = profile(context.region);
    let text = parse_paragraphs(&document.paragraphs, profile);
    let tables = parse_tables(&document.tables);

    let raw_title = text.source_title.clone().unwrap_or_default();
    let duration = text.duration.clone().unwrap_or_default();

    let destination_list = derive_destinations(&raw_title, &text.itinerary, profile);
    let destinations = destination_list.join(", ");
    let title = synthesize_title(
        &destination_list,
        &duration,
        context.tour_type,
        context.package_type,
    );
    let description = synthesize_description(&destinations, &duration, &text.itinerary, profile);
    let highlights = derive_highlights(&text.itinerary, &destinations, profile);

    let slug = slugify(&format!(
        "{title}-{}",
        context.tour_type.as_str().to_lowercase()
    ));
    let package_id = format!(
        "{}-{}",
        package_id_prefix(context.region, context.package_type, context.tour_type),
        package_number(source_name)
    );
    let image = image_path(context.region, &slug, &destination_list);

    let mut record = PackageRecord {
        package_id,
        slug,
        title,
        source_title: text.source_title,
        duration,
        description,
        itinerary: text.itinerary,
        included: text.included,
        not_included: text.not_included,
        information: text.information,
        highlights,
        hotels: tables.hotels,
        pricing: tables.pricing,
        destinations,
        package_type: context.package_type,
        tour_type: context.tour_type,
        transfer_type: TransferType::Private,
        region: Some(context.region),
        image,
        ..PackageRecord::default()
    };

    if context.translate {
        add_spanish_fields(&mut record, profile);
    }

    record
}

fn add_spanish_fields(record: &mut PackageRecord, profile: &RegionProfile) {
    record.title_es = Some(translate::translate_title(&record.title));
    record.description_es = Some(translate::translate_package_description(
        &record.destinations,
        &record.duration,
        &record.itinerary,
        profile,
    ));
    record.itinerary_es = Some(translate::translate_itinerary(&record.itinerary));
    record.included_es = Some(translate::translate_list(&record.included));
    record.not_included_es = Some(translate::translate_list(&record.not_included));
    record.highlights_es = Some(translate::translate_list(&record.highlights));
}
