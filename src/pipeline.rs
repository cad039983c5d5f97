//! Region extraction runs
//!
//! Discovers the documents of each configured folder, extracts them one at a
//! time and collects per-document failures instead of aborting the run.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::{Config, RegionSource};
use crate::corpus::{MergeSummary, write_region};
use crate::document::load_document;
use crate::error::{Error, Result};
use crate::package::{PackageContext, PackageRecord, Region, assemble_package};

/// A document that could not be extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub source: PathBuf,
    pub reason: String,
}

/// Records and failures of one region
#[derive(Debug, Clone, Default)]
pub struct RegionExtraction {
    pub region: Region,
    pub records: Vec<PackageRecord>,
    pub failures: Vec<ExtractionFailure>,
}

/// Outcome of a full extract run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub merge: MergeSummary,
    pub failures: Vec<ExtractionFailure>,
}

/// Whether a directory entry is a document to extract
///
/// Word lock files (`~$...`) and files whose name contains a skip marker as a
/// separate token are left out.
pub fn is_candidate(file_name: &str, skip_markers: &[String]) -> bool {
    let lower = file_name.to_lowercase();
    if !lower.ends_with(".docx") || file_name.starts_with("~$") {
        return false;
    }

    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name);
    !stem
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .any(|token| {
            let token = token.to_uppercase();
            skip_markers
                .iter()
                .any(|marker| marker.to_uppercase() == token)
        })
}

/// Candidate documents of a folder, sorted by file name
pub fn discover_documents(folder: &Path, skip_markers: &[String]) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for entry in fs::read_dir(folder)? {
        let entry = entry?;
        // follows symlinks
        if !entry.path().is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if is_candidate(name, skip_markers) {
            documents.push(entry.path());
        }
    }

    documents.sort();
    Ok(documents)
}

/// Extract every document of a region, in folder order
///
/// A document whose package id was already produced by an earlier file is
/// reported as a failure and left out.
pub async fn extract_region(
    source: &RegionSource,
    skip_markers: &[String],
    translate: bool,
) -> Result<RegionExtraction> {
    if !source.root.is_dir() {
        return Err(Error::MissingSource(source.root.clone()));
    }

    let mut extraction = RegionExtraction {
        region: source.region,
        ..RegionExtraction::default()
    };
    let mut seen_ids: HashMap<String, PathBuf> = HashMap::new();

    for folder in &source.folders {
        let folder_path = source.root.join(&folder.path);
        if !folder_path.is_dir() {
            warn!(folder = %folder_path.display(), "folder not found, skipping");
            continue;
        }

        let context = PackageContext {
            package_type: folder.package_type,
            tour_type: folder.tour_type,
            region: source.region,
            translate,
        };

        info!(folder = %folder_path.display(), "processing folder");
        for path in discover_documents(&folder_path, skip_markers)? {
            let record = match extract_document(&path, &context).await {
                Ok(record) => record,
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "extraction failed");
                    extraction.failures.push(ExtractionFailure {
                        source: path,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            if let Some(first) = seen_ids.get(&record.package_id) {
                let reason = format!(
                    "duplicate package id {} (already used by {})",
                    record.package_id,
                    first.display()
                );
                warn!(file = %path.display(), id = %record.package_id, "duplicate package id");
                extraction.failures.push(ExtractionFailure {
                    source: path,
                    reason,
                });
                continue;
            }

            seen_ids.insert(record.package_id.clone(), path);
            extraction.records.push(record);
        }
    }

    Ok(extraction)
}

/// Load and assemble one document
pub async fn extract_document(path: &Path, context: &PackageContext) -> Result<PackageRecord> {
    let document = load_document(path).await?;
    let source_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let record = assemble_package(&document, source_name, context);

    info!(
        id = %record.package_id,
        title = %record.title,
        words = document.metadata.word_count,
        bytes = document.metadata.file_size,
        tables = document.tables.len(),
        "extracted"
    );
    Ok(record)
}

/// Extract `region` with `config` and merge it into the corpus
pub async fn run(config: &Config, region: Region) -> Result<RunReport> {
    let source = config
        .source(region)
        .ok_or(Error::RegionNotConfigured(region))?;

    let extraction = extract_region(source, &config.skip_markers, config.translate).await?;
    let merge = write_region(
        &config.corpus_path(),
        &config.output_dir,
        region,
        extraction.records,
    )?;

    Ok(RunReport {
        merge,
        failures: extraction.failures,
    })
}
