//! Package corpus persistence
//!
//! The corpus is a single JSON array holding every region's packages. A run
//! extracts one region, replaces that region's records in the corpus and
//! writes the new records alone to `{region}-packages.json` next to it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::package::models::{PackageRecord, Region};

/// Counts reported after a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub region: Region,
    /// Records of other regions carried over from the previous corpus
    pub retained: usize,
    /// Records of `region` dropped from the previous corpus
    pub replaced: usize,
    pub added: usize,
    pub corpus_path: PathBuf,
    pub region_path: PathBuf,
}

impl MergeSummary {
    pub fn total(&self) -> usize {
        self.retained + self.added
    }
}

/// Read the persisted corpus; a missing file is an empty corpus
pub fn load_corpus(path: &Path) -> Result<Vec<PackageRecord>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no existing corpus");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };

    serde_json::from_str(&content).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write records as pretty-printed JSON with a trailing newline
pub fn save_corpus(path: &Path, records: &[PackageRecord]) -> Result<()> {
    let mut content = serde_json::to_string_pretty(records).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    content.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Replace every record of `region` with `records`.
///
/// Returns the merged corpus and how many records were replaced. Retained
/// records without a `region` get the one inferred from their id.
pub fn merge_region(
    existing: Vec<PackageRecord>,
    region: Region,
    records: Vec<PackageRecord>,
) -> (Vec<PackageRecord>, usize) {
    let before = existing.len();
    let mut merged: Vec<PackageRecord> = existing
        .into_iter()
        .filter(|record| record.resolved_region() != region)
        .map(|mut record| {
            if record.region.is_none() {
                record.region = Some(record.resolved_region());
            }
            record
        })
        .collect();
    let replaced = before - merged.len();

    merged.extend(records);
    (merged, replaced)
}

/// File holding one region's records, e.g. `europe-packages.json`
pub fn region_file_name(region: Region) -> String {
    format!("{}-packages.json", region.name().to_lowercase())
}

/// Merge `records` into the corpus at `corpus_path` and write the region file
/// into `output_dir`
pub fn write_region(
    corpus_path: &Path,
    output_dir: &Path,
    region: Region,
    records: Vec<PackageRecord>,
) -> Result<MergeSummary> {
    let existing = load_corpus(corpus_path)?;
    let region_path = output_dir.join(region_file_name(region));
    save_corpus(&region_path, &records)?;

    let added = records.len();
    let (merged, replaced) = merge_region(existing, region, records);
    save_corpus(corpus_path, &merged)?;

    let summary = MergeSummary {
        region,
        retained: merged.len() - added,
        replaced,
        added,
        corpus_path: corpus_path.to_path_buf(),
        region_path,
    };
    info!(
        region = %region,
        added = summary.added,
        replaced = summary.replaced,
        retained = summary.retained,
        "corpus written"
    );
    Ok(summary)
}
