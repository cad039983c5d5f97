//! tourpack: travel package extraction for .docx files
//!
//! This library reads semi-structured Word documents describing tour
//! packages and turns them into the JSON records of a package corpus, with
//! an optional Spanish variant of the human-readable fields.

pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod extract;
pub mod package;
pub mod pipeline;
pub mod translate;

// Re-export commonly used types
pub use config::Config;
pub use document::{SourceDocument, TableData, load_document, parse_document_bytes};
pub use error::{Error, Result};
pub use package::{PackageContext, PackageRecord, PackageType, Region, TourType, assemble_package};
pub use pipeline::{ExtractionFailure, RunReport};
