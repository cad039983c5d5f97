//! Document parsing and data structures module
//!
//! This module reads Microsoft Word (.docx) package documents and reduces
//! them to the paragraph lines and tables the extractor works on.

pub mod cleanup;
pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

pub use loader::{load_document, parse_document_bytes};
pub use models::*;
