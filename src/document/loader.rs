//! Document loading and orchestration
//!
//! This module contains `load_document()`, which validates a .docx file,
//! reads it, and walks the document body into the paragraph stream and
//! table list consumed by the extractor.

use std::path::Path;
use tracing::debug;

use super::cleanup::count_words;
use super::io::validate_docx_file;
use super::models::*;
use super::parsing::formatting::extract_paragraph_text;
use super::parsing::table::extract_table_data;
use crate::error::Result;

/// Load and parse a .docx file from disk
///
/// This function:
/// 1. Validates the DOCX container
/// 2. Reads the file without blocking the runtime
/// 3. Walks top-level paragraphs and tables in document order
pub async fn load_document(file_path: &Path) -> Result<SourceDocument> {
    // Validate file type before attempting to parse
    validate_docx_file(file_path)?;

    let file_data = tokio::fs::read(file_path).await?;
    let mut document = parse_document_bytes(&file_data)?;

    document.name = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Untitled Document")
        .to_string();
    document.metadata.file_path = file_path.to_string_lossy().to_string();
    document.metadata.file_size = file_data.len() as u64;

    Ok(document)
}

/// Parse an in-memory .docx buffer
pub fn parse_document_bytes(file_data: &[u8]) -> Result<SourceDocument> {
    let docx = docx_rs::read_docx(file_data)?;

    let mut paragraphs = Vec::new();
    let mut tables = Vec::new();

    for child in &docx.document.children {
        match child {
            docx_rs::DocumentChild::Paragraph(para) => {
                let text = extract_paragraph_text(para);
                let text = text.trim();
                if !text.is_empty() {
                    paragraphs.push(text.to_string());
                }
            }
            docx_rs::DocumentChild::Table(table) => {
                if let Some(table_data) = extract_table_data(table) {
                    tables.push(table_data);
                }
            }
            _ => {
                // Section properties, bookmarks and similar carry no text
            }
        }
    }

    debug!(
        paragraphs = paragraphs.len(),
        tables = tables.len(),
        "parsed document body"
    );

    let metadata = DocumentMetadata {
        word_count: count_words(&paragraphs),
        file_size: file_data.len() as u64,
        ..DocumentMetadata::default()
    };

    Ok(SourceDocument {
        name: String::new(),
        metadata,
        paragraphs,
        tables,
    })
}
