//! Core data structures for the extracted document
//!
//! A package document is reduced to what the extractor consumes: the stream
//! of top-level paragraph lines and the top-level tables, both in document
//! order.

use serde::{Deserialize, Serialize};

// Type aliases for convenience
pub type TableRows = Vec<Vec<String>>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceDocument {
    /// File stem of the source, or empty for in-memory documents
    pub name: String,
    pub metadata: DocumentMetadata,
    /// Trimmed, non-empty paragraph texts
    pub paragraphs: Vec<String>,
    pub tables: Vec<TableData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub file_path: String,
    pub file_size: u64,
    pub word_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableData {
    pub rows: TableRows,
    pub metadata: TableMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableMetadata {
    pub column_count: usize,
    pub row_count: usize,
}

impl TableData {
    pub fn new(rows: TableRows) -> Self {
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        let row_count = rows.len();

        Self {
            rows,
            metadata: TableMetadata {
                column_count,
                row_count,
            },
        }
    }

    /// Text of the first cell of the first row, trimmed
    pub fn header_key(&self) -> Option<&str> {
        self.rows
            .first()
            .and_then(|row| row.first())
            .map(|cell| cell.trim())
    }

    /// All rows after the header row
    pub fn body(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}

impl SourceDocument {
    /// Build a document directly from lines and tables, trimming lines and
    /// dropping blank ones the same way the loader does.
    pub fn from_parts<I, S>(paragraphs: I, tables: Vec<TableData>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paragraphs: Vec<String> = paragraphs
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        let word_count = paragraphs
            .iter()
            .map(|line| line.split_whitespace().count())
            .sum();

        Self {
            name: String::new(),
            metadata: DocumentMetadata {
                word_count,
                ..DocumentMetadata::default()
            },
            paragraphs,
            tables,
        }
    }
}
