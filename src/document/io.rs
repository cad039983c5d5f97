//! File I/O operations and validation
//!
//! This module handles file validation before a document is handed to
//! docx-rs, so that lock files and stray spreadsheets fail with a readable
//! message instead of a parser error.

use std::fs::File;
use std::path::Path;
use zip::ZipArchive;

use crate::error::{Error, Result};

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    // Check file extension
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("docx") {
        return Err(Error::InvalidFormat(format!(
            "Invalid file format. Expected .docx file, got .{extension}\n\
            Note: only Word .docx files are supported (not .doc, .xlsx, .zip, etc.)"
        )));
    }

    // Check ZIP structure contains word/document.xml
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            return Err(Error::InvalidFormat(
                "This appears to be an Excel file (.xlsx).\n\
                Only Word documents (.docx) can be extracted."
                    .to_string(),
            ));
        }

        return Err(Error::InvalidFormat(
            "Invalid .docx file: missing word/document.xml\n\
            This file may be corrupted or is not a valid Word document."
                .to_string(),
        ));
    }

    Ok(())
}
