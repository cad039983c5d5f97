//! Builders for .docx fixtures generated in-test

#![allow(dead_code)]

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use std::io::Cursor;
use std::path::Path;

pub fn paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

pub fn table(rows: &[&[&str]]) -> Table {
    Table::new(
        rows.iter()
            .map(|row| {
                TableRow::new(
                    row.iter()
                        .map(|cell| TableCell::new().add_paragraph(paragraph(cell)))
                        .collect(),
                )
            })
            .collect(),
    )
}

pub fn build(docx: Docx) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf).unwrap();
    buf.into_inner()
}

/// The reference package: title, duration, one day, two inclusions and a
/// pricing table
pub fn sample_package() -> Vec<u8> {
    build(
        Docx::new()
            .add_paragraph(paragraph("Sample Package"))
            .add_paragraph(paragraph("7 Nights / 8 Days"))
            .add_paragraph(paragraph("Day 1 - City Tour (B/L/D)"))
            .add_paragraph(paragraph("Meet your guide at the hotel."))
            .add_paragraph(paragraph("Visit the Old City and the Grand Bazaar."))
            .add_paragraph(paragraph("Inclusions"))
            .add_paragraph(paragraph("7 nights accommodation,"))
            .add_paragraph(paragraph("Return airport transfers."))
            .add_table(table(&[
                &["PAX", "3*", "4*", "5*"],
                &["2 PAX", "500", "700", "900"],
            ])),
    )
}

pub fn write_docx(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, bytes).unwrap();
}
