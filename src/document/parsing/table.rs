//! Table extraction
//!
//! Tables are reduced to rows of cell texts. A cell holding several
//! paragraphs (for example one hotel name per line) keeps them separated by
//! `\n` so that callers can decide how to flatten them.

use super::super::models::*;
use super::formatting::extract_paragraph_text;

/// Extract table data from a docx-rs Table
pub(crate) fn extract_table_data(table: &docx_rs::Table) -> Option<TableData> {
    let mut rows = Vec::new();

    for table_child in &table.rows {
        let docx_rs::TableChild::TableRow(row) = table_child;
        let mut row_cells = Vec::new();

        for row_child in &row.cells {
            let docx_rs::TableRowChild::TableCell(cell) = row_child;
            row_cells.push(extract_cell_text(cell));
        }

        if !row_cells.is_empty() {
            rows.push(row_cells);
        }
    }

    // Return table only if it has content
    if rows.is_empty() {
        None
    } else {
        Some(TableData::new(rows))
    }
}

fn extract_cell_text(cell: &docx_rs::TableCell) -> String {
    let mut lines = Vec::new();

    for content in &cell.children {
        if let docx_rs::TableCellContent::Paragraph(para) = content {
            lines.push(extract_paragraph_text(para));
        }
    }

    lines.join("\n").trim().to_string()
}
