//! Text extraction utilities
//!
//! This module handles extraction of plain text from docx-rs paragraph and
//! run elements.

/// Extract plain text from a paragraph, handling various child elements
pub(crate) fn extract_paragraph_text(para: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&para.children, &mut text);
    text
}

fn push_children_text(children: &[docx_rs::ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            docx_rs::ParagraphChild::Run(run) => {
                text.push_str(&extract_run_text(run));
            }
            docx_rs::ParagraphChild::Insert(insert) => {
                // Tracked insertions are part of the visible text
                for child in &insert.children {
                    if let docx_rs::InsertChild::Run(run) = child {
                        text.push_str(&extract_run_text(run));
                    }
                }
            }
            docx_rs::ParagraphChild::Hyperlink(link) => {
                push_children_text(&link.children, text);
            }
            docx_rs::ParagraphChild::Delete(_) => {
                // Skip deletions (track changes)
            }
            _ => {}
        }
    }
}

/// Extract text from a run
pub(crate) fn extract_run_text(run: &docx_rs::Run) -> String {
    let mut text = String::new();

    for child in &run.children {
        match child {
            docx_rs::RunChild::Text(text_elem) => {
                text.push_str(&text_elem.text);
            }
            docx_rs::RunChild::Tab(_) => {
                text.push('\t');
            }
            docx_rs::RunChild::Break(_) => {
                text.push('\n');
            }
            _ => {}
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Hyperlink, HyperlinkType, Paragraph, Run};

    #[test]
    fn test_runs_are_concatenated() {
        let para = Paragraph::new()
            .add_run(Run::new().add_text("Day 1 - "))
            .add_run(Run::new().add_text("Arrival").add_tab().add_text("(D)"));

        assert_eq!(extract_paragraph_text(&para), "Day 1 - Arrival\t(D)");
    }

    #[test]
    fn test_break_becomes_newline() {
        let para = Paragraph::new().add_run(
            Run::new()
                .add_text("Hilton")
                .add_break(docx_rs::BreakType::TextWrapping)
                .add_text("Ramada"),
        );

        assert_eq!(extract_paragraph_text(&para), "Hilton\nRamada");
    }

    #[test]
    fn test_hyperlink_text_is_kept() {
        let para = Paragraph::new()
            .add_run(Run::new().add_text("Day 2 - "))
            .add_hyperlink(
                Hyperlink::new("https://example.com/cappadocia", HyperlinkType::External)
                    .add_run(Run::new().add_text("Cappadocia")),
            )
            .add_run(Run::new().add_text(" Tour (B)"));

        assert_eq!(extract_paragraph_text(&para), "Day 2 - Cappadocia Tour (B)");
    }
}
