//! `.docx` → text blocks.

use std::path::Path;

use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use tracing::{debug, instrument};

use acrofilter_shared::{AcrofilterError, Result, TextBlock};

/// Read and parse a `.docx` file from disk.
#[instrument(skip_all, fields(path = %path.display()))]
pub(crate) fn read_docx_file(path: &Path) -> Result<Vec<TextBlock>> {
    let bytes = std::fs::read(path).map_err(|e| AcrofilterError::io(path, e))?;
    let blocks = parse_docx(&bytes).map_err(|e| match e {
        AcrofilterError::Document { message } => {
            AcrofilterError::document(format!("{}: {message}", path.display()))
        }
        other => other,
    })?;

    debug!(blocks = blocks.len(), bytes = bytes.len(), "document read");
    Ok(blocks)
}

/// Parse an in-memory `.docx` into text blocks.
///
/// Body paragraphs come first, in document order, followed by the cell
/// paragraphs of every table (row by row, cell by cell).
pub fn parse_docx(bytes: &[u8]) -> Result<Vec<TextBlock>> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| AcrofilterError::document(format!("failed to parse docx: {e}")))?;

    let mut blocks = Vec::new();
    let mut tables: Vec<&Table> = Vec::new();

    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => blocks.push(TextBlock::body(paragraph_text(p))),
            DocumentChild::Table(t) => tables.push(t),
            _ => {}
        }
    }

    for table in tables {
        collect_table_blocks(table, &mut blocks);
    }

    Ok(blocks)
}

fn collect_table_blocks(table: &Table, out: &mut Vec<TextBlock>) {
    for row in &table.rows {
        #[allow(irrefutable_let_patterns)]
        let TableChild::TableRow(row) = row else {
            continue;
        };
        for cell in &row.cells {
            #[allow(irrefutable_let_patterns)]
            let TableRowChild::TableCell(cell) = cell else {
                continue;
            };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => out.push(TextBlock::cell(paragraph_text(p))),
                    TableCellContent::Table(nested) => collect_table_blocks(nested, out),
                    _ => {}
                }
            }
        }
    }
}

/// Concatenated run text of a paragraph, hyperlinks included.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children_text(&paragraph.children, &mut text);
    text
}

fn push_children_text(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_children_text(&link.children, text),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use acrofilter_shared::BlockOrigin;
    use docx_rs::{Docx, Run, TableCell, TableRow};

    use super::*;

    fn para(text: &str) -> Paragraph {
        Paragraph::new().add_run(Run::new().add_text(text))
    }

    fn pack(docx: Docx) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).expect("pack docx");
        buf.into_inner()
    }

    #[test]
    fn reads_body_paragraphs_then_cells() {
        let table = Table::new(vec![TableRow::new(vec![
            TableCell::new().add_paragraph(para("CDR review")),
            TableCell::new().add_paragraph(para("per the ICD")),
        ])]);
        let docx = Docx::new()
            .add_paragraph(para("The GNC system"))
            .add_table(table)
            .add_paragraph(para("uses an IMU"));

        let blocks = parse_docx(&pack(docx)).expect("parse");
        let texts: Vec<_> = blocks.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["The GNC system", "uses an IMU", "CDR review", "per the ICD"]
        );
        assert_eq!(blocks[0].origin, BlockOrigin::Body);
        assert_eq!(blocks[2].origin, BlockOrigin::TableCell);
    }

    #[test]
    fn runs_are_concatenated() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("the G"))
            .add_run(Run::new().add_text("NC loop"));
        let blocks = parse_docx(&pack(Docx::new().add_paragraph(paragraph))).expect("parse");
        assert_eq!(blocks[0].text, "the GNC loop");
    }

    #[test]
    fn garbage_is_document_error() {
        let err = parse_docx(b"not a zip archive").unwrap_err();
        assert!(matches!(err, AcrofilterError::Document { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_docx_file(Path::new("/nonexistent/input.docx")).unwrap_err();
        assert!(matches!(err, AcrofilterError::Io { .. }));
    }
}
