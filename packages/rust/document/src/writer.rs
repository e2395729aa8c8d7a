//! Single-table `.docx` output.

use std::fs::File;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use tracing::{info, instrument};

use acrofilter_shared::{AcrofilterError, Result};

/// Column widths in twentieths of a point (short key, long expansion).
const COLUMN_WIDTHS: [usize; 2] = [2400, 6600];

/// Write a document holding one table: a bold header row, then one row per pair.
/// An existing file at `path` is overwritten.
#[instrument(skip_all, fields(path = %path.display(), rows = rows.len()))]
pub(crate) fn write_table_docx(
    path: &Path,
    header: [&str; 2],
    rows: &[(String, String)],
) -> Result<()> {
    let mut table_rows = Vec::with_capacity(rows.len() + 1);
    table_rows.push(TableRow::new(vec![
        cell(header[0], true),
        cell(header[1], true),
    ]));
    for (key, expansion) in rows {
        table_rows.push(TableRow::new(vec![cell(key, false), cell(expansion, false)]));
    }

    let table = Table::new(table_rows).set_grid(COLUMN_WIDTHS.to_vec());
    let docx = Docx::new().add_table(table);

    let file = File::create(path).map_err(|e| AcrofilterError::io(path, e))?;
    docx.build().pack(file).map_err(|e| {
        AcrofilterError::document(format!("failed to write {}: {e}", path.display()))
    })?;

    info!("glossary document written");
    Ok(())
}

fn cell(text: &str, bold: bool) -> TableCell {
    let mut run = Run::new().add_text(text);
    if bold {
        run = run.bold();
    }
    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
}
