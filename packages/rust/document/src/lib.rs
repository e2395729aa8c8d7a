//! Word document access for acrofilter.
//!
//! The rest of the workspace sees documents only through [`DocumentBackend`]:
//! read a file as a list of [`TextBlock`]s, or write a file holding a single
//! two-column table. [`DocxBackend`] implements both with `docx-rs`.

mod reader;
mod writer;

use std::path::Path;

use acrofilter_shared::{Result, TextBlock};

pub use reader::parse_docx;

/// The two document operations the pipeline depends on.
pub trait DocumentBackend {
    /// Read the text of every body paragraph, then of every table cell paragraph.
    fn read_text_blocks(&self, path: &Path) -> Result<Vec<TextBlock>>;

    /// Write a new document containing one table: `header`, then `rows`.
    fn write_table(&self, path: &Path, header: [&str; 2], rows: &[(String, String)])
    -> Result<()>;
}

/// `.docx` backend built on `docx-rs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxBackend;

impl DocumentBackend for DocxBackend {
    fn read_text_blocks(&self, path: &Path) -> Result<Vec<TextBlock>> {
        reader::read_docx_file(path)
    }

    fn write_table(
        &self,
        path: &Path,
        header: [&str; 2],
        rows: &[(String, String)],
    ) -> Result<()> {
        writer::write_table_docx(path, header, rows)
    }
}
