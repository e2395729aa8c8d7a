//! Glossary document output.
//!
//! The glossary is built from the supplied table as-is, not from the newly
//! extracted acronyms, so a curated table can be published on its own.

use std::path::Path;

use tracing::instrument;

use acrofilter_document::DocumentBackend;
use acrofilter_shared::{AcronymTable, GLOSSARY_HEADER, Result};

/// Rows of the glossary table, sorted by acronym.
pub fn glossary_rows(supplied: &AcronymTable) -> Vec<(String, String)> {
    supplied
        .iter()
        .map(|(key, expansion)| (key.to_string(), expansion.to_string()))
        .collect()
}

/// Write the glossary document for `supplied` to `path`.
#[instrument(skip_all, fields(path = %path.display(), entries = supplied.len()))]
pub fn write_glossary(
    backend: &dyn DocumentBackend,
    path: &Path,
    supplied: &AcronymTable,
) -> Result<()> {
    backend.write_table(path, GLOSSARY_HEADER, &glossary_rows(supplied))
}
