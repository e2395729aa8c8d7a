//! End-to-end run: document → extract → dedupe/filter → merge → write.

use std::path::PathBuf;

use tracing::{info, instrument};

use acrofilter_document::DocumentBackend;
use acrofilter_extract::{dedupe, extract_from_blocks, filter_by_length};
use acrofilter_shared::{
    AcronymTable, OUTPUT_DICT_FILE, OUTPUT_GLOSSARY_FILE, Result, RunConfig, RunStats,
};

use crate::glossary::write_glossary;
use crate::merge::merge;
use crate::table::{read_table, write_table};

/// Result of a pipeline run.
#[derive(Debug)]
pub struct RunResult {
    /// Merged table, as written to `output_dict.csv`.
    pub table: AcronymTable,
    /// The supplied table, when one was given.
    pub supplied: Option<AcronymTable>,
    /// Match and table counters.
    pub stats: RunStats,
    /// Path of the written acronym table.
    pub dict_path: PathBuf,
    /// Path of the written glossary, when one was produced.
    pub glossary_path: Option<PathBuf>,
}

/// Run the full pipeline.
///
/// 1. Read text blocks from the source document
/// 2. Extract raw matches, dedupe, apply the length limit
/// 3. Read the supplied table (if any)
/// 4. Merge supplied expansions into the valid acronyms
/// 5. Write `output_dict.csv`
/// 6. Write `output_glossary.docx` from the supplied table (if any, and enabled)
///
/// Any failure aborts the run; files already written are left in place.
#[instrument(skip_all, fields(document = %config.document.display()))]
pub fn run(config: &RunConfig, backend: &dyn DocumentBackend) -> Result<RunResult> {
    config.validate()?;

    // --- Phase 1: Read ---
    let blocks = backend.read_text_blocks(&config.document)?;
    info!(blocks = blocks.len(), "source document read");

    // --- Phase 2: Extract + filter ---
    let raw = extract_from_blocks(&blocks);
    let unique = dedupe(&raw);
    let valid = filter_by_length(&unique, config.max_length);
    info!(
        total = raw.len(),
        unique = unique.len(),
        valid = valid.len(),
        "acronyms extracted"
    );

    // --- Phase 3: Import ---
    let supplied = match &config.table {
        Some(path) => {
            let table = read_table(path)?;
            info!(path = %path.display(), entries = table.len(), "acronym table imported");
            Some(table)
        }
        None => None,
    };

    // --- Phase 4: Merge ---
    let table = merge(&valid, supplied.as_ref());

    // --- Phase 5: Write table ---
    let dict_path = config.output_dir.join(OUTPUT_DICT_FILE);
    write_table(&dict_path, &table)?;
    info!(path = %dict_path.display(), entries = table.len(), "acronym table written");

    // --- Phase 6: Write glossary ---
    let glossary_path = match &supplied {
        Some(supplied) if config.generate_glossary => {
            let path = config.output_dir.join(OUTPUT_GLOSSARY_FILE);
            write_glossary(backend, &path, supplied)?;
            info!(path = %path.display(), "glossary written");
            Some(path)
        }
        _ => None,
    };

    let stats = RunStats {
        total_matches: raw.len(),
        unique: unique.len(),
        valid: valid.len(),
        expanded: table.expanded_count(),
        imported: supplied.as_ref().map(AcronymTable::len),
    };

    Ok(RunResult {
        table,
        supplied,
        stats,
        dict_path,
        glossary_path,
    })
}
