//! Deduplication and the length heuristic.

use std::collections::BTreeSet;

use tracing::debug;

/// Collapse raw matches into a set of unique tokens.
pub fn dedupe(raw: &[String]) -> BTreeSet<String> {
    raw.iter().cloned().collect()
}

/// Keep tokens of at most `max_length` characters.
///
/// Long all-caps runs (requirement titles, shouted headings) match the token
/// shape too; this is the only guard against them.
pub fn filter_by_length(unique: &BTreeSet<String>, max_length: usize) -> BTreeSet<String> {
    let valid: BTreeSet<String> = unique
        .iter()
        .filter(|token| token.chars().count() <= max_length)
        .cloned()
        .collect();

    debug!(
        unique = unique.len(),
        valid = valid.len(),
        max_length,
        "length filter applied"
    );
    valid
}
