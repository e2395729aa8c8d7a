//! Core domain types for acrofilter runs.

use std::collections::BTreeMap;

use serde::Serialize;

/// Tokens longer than this are treated as all-caps prose, not acronyms.
pub const DEFAULT_MAX_ACRONYM_LENGTH: usize = 7;

/// File name of the merged acronym table, written to the output directory.
pub const OUTPUT_DICT_FILE: &str = "output_dict.csv";

/// File name of the glossary document, written to the output directory.
pub const OUTPUT_GLOSSARY_FILE: &str = "output_glossary.docx";

/// Header row of the glossary table.
pub const GLOSSARY_HEADER: [&str; 2] = ["Abbreviation", "Expansion"];

// ---------------------------------------------------------------------------
// AcronymTable
// ---------------------------------------------------------------------------

/// Mapping from acronym to its expansion.
///
/// Keys are unique and always iterate in alphabetical (code point) order.
/// An empty expansion means the acronym still needs a manual lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AcronymTable(BTreeMap<String, String>);

impl AcronymTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table with every key mapped to an empty expansion.
    pub fn from_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self(keys.into_iter().map(|k| (k.into(), String::new())).collect())
    }

    /// Insert or replace an entry. The last insert for a key wins.
    pub fn insert(&mut self, key: impl Into<String>, expansion: impl Into<String>) {
        self.0.insert(key.into(), expansion.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Replace the expansion of every key that also appears in `supplied`.
    ///
    /// Keys present only in `supplied` are not added: this table's key set
    /// is authoritative.
    pub fn overlay_from(&mut self, supplied: &AcronymTable) {
        for (key, expansion) in self.0.iter_mut() {
            if let Some(value) = supplied.0.get(key) {
                expansion.clone_from(value);
            }
        }
    }

    /// Number of entries with a non-empty expansion.
    pub fn expanded_count(&self) -> usize {
        self.0.values().filter(|v| !v.is_empty()).count()
    }
}

impl FromIterator<(String, String)> for AcronymTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ---------------------------------------------------------------------------
// TextBlock
// ---------------------------------------------------------------------------

/// Where a block of document text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOrigin {
    /// A paragraph in the document body.
    Body,
    /// A paragraph inside a table cell.
    TableCell,
}

/// The plain text of one paragraph of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub text: String,
    pub origin: BlockOrigin,
}

impl TextBlock {
    pub fn body(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: BlockOrigin::Body,
        }
    }

    pub fn cell(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: BlockOrigin::TableCell,
        }
    }
}

// ---------------------------------------------------------------------------
// RunStats
// ---------------------------------------------------------------------------

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Every pattern match, duplicates included.
    pub total_matches: usize,
    /// Distinct tokens.
    pub unique: usize,
    /// Distinct tokens within the length limit.
    pub valid: usize,
    /// Valid tokens that received a non-empty expansion.
    pub expanded: usize,
    /// Size of the supplied table after duplicate keys collapsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported: Option<usize>,
}
