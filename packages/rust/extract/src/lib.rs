//! Acronym token extraction and filtering.
//!
//! A token starts with an uppercase letter and ends with an uppercase letter
//! or digit; the characters in between may be letters, digits, or one of
//! `+ . & -`. Lowercase abbreviations such as `mm` are never captured.

mod filter;

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use acrofilter_shared::TextBlock;

pub use filter::{dedupe, filter_by_length};

/// Token shape, applied with leftmost, non-overlapping semantics.
const TOKEN_PATTERN: &str = r"[A-Z][a-zA-Z0-9+.&\-]*[A-Z0-9]";

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("valid regex"));

static WHOLE_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{TOKEN_PATTERN}$")).expect("valid regex"));

/// Find every token in `text`, in order of appearance.
pub fn extract_tokens(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Scan each block on its own and concatenate the matches in block order.
///
/// Matches never span two blocks.
#[instrument(skip_all, fields(blocks = blocks.len()))]
pub fn extract_from_blocks(blocks: &[TextBlock]) -> Vec<String> {
    let matches: Vec<String> = blocks
        .iter()
        .flat_map(|block| extract_tokens(&block.text))
        .collect();

    debug!(matches = matches.len(), "extraction complete");
    matches
}

/// Whether the whole of `s` has the token shape.
pub fn is_token(s: &str) -> bool {
    WHOLE_TOKEN_RE.is_match(s)
}
