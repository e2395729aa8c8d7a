//! Shared types, error model, and configuration for acrofilter.
//!
//! This crate is the foundation depended on by all other acrofilter crates.
//! It provides:
//! - [`AcrofilterError`], the unified error type
//! - Domain types ([`AcronymTable`], [`TextBlock`], [`RunStats`])
//! - Configuration ([`AppConfig`], [`RunConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, ExtractionConfig, GlossaryConfig, RunConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{AcrofilterError, Result};
pub use types::{
    AcronymTable, BlockOrigin, DEFAULT_MAX_ACRONYM_LENGTH, GLOSSARY_HEADER, OUTPUT_DICT_FILE,
    OUTPUT_GLOSSARY_FILE, RunStats, TextBlock,
};
