//! Pipeline orchestration and domain logic for acrofilter.
//!
//! This crate ties together document reading, token extraction, the CSV
//! acronym table, and glossary output into the end-to-end [`pipeline::run`].

pub mod glossary;
pub mod merge;
pub mod pipeline;
pub mod table;
