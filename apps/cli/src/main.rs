//! acrofilter CLI: build an acronym table and glossary from a Word document.
//!
//! Finds acronym-like tokens in a `.docx`, merges known expansions from an
//! existing CSV table, and writes `output_dict.csv` plus an optional
//! `output_glossary.docx`.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
