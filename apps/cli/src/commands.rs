//! CLI argument definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, eyre};
use tracing::info;

use acrofilter_core::pipeline::{self, RunResult};
use acrofilter_document::DocxBackend;
use acrofilter_shared::{AppConfig, RunConfig, init_config, load_config, load_config_from};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// acrofilter: collect the acronyms of a Word document into a glossary.
#[derive(Parser)]
#[command(
    name = "acrofilter",
    version,
    about = "Extract acronyms from a .docx, merge known expansions, and write a table and glossary.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Source Word document (.docx) to scan.
    pub document: Option<PathBuf>,

    /// Existing acronym table (two-column CSV) to merge and publish as a glossary.
    pub table: Option<PathBuf>,

    /// Config file (defaults to ~/.acrofilter/acrofilter.toml).
    #[arg(long, env = "ACROFILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the run summary as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Write a default config file and exit.
    #[arg(long)]
    pub init_config: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr; stdout carries the report.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "acrofilter=warn",
        1 => "acrofilter=info",
        2 => "acrofilter=debug",
        _ => "acrofilter=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    if cli.init_config {
        return cmd_init_config();
    }

    let Some(document) = cli.document.clone() else {
        print_usage();
        return Ok(());
    };

    let config = resolve_config(&cli)?;
    cmd_run(document, cli.table.clone(), &config, cli.json)
}

fn resolve_config(cli: &Cli) -> Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };
    Ok(config)
}

fn print_usage() {
    let usage = Cli::command().render_usage();
    println!();
    println!("\t{usage}");
    println!("\t$ acrofilter INPUT_FILE.docx [INPUT_DICT.csv]");
    println!();
}

fn cmd_init_config() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_run(
    document: PathBuf,
    table: Option<PathBuf>,
    config: &AppConfig,
    json: bool,
) -> Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| eyre!("cannot determine working directory: {e}"))?;

    let run_config = RunConfig::new(document, table, cwd, config);

    if !json {
        println!();
        println!("Input document:\t\t{}", run_config.document.display());
        if let Some(table) = &run_config.table {
            println!("Input dictionary:\t{}", table.display());
        }
        println!();
    }

    info!(
        document = %run_config.document.display(),
        table = ?run_config.table,
        max_length = run_config.max_length,
        "starting run"
    );

    let result = pipeline::run(&run_config, &DocxBackend)?;

    if json {
        print_json(&result)
    } else {
        print_report(&run_config, &result);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_report(config: &RunConfig, result: &RunResult) {
    for (key, expansion) in result.table.iter() {
        println!("{key}  -  {expansion}");
    }

    let stats = &result.stats;
    println!();
    println!();
    println!("Total # of Acronyms:\t\t{}", stats.total_matches);
    println!("Total # of Unique Acronyms:\t{}", stats.unique);
    println!("Total # of Valid Acronyms:\t{}", stats.valid);
    if let Some(imported) = stats.imported {
        println!("Imported Dictionary Length:\t{imported}");
        println!("Expanded Valid Acronyms:\t{}", stats.expanded);
    }
    if let (Some(glossary), Some(table)) = (&result.glossary_path, &config.table) {
        println!(
            "A new glossary was generated from {} and written to {}",
            table.display(),
            glossary.display()
        );
    }
    println!(
        "A new dictionary of Valid Acronyms was written to {}",
        result.dict_path.display()
    );
    println!();
}

fn print_json(result: &RunResult) -> Result<()> {
    let summary = serde_json::json!({
        "acronyms": result.table,
        "stats": result.stats,
        "dict_path": result.dict_path,
        "glossary_path": result.glossary_path,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
