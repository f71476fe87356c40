//! wordlen - word-length statistics for text files
//!
//! Reads a text file line by line and reports the word count, the average
//! word length, the number of words of each length and the most frequent
//! lengths.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Usage error (wrong arguments, bad configuration)
//!   2 - The text source could not be read

mod analysis;
mod cli;
mod config;
mod models;
mod report;
mod source;

use analysis::{StatsError, WordAggregator};
use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use cli::{Args, OutputFormat};
use config::{Config, DEFAULT_CONFIG_FILE};
use source::SourceError;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e);
            std::process::exit(0);
        }
        Err(_) => {
            println!("{}", Args::usage());
            std::process::exit(1);
        }
    };

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if args.init_config {
        if let Err(e) = handle_init_config(Path::new(DEFAULT_CONFIG_FILE)) {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    init_logging(&args, &config);
    debug!("Arguments: {:?}", args);

    match run(&args, &config) {
        Ok(output) => {
            print!("{}", output);
        }
        Err(e) => {
            error!("Run failed: {:#}", e);
            std::process::exit(report_failure(&e));
        }
    }
}

/// Print a failure and return the matching exit code.
fn report_failure(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<SourceError>() {
        Some(source_error) => {
            println!("Failed to read from source:");
            println!("{}", source_error);
            2
        }
        None => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

/// Handle --init-config: write a default configuration file.
fn handle_init_config(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first or edit it manually.",
            path.display()
        );
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created {} with default settings.", path.display());
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr; stdout is reserved for the report.
fn init_logging(args: &Args, config: &Config) {
    let level = args.log_level(config.general.verbose);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Load configuration from the file named on the command line, if any.
fn load_config(args: &Args) -> Result<Config> {
    let mut config = match args.config {
        Some(ref config_path) => Config::load(config_path)?,
        None => Config::default(),
    };
    config.merge_with_args(args);
    Ok(config)
}

/// Count the words of the source file and render the report.
fn run(args: &Args, config: &Config) -> Result<String> {
    let path = args.source().context("No text file given")?;

    info!("Reading {}", path.display());
    let mut aggregator = WordAggregator::new();
    source::ingest_file(path, &mut aggregator)?;

    match aggregator.average_length() {
        Ok(average) => debug!(
            "Counted {} words, average length {:.3}",
            aggregator.count(),
            average
        ),
        Err(StatsError::NoWordsCounted) => info!("No words found in {}", path.display()),
    }

    let output = match config.report.format {
        OutputFormat::Text => report::generate_text_report(&aggregator, config.report.line_ending),
        OutputFormat::Json => {
            let mut json = report::generate_json_report(&aggregator.stats())?;
            json.push_str(config.report.line_ending.as_str());
            json
        }
    };

    Ok(output)
}
