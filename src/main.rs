//! Table-Harvest main entry point
//!
//! This is the command-line interface for the Table-Harvest extractor.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use table_harvest::config::{load_config_with_hash, validate, Config, TableSelector};
use table_harvest::pipeline::{default_user_agent, Pipeline};
use table_harvest::{AlignmentPolicy, HarvestError};
use tracing_subscriber::EnvFilter;

/// Table-Harvest: pull one HTML table into a delimited file
///
/// Fetches a single page, locates one table by position or class, and writes
/// its header and data cells as delimited text. Without a config file the
/// Wikipedia list of largest US companies by revenue is scraped into
/// `largest_companies_2023.csv`.
#[derive(Parser, Debug)]
#[command(name = "table-harvest")]
#[command(version)]
#[command(about = "Extract one HTML table into a delimited file", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Source page URL
    #[arg(long)]
    url: Option<String>,

    /// Destination file path
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Select the table by zero-based position among all tables
    #[arg(long, conflicts_with = "class")]
    index: Option<usize>,

    /// Select the first table carrying all of these classes (e.g. "wikitable sortable")
    #[arg(long)]
    class: Option<String>,

    /// Field delimiter
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Abort on rows whose cell count differs from the column count
    #[arg(long)]
    strict: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Show the resolved configuration without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_run(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("table_harvest=info,warn"),
            1 => EnvFilter::new("table_harvest=debug,info"),
            2 => EnvFilter::new("table_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any), applies command-line overrides, and re-validates
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if let Some(url) = &cli.url {
        config.source.url = url.clone();
    }
    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }
    if let Some(index) = cli.index {
        config.table = TableSelector::Index { index };
    }
    if let Some(class) = &cli.class {
        config.table = TableSelector::Class {
            class: class.clone(),
        };
    }
    if let Some(delimiter) = cli.delimiter {
        config.output.delimiter = delimiter;
    }
    if cli.strict {
        config.output.alignment = AlignmentPolicy::Strict;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: prints what would be fetched and written
fn handle_dry_run(config: &Config) {
    println!("=== Table-Harvest Dry Run ===\n");

    println!("Source:");
    println!("  URL: {}", config.source.url);
    println!(
        "  User agent: {}",
        config
            .source
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent)
    );
    match config.source.timeout_secs {
        Some(secs) => println!("  Timeout: {}s", secs),
        None => println!("  Timeout: client default"),
    }

    println!("\nTable:");
    println!("  Selector: {}", config.table);

    println!("\nOutput:");
    println!("  Path: {}", config.output.path);
    println!("  Delimiter: {:?}", config.output.delimiter);
    println!("  Alignment: {:?}", config.output.alignment);

    println!("\n✓ Configuration is valid");
}

/// Handles the main extraction run
async fn handle_run(config: Config) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(config)?;

    match pipeline.run().await {
        Ok(summary) => {
            tracing::debug!("Preview:\n{}", summary.preview);
            tracing::info!(
                "Run completed in {}ms: {} rows x {} columns from {} written to {}",
                summary.duration_ms(),
                summary.rows,
                summary.columns,
                summary.source_url,
                summary.output_path.display()
            );
            if summary.misaligned_rows > 0 {
                tracing::warn!(
                    "{} rows were appended by position and may be misaligned",
                    summary.misaligned_rows
                );
            }
            Ok(())
        }
        Err(e) => Err(run_aborted(e)),
    }
}

/// Wraps a pipeline failure with its failure class; `main` reports it once
fn run_aborted(error: HarvestError) -> anyhow::Error {
    let kind = error.kind();
    anyhow::Error::new(error).context(format!("Run aborted ({:?} failure)", kind))
}
