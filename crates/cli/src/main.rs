//! # ojdata-cli
//!
//! Batch driver: run the trailing-window extractor over OptoJump treadmill
//! XML exports and write one combined table.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use ojdata_extract::process_batch_in;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod export;

/// ojdata - trailing-window statistics from OptoJump treadmill exports
#[derive(Parser)]
#[command(name = "ojdata")]
#[command(author, version, about = "Extract trailing-window treadmill statistics from OptoJump XML exports", long_about = None)]
struct Cli {
    /// XML export files to process
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    /// Output file to write
    #[arg(short, long, default_value = "combined_averages.xlsx")]
    output: PathBuf,

    /// Output format (xlsx, csv, json)
    #[arg(short, long, default_value = "xlsx")]
    format: OutputFormat,

    /// Worksheet to read from each file
    #[arg(long, default_value = ojdata_sheet::DEFAULT_WORKSHEET)]
    sheet: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for the combined table.
#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    /// Excel workbook (default)
    #[default]
    Xlsx,
    /// CSV file
    Csv,
    /// JSON array of trial records
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let mut inputs = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        // Metadata comes from the file name, not the path.
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        inputs.push((bytes, filename));
    }

    let total = inputs.len();
    let batch = process_batch_in(inputs, &cli.sheet);

    for failure in &batch.failures {
        eprintln!(
            "{} {}: {}",
            "error:".red().bold(),
            failure.filename,
            failure.error
        );
    }

    if batch.trials.is_empty() {
        println!("{}", "No file processed successfully, nothing to export.".yellow());
        return Ok(());
    }

    match cli.format {
        OutputFormat::Xlsx => export::write_xlsx(&batch, &cli.output)?,
        OutputFormat::Csv => export::write_csv(&batch, &cli.output)?,
        OutputFormat::Json => export::write_json(&batch, &cli.output)?,
    }

    println!(
        "{} {}/{} file(s), wrote {}",
        "Processed".green().bold(),
        batch.trials.len(),
        total,
        cli.output.display()
    );

    Ok(())
}
