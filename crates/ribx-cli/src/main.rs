//! CLI application for batch IBAN extraction from PDF documents.

mod output;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn, Level};
use tracing_subscriber::FmtSubscriber;

use ribx_core::{IbanPipeline, PdfOcrSource, PdfTextSource, ResultRecord, RibxConfig};

use output::OutputFormat;

/// Extract bank account numbers (IBAN) from a directory of PDF files
#[derive(Parser)]
#[command(name = "ribx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(value_enum, default_value = "csv", ignore_case = true)]
    format: OutputFormat,

    /// Directory containing the PDF files to process
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (default: ibans_extracted.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config = match cli.config.as_deref() {
        Some(path) => RibxConfig::from_file(Path::new(path))
            .with_context(|| format!("failed to load config from {}", path))?,
        None => RibxConfig::default(),
    };

    let input_dir = cli.input.unwrap_or_else(|| config.input_dir.clone());

    // Flat, non-recursive discovery by extension; the glob's own order
    // is the batch order.
    let pattern = input_dir.join("*.pdf");
    let files: Vec<PathBuf> = glob(&pattern.to_string_lossy())
        .context("invalid input directory pattern")?
        .filter_map(|entry| entry.ok())
        .collect();

    if files.is_empty() {
        anyhow::bail!("no PDF files found in {}", input_dir.display());
    }

    println!(
        "{} Found {} PDF file(s) in {}",
        style("ℹ").blue(),
        files.len(),
        input_dir.display()
    );

    let pipeline = IbanPipeline::new(PdfTextSource, PdfOcrSource::new(config.ocr.clone()));

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut records = Vec::with_capacity(files.len());
    for path in &files {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_string();
        pb.println(format!("{} {}", style("→").cyan(), file_name));

        // A failed document records a null IBAN; the batch carries on.
        let iban = match pipeline.extract(path) {
            Ok(iban) => iban,
            Err(e) => {
                warn!("failed to process {}: {}", path.display(), e);
                None
            }
        };
        debug!("{} -> {:?}", file_name, iban);

        records.push(ResultRecord::new(file_name, iban));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let output_path = cli.output.unwrap_or_else(|| {
        PathBuf::from(format!("ibans_extracted.{}", cli.format.extension()))
    });

    output::write(&records, cli.format, &output_path)
        .with_context(|| format!("failed to write output to {}", output_path.display()))?;

    let found = records.iter().filter(|r| r.iban.is_some()).count();
    println!(
        "{} Processed {} file(s), {} IBAN(s) found",
        style("✓").green(),
        records.len(),
        found
    );
    println!(
        "{} Results written to {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}
