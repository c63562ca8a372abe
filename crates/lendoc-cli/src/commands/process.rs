//! Process command - OCR a scanned loan document and extract its fields.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use lendoc_core::pipeline::DocumentPipeline;
use lendoc_core::LendocError;

use super::load_config;
use super::output::{emit, format_report, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input image (PNG or JPEG)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write the raw OCR text here for review and correction
    #[arg(long)]
    text_out: Option<PathBuf>,

    /// Save the preprocessed (binarized) image as PNG
    #[arg(long)]
    save_preprocessed: Option<PathBuf>,

    /// Path to the tesseract executable (overrides config)
    #[arg(long)]
    tesseract: Option<PathBuf>,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(tesseract) = &args.tesseract {
        config.ocr.tesseract_cmd = tesseract.clone();
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if !matches!(extension.as_str(), "png" | "jpg" | "jpeg") {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")?
            .progress_chars("##-"),
    );

    pb.set_message("Loading OCR pipeline...");
    pb.set_position(10);

    let pipeline = DocumentPipeline::from_config(&config)?;

    pb.set_message("Running OCR...");
    pb.set_position(30);

    let result = pipeline.process_path(&args.input);
    pb.finish_and_clear();

    let result = result.map_err(|e| match e {
        LendocError::Image(e) => {
            anyhow::anyhow!("Failed to decode {}: {}", args.input.display(), e)
        }
        other => other.into(),
    })?;

    if let Some(path) = &args.save_preprocessed {
        result
            .preprocessed
            .save_with_format(path, image::ImageFormat::Png)?;
        println!(
            "{} Preprocessed image written to {}",
            style("✓").green(),
            path.display()
        );
    }

    if let Some(path) = &args.text_out {
        fs::write(path, &result.text)?;
        println!(
            "{} OCR text written to {} (edit it, then run 'lendoc submit {}')",
            style("✓").green(),
            path.display(),
            path.display()
        );
    }

    if result.text.trim().is_empty() {
        eprintln!("{} No text detected in image", style("⚠").yellow());
    }

    let output = format_report(&result.report, args.format)?;
    emit(&output, args.output.as_deref())?;

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
