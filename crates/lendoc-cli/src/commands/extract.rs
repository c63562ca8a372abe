//! Extract command - run field extraction on OCR text.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use lendoc_core::extract::{FieldExtractor, FieldRegistry};

use super::output::{emit, format_report, OutputFormat};
use super::{load_config, read_text_input};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Text file with OCR output ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = read_text_input(&args.input)?;

    let extractor = FieldExtractor::new(FieldRegistry::from_config(&config.extraction)?);
    let report = extractor.extract(&text);

    info!(
        "Extracted {} of {} fields",
        report.len() - report.missing_fields().len(),
        report.len()
    );

    let output = format_report(&report, args.format)?;
    emit(&output, args.output.as_deref())
}
