//! Submit command - review extracted fields, submit them and export a summary.

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::warn;

use lendoc_core::extract::{FieldExtractor, FieldRegistry};
use lendoc_core::review::{submit, ReviewedValues};
use lendoc_core::summary::write_summary;

use super::output::validation_line;
use super::{load_config, read_text_input};

/// Arguments for the submit command.
#[derive(Args)]
pub struct SubmitArgs {
    /// Text file with reviewed OCR output ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Correct a field value, e.g. --set income=6,00,000 (repeatable)
    #[arg(short = 's', long = "set", value_name = "FIELD=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, String)>,

    /// Directory for the submission summary (overrides config)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Do not write the submission summary file
    #[arg(long)]
    no_export: bool,
}

fn parse_override(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got {:?}", s))?;

    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in {:?}", s));
    }

    Ok((field.to_string(), value.to_string()))
}

pub async fn run(args: SubmitArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = read_text_input(&args.input)?;

    let extractor = FieldExtractor::new(FieldRegistry::from_config(&config.extraction)?);
    let report = extractor.extract(&text);

    println!("{}", style("Field Validation Summary").bold());
    for field in &report {
        println!("  {}", validation_line(field));
    }
    println!();

    let mut values = ReviewedValues::from_report(&report);
    for (field, value) in &args.overrides {
        values.set(field, value.clone())?;
    }

    for field in values.blank_fields() {
        warn!("Field {} is blank", field);
        eprintln!("{} {} is blank", style("⚠").yellow(), field);
    }

    let receipt = submit(values);

    println!(
        "{} Data successfully validated and submitted to the loan processing system.",
        style("✓").green()
    );
    println!();
    println!("{}", style("Submitted Data").bold());
    for (field, value) in receipt.values.iter() {
        println!("  {}: {}", lendoc_core::summary::title_case(field), value);
    }

    if !args.no_export {
        let dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());

        let path = write_summary(
            &dir,
            &config.export.file_prefix,
            receipt.values.iter(),
            &receipt.submitted_at,
        )?;

        println!();
        println!(
            "{} Submission summary written to {}",
            style("✓").green(),
            path.display()
        );
    }

    Ok(())
}
