//! Report rendering shared by the extraction commands.

use std::fs;
use std::path::Path;

use console::style;

use lendoc_core::extract::{ExtractionReport, FieldResult};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output, one row per candidate
    Csv,
    /// Plain text summary
    Text,
}

pub fn format_report(report: &ExtractionReport, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(format_text(report)),
    }
}

fn format_csv(report: &ExtractionReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["field", "final_value", "candidate", "valid", "confidence"])?;

    for field in report {
        let final_value = field.final_value.clone().unwrap_or_default();

        if field.matches.is_empty() {
            wtr.write_record([field.field.as_str(), "", "", "", ""])?;
            continue;
        }

        for candidate in &field.matches {
            wtr.write_record([
                field.field.as_str(),
                final_value.as_str(),
                candidate.value.as_str(),
                if candidate.valid { "true" } else { "false" },
                candidate.confidence.as_str(),
            ])?;
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &ExtractionReport) -> String {
    let mut output = String::new();

    for field in report {
        output.push_str(&format!(
            "{}: {}\n",
            field.title(),
            field.final_value.as_deref().unwrap_or("(not found)")
        ));

        for candidate in &field.matches {
            let marker = if candidate.valid { "✓" } else { "✗" };
            output.push_str(&format!(
                "  {} {:?} ({})\n",
                marker, candidate.value, candidate.confidence
            ));
        }
    }

    output
}

/// One-line validation status of a field, as shown before submission.
pub fn validation_line(field: &FieldResult) -> String {
    match field.selected() {
        Some(candidate) => format!(
            "{} {}: {} ({})",
            style("✓").green(),
            field.title(),
            candidate.value,
            candidate.confidence
        ),
        None if field.matches.is_empty() => format!(
            "{} {}: not found",
            style("✗").red(),
            field.title()
        ),
        None => format!(
            "{} {}: {} candidate(s), none valid",
            style("✗").red(),
            field.title(),
            field.matches.len()
        ),
    }
}

/// Write to a file, or print to stdout when no path is given.
pub fn emit(output: &str, path: Option<&Path>) -> anyhow::Result<()> {
    if let Some(output_path) = path {
        fs::write(output_path, output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendoc_core::extract::FieldExtractor;
    use pretty_assertions::assert_eq;

    fn report() -> ExtractionReport {
        FieldExtractor::default().extract("Applicant: Solo\nFull Name: Meera Iyer\nIncome Details: $4,000")
    }

    #[test]
    fn test_csv_rows() {
        let csv = format_report(&report(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "field,final_value,candidate,valid,confidence");
        assert_eq!(lines[1], "name,Meera Iyer,Solo,false,medium");
        assert!(lines.contains(&"address,,,,"));
        assert!(lines.contains(&"income,,\"4,000\",false,high"));
    }

    #[test]
    fn test_text_output() {
        let text = format_report(&report(), OutputFormat::Text).unwrap();

        assert!(text.starts_with("Name: Meera Iyer\n"));
        assert!(text.contains("  ✗ \"Solo\" (medium)\n"));
        assert!(text.contains("Loan Amount: (not found)\n"));
    }

    #[test]
    fn test_json_output_round_trips() {
        let json = format_report(&report(), OutputFormat::Json).unwrap();
        let parsed: ExtractionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report());
    }
}
