//! Human review and simulated submission.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ExtractionError;
use crate::models::report::ExtractionReport;
use crate::summary::build_summary;

/// Field values confirmed by a reviewer, in report order.
///
/// Starts from the report's final values (empty when a field has none) and
/// accepts corrections for known fields only. The report itself is never
/// modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewedValues {
    values: Vec<(String, String)>,
}

impl ReviewedValues {
    /// Pre-populate from an extraction report.
    pub fn from_report(report: &ExtractionReport) -> Self {
        let values = report
            .iter()
            .map(|f| (f.field.clone(), f.final_value.clone().unwrap_or_default()))
            .collect();

        Self { values }
    }

    /// Override the value of a field.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> Result<(), ExtractionError> {
        let slot = self
            .values
            .iter_mut()
            .find(|(k, _)| k == field)
            .ok_or_else(|| ExtractionError::UnknownField(field.to_string()))?;
        slot.1 = value.into();
        Ok(())
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fields still left blank after review.
    pub fn blank_fields(&self) -> Vec<&str> {
        self.values
            .iter()
            .filter(|(_, v)| v.trim().is_empty())
            .map(|(k, _)| k.as_str())
            .collect()
    }

    /// Render the plain-text summary of these values.
    pub fn summary(&self) -> Vec<u8> {
        build_summary(self.iter())
    }
}

/// Confirmation of a simulated submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Local time the submission was accepted.
    pub submitted_at: DateTime<Local>,
    /// Submitted values, in submission order.
    pub values: ReviewedValues,
}

/// Simulate submitting reviewed values to the loan processing system.
///
/// Nothing leaves the process; the receipt only records what was submitted.
pub fn submit(values: ReviewedValues) -> SubmissionReceipt {
    let submitted_at = Local::now();

    info!(
        "Submitted {} fields to loan processing at {}",
        values.values.len(),
        submitted_at.format("%Y-%m-%d %H:%M:%S")
    );

    SubmissionReceipt {
        submitted_at,
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::FieldExtractor;
    use pretty_assertions::assert_eq;

    fn report() -> ExtractionReport {
        FieldExtractor::default().extract("Applicant: John Smith\nLoan Amount: $80,000")
    }

    #[test]
    fn test_from_report_prefills_final_values() {
        let values = ReviewedValues::from_report(&report());
        let pairs: Vec<(&str, &str)> = values.iter().collect();

        assert_eq!(
            pairs,
            vec![
                ("name", "John Smith"),
                ("address", ""),
                ("income", ""),
                ("loan_amount", "80,000"),
            ]
        );
        assert_eq!(values.blank_fields(), vec!["address", "income"]);
    }

    #[test]
    fn test_override_keeps_order() {
        let mut values = ReviewedValues::from_report(&report());
        values.set("income", "6,00,000").unwrap();
        values.set("name", "John A. Smith").unwrap();

        assert_eq!(values.get("income"), Some("6,00,000"));
        assert_eq!(values.iter().next(), Some(("name", "John A. Smith")));
    }

    #[test]
    fn test_override_unknown_field() {
        let mut values = ReviewedValues::from_report(&report());
        let err = values.set("pan", "ABCDE1234F").unwrap_err();
        assert!(matches!(err, ExtractionError::UnknownField(f) if f == "pan"));
    }

    #[test]
    fn test_submit_keeps_values() {
        let values = ReviewedValues::from_report(&report());
        let receipt = submit(values.clone());

        assert_eq!(receipt.values, values);
        assert_eq!(
            String::from_utf8(receipt.values.summary()).unwrap(),
            "Name: John Smith\nAddress: \nIncome: \nLoan Amount: 80,000"
        );
    }
}
