//! Extraction report data model.

use serde::{Deserialize, Serialize};

use crate::extract::patterns::CURRENCY_SYMBOLS;

/// Coarse reliability tag of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// The matched text carried a currency symbol.
    High,
    /// Everything else.
    Medium,
}

impl Confidence {
    /// Derive confidence from the raw (unstripped) matched text.
    pub fn from_match(matched: &str) -> Self {
        if matched.contains(CURRENCY_SYMBOLS) {
            Confidence::High
        } else {
            Confidence::Medium
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One regex match found for a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Captured value with surrounding punctuation and whitespace stripped.
    pub value: String,
    /// Validator outcome.
    pub valid: bool,
    /// Confidence tag.
    pub confidence: Confidence,
    /// Full matched text, before stripping.
    pub source: String,
    /// Byte offsets of the full match in the source text.
    pub position: (usize, usize),
    /// Index of the field pattern that produced this match.
    pub pattern_index: usize,
}

/// All candidates found for one field plus the selected value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldResult {
    /// Field key.
    pub field: String,
    /// Candidates in discovery order (pattern order, then text order).
    pub matches: Vec<Candidate>,
    /// First valid candidate value.
    pub final_value: Option<String>,
}

impl FieldResult {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            matches: Vec::new(),
            final_value: None,
        }
    }

    /// Record a candidate; the first valid one becomes the final value.
    pub fn push(&mut self, candidate: Candidate) {
        if candidate.valid && self.final_value.is_none() {
            self.final_value = Some(candidate.value.clone());
        }
        self.matches.push(candidate);
    }

    /// The candidate the final value was taken from.
    pub fn selected(&self) -> Option<&Candidate> {
        self.matches.iter().find(|c| c.valid)
    }

    /// Human-readable field title, e.g. `loan_amount` -> `Loan Amount`.
    pub fn title(&self) -> String {
        crate::summary::title_case(&self.field)
    }
}

/// Complete per-field output of one extraction run, in registry order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionReport {
    pub fields: Vec<FieldResult>,
}

impl ExtractionReport {
    pub fn new(fields: Vec<FieldResult>) -> Self {
        Self { fields }
    }

    /// Look up a field by key.
    pub fn get(&self, field: &str) -> Option<&FieldResult> {
        self.fields.iter().find(|f| f.field == field)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldResult> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Final values keyed by field, in report order.
    pub fn final_values(&self) -> Vec<(&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|f| (f.field.as_str(), f.final_value.as_deref()))
            .collect()
    }

    /// Fields without a valid candidate.
    pub fn missing_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.final_value.is_none())
            .map(|f| f.field.as_str())
            .collect()
    }

    /// Whether every field has a final value.
    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|f| f.final_value.is_some())
    }
}

impl<'a> IntoIterator for &'a ExtractionReport {
    type Item = &'a FieldResult;
    type IntoIter = std::slice::Iter<'a, FieldResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
