//! Candidate validators.

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Predicate applied to every candidate of a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Validator {
    /// At least this many whitespace-separated tokens.
    MinTokenCount(usize),
    /// Non-empty after trimming whitespace.
    NonEmpty,
    /// Numeric value (commas removed) greater than or equal to the threshold.
    NumericMinimum(Decimal),
    /// Numeric value (commas removed) strictly greater than the threshold.
    NumericStrictMinimum(Decimal),
}

impl Validator {
    /// Check a candidate.
    ///
    /// Numeric validators return an error when the candidate does not parse;
    /// callers treat that as an invalid candidate.
    pub fn check(&self, candidate: &str) -> Result<bool, ExtractionError> {
        match self {
            Validator::MinTokenCount(min) => Ok(candidate.split_whitespace().count() >= *min),
            Validator::NonEmpty => Ok(!candidate.trim().is_empty()),
            Validator::NumericMinimum(threshold) => Ok(matches!(
                compare_amount(candidate, threshold)?,
                Some(Ordering::Greater | Ordering::Equal)
            )),
            Validator::NumericStrictMinimum(threshold) => Ok(matches!(
                compare_amount(candidate, threshold)?,
                Some(Ordering::Greater)
            )),
        }
    }

    /// Check a candidate, folding validator errors into `false`.
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.check(candidate).unwrap_or(false)
    }
}

/// Zero code points of the decimal digit blocks OCR engines commonly emit.
const DIGIT_ZEROS: &[u32] = &[
    0x0030, // ASCII
    0x0660, // Arabic-Indic
    0x06F0, // Extended Arabic-Indic
    0x07C0, // NKo
    0x0966, // Devanagari
    0x09E6, // Bengali
    0x0A66, // Gurmukhi
    0x0AE6, // Gujarati
    0x0B66, // Oriya
    0x0BE6, // Tamil
    0x0C66, // Telugu
    0x0CE6, // Kannada
    0x0D66, // Malayalam
    0x0DE6, // Sinhala
    0x0E50, // Thai
    0x0ED0, // Lao
    0x0F20, // Tibetan
    0x1040, // Myanmar
    0x17E0, // Khmer
    0x1810, // Mongolian
    0xFF10, // Fullwidth
];

/// Map a decimal digit of any supported script to its ASCII form.
fn ascii_digit(c: char) -> Option<char> {
    let code = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .and_then(|&zero| char::from_digit(code - zero, 10))
}

/// Drop grouping commas, trim, and rewrite non-ASCII digits as ASCII.
fn normalize_amount(s: &str) -> String {
    s.replace(',', "")
        .trim()
        .chars()
        .map(|c| ascii_digit(c).unwrap_or(c))
        .collect()
}

fn parse_decimal(normalized: &str) -> Option<Decimal> {
    Decimal::from_str(normalized)
        .or_else(|_| Decimal::from_scientific(normalized))
        .ok()
}

/// Parse an amount such as `"1,50,000"`, `"15000.50"` or `"१५,०००"` exactly.
///
/// Fails for values outside the range of [`Decimal`]; see [`compare_amount`].
pub fn parse_amount(s: &str) -> Result<Decimal, ExtractionError> {
    parse_decimal(&normalize_amount(s)).ok_or_else(|| ExtractionError::Parse {
        value: s.to_string(),
    })
}

/// Compare an amount against a threshold.
///
/// Amounts that do not fit a [`Decimal`] are compared as `f64`. `None` means
/// the amount is NaN and compares with nothing.
pub fn compare_amount(s: &str, threshold: &Decimal) -> Result<Option<Ordering>, ExtractionError> {
    let normalized = normalize_amount(s);

    if let Some(amount) = parse_decimal(&normalized) {
        return Ok(Some(amount.cmp(threshold)));
    }

    let amount: f64 = normalized.parse().map_err(|_| ExtractionError::Parse {
        value: s.to_string(),
    })?;
    let threshold = threshold.to_f64().unwrap_or(f64::NAN);

    Ok(amount.partial_cmp(&threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_min_token_count() {
        let validator = Validator::MinTokenCount(2);
        assert!(validator.is_valid("John Smith"));
        assert!(validator.is_valid("  Mary   Ann  Lee "));
        assert!(!validator.is_valid("Solo"));
        assert!(!validator.is_valid(""));
    }

    #[test]
    fn test_non_empty() {
        assert!(Validator::NonEmpty.is_valid("12 Baker Street"));
        assert!(!Validator::NonEmpty.is_valid("   "));
    }

    #[test]
    fn test_numeric_minimum_is_inclusive() {
        let validator = Validator::NumericMinimum(Decimal::from(10_000));
        assert!(validator.is_valid("10,000"));
        assert!(validator.is_valid("15,000"));
        assert!(!validator.is_valid("9,999"));
    }

    #[test]
    fn test_numeric_strict_minimum_is_exclusive() {
        let validator = Validator::NumericStrictMinimum(Decimal::from(1_000));
        assert!(!validator.is_valid("1,000"));
        assert!(validator.is_valid("1,001"));
    }

    #[test]
    fn test_unparseable_number_is_an_error() {
        let validator = Validator::NumericMinimum(Decimal::from(10_000));
        assert!(matches!(
            validator.check(","),
            Err(ExtractionError::Parse { .. })
        ));
        assert!(!validator.is_valid(","));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,50,000").unwrap(), Decimal::from(150_000));
        assert_eq!(
            parse_amount("2500.75").unwrap(),
            Decimal::from_str("2500.75").unwrap()
        );
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_parse_amount_native_digits() {
        assert_eq!(parse_amount("१५,०००").unwrap(), Decimal::from(15_000));
        assert_eq!(parse_amount("٢٥٠٠").unwrap(), Decimal::from(2_500));
        assert_eq!(parse_amount("１２,３４５").unwrap(), Decimal::from(12_345));
    }

    #[test]
    fn test_amount_beyond_decimal_range() {
        let huge = format!("1{}", "0".repeat(32));
        assert!(parse_amount(&huge).is_err());
        assert_eq!(
            compare_amount(&huge, &Decimal::from(10_000)).unwrap(),
            Some(Ordering::Greater)
        );
        assert!(Validator::NumericMinimum(Decimal::from(10_000)).is_valid(&huge));
        assert!(Validator::NumericStrictMinimum(Decimal::from(1_000)).is_valid(&huge));
    }

    #[test]
    fn test_native_digit_thresholds() {
        assert!(Validator::NumericMinimum(Decimal::from(10_000)).is_valid("१०,०००"));
        assert!(!Validator::NumericMinimum(Decimal::from(10_000)).is_valid("९,९९९"));
        assert!(!Validator::NumericStrictMinimum(Decimal::from(1_000)).is_valid("١٠٠٠"));
    }

    #[test]
    fn test_nan_is_never_valid() {
        let validator = Validator::NumericMinimum(Decimal::from(10_000));
        assert!(!validator.check("NaN").unwrap());
    }

    #[test]
    fn test_validator_json_shape() {
        let json = serde_json::to_string(&Validator::MinTokenCount(2)).unwrap();
        assert_eq!(json, r#"{"kind":"min_token_count","value":2}"#);

        let parsed: Validator = serde_json::from_str(r#"{"kind":"non_empty"}"#).unwrap();
        assert_eq!(parsed, Validator::NonEmpty);
    }
}
