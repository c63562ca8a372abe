//! Field template registry.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use rust_decimal::Decimal;

use super::fields;
use super::patterns::{ADDRESS_PATTERNS, INCOME_PATTERNS, LOAN_AMOUNT_PATTERNS, NAME_PATTERNS};
use super::Validator;
use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;

lazy_static! {
    static ref LOAN_DOCUMENT_FIELDS: FieldRegistry = {
        let templates = [
            FieldTemplate::new(fields::NAME, NAME_PATTERNS, Validator::MinTokenCount(2)),
            FieldTemplate::new(fields::ADDRESS, ADDRESS_PATTERNS, Validator::NonEmpty),
            FieldTemplate::new(
                fields::INCOME,
                INCOME_PATTERNS,
                Validator::NumericMinimum(Decimal::from(10_000)),
            ),
            FieldTemplate::new(
                fields::LOAN_AMOUNT,
                LOAN_AMOUNT_PATTERNS,
                Validator::NumericStrictMinimum(Decimal::from(1_000)),
            ),
        ];

        templates
            .into_iter()
            .fold(FieldRegistry::new(), |registry, template| {
                registry.with_template(template.unwrap())
            })
    };
}

/// One extractable field: its key, ordered patterns and validator.
#[derive(Debug, Clone)]
pub struct FieldTemplate {
    key: String,
    patterns: Vec<Regex>,
    validator: Validator,
}

impl FieldTemplate {
    /// Compile a template. Patterns always match case-insensitively and must
    /// have at least one capture group.
    pub fn new<S: AsRef<str>>(
        key: impl Into<String>,
        patterns: &[S],
        validator: Validator,
    ) -> Result<Self, ExtractionError> {
        let key = key.into();
        let mut compiled = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| ExtractionError::InvalidPattern {
                    field: key.clone(),
                    source,
                })?;

            if regex.captures_len() < 2 {
                return Err(ExtractionError::MissingCaptureGroup {
                    field: key,
                    pattern: pattern.to_string(),
                });
            }

            compiled.push(regex);
        }

        Ok(Self {
            key,
            patterns: compiled,
            validator,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }
}

/// Ordered set of field templates.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    templates: Vec<FieldTemplate>,
}

impl FieldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in loan application fields: name, address, income, loan_amount.
    pub fn loan_documents() -> Self {
        LOAN_DOCUMENT_FIELDS.clone()
    }

    /// Built-in fields extended with the configured custom fields.
    pub fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractionError> {
        let mut registry = Self::loan_documents();

        for custom in &config.custom_fields {
            let template = FieldTemplate::new(
                custom.key.clone(),
                custom.patterns.as_slice(),
                custom.validator.clone(),
            )?;
            registry = registry.with_template(template);
        }

        Ok(registry)
    }

    /// Add a template. A template with an existing key replaces it in place.
    pub fn with_template(mut self, template: FieldTemplate) -> Self {
        match self.templates.iter_mut().find(|t| t.key == template.key) {
            Some(existing) => *existing = template,
            None => self.templates.push(template),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldTemplate> {
        self.templates.iter().find(|t| t.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldTemplate> {
        self.templates.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
