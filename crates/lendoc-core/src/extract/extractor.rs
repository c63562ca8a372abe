//! Field extractor: regex candidates, validation and final value selection.

use tracing::{debug, trace};

use super::patterns::is_trim_char;
use super::{Candidate, Confidence, ExtractionReport, FieldRegistry, FieldResult, FieldTemplate};

/// Extract every registry field from `text`.
///
/// Patterns are scanned in registry order and matches in text order; the
/// first valid candidate of a field becomes its final value. Every field of
/// the registry is present in the report, with or without candidates.
pub fn extract_fields(text: &str, registry: &FieldRegistry) -> ExtractionReport {
    let fields = registry
        .iter()
        .map(|template| extract_field(text, template))
        .collect();

    ExtractionReport::new(fields)
}

fn extract_field(text: &str, template: &FieldTemplate) -> FieldResult {
    let mut result = FieldResult::new(template.key());

    for (pattern_index, pattern) in template.patterns().iter().enumerate() {
        for caps in pattern.captures_iter(text) {
            let Some(full_match) = caps.get(0) else {
                continue;
            };
            let raw = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let value = raw.trim_matches(is_trim_char).to_string();

            let valid = match template.validator().check(&value) {
                Ok(valid) => valid,
                Err(e) => {
                    debug!("{}: candidate {:?} rejected: {}", template.key(), value, e);
                    false
                }
            };

            trace!(
                "{}: pattern {} matched {:?} (valid: {})",
                template.key(),
                pattern_index,
                full_match.as_str(),
                valid
            );

            result.push(Candidate {
                value,
                valid,
                confidence: Confidence::from_match(full_match.as_str()),
                source: full_match.as_str().to_string(),
                position: (full_match.start(), full_match.end()),
                pattern_index,
            });
        }
    }

    debug!(
        "{}: {} candidates, final value {:?}",
        template.key(),
        result.matches.len(),
        result.final_value
    );

    result
}

/// Extractor bound to a field registry.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    registry: FieldRegistry,
}

impl FieldExtractor {
    /// Create an extractor for the given registry.
    pub fn new(registry: FieldRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Extract all registry fields from text.
    pub fn extract(&self, text: &str) -> ExtractionReport {
        extract_fields(text, &self.registry)
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(FieldRegistry::loan_documents())
    }
}
