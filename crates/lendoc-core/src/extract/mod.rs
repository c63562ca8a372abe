//! Loan document field extraction module.

mod extractor;
pub mod patterns;
mod registry;
mod validators;

pub use extractor::{extract_fields, FieldExtractor};
pub use registry::{FieldRegistry, FieldTemplate};
pub use validators::{compare_amount, parse_amount, Validator};

pub use crate::models::report::{Candidate, Confidence, ExtractionReport, FieldResult};

/// Field keys of the built-in loan document registry.
pub mod fields {
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const INCOME: &str = "income";
    pub const LOAN_AMOUNT: &str = "loan_amount";
}
