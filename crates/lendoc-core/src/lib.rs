//! Core library for loan document processing.
//!
//! This crate provides:
//! - Image preprocessing (grayscale, median filter, contrast, binarization)
//! - OCR invocation through the `tesseract` executable
//! - Loan field extraction (applicant name, address, income, loan amount)
//! - Plain-text submission summaries

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod pipeline;
pub mod review;
pub mod summary;

pub use error::{LendocError, Result};
pub use extract::{
    extract_fields, Candidate, Confidence, ExtractionReport, FieldExtractor, FieldRegistry,
    FieldResult, FieldTemplate, Validator,
};
pub use ocr::{ImagePreprocessor, OcrBackend, StaticText, TesseractCli};
pub use pipeline::{DocumentPipeline, PipelineOutput};
pub use review::{submit, ReviewedValues, SubmissionReceipt};
pub use summary::{build_summary, parse_summary, summary_file_name, write_summary};
