//! Data models for extraction reports and configuration.

pub mod config;
pub mod report;

pub use config::LendocConfig;
pub use report::{Candidate, Confidence, ExtractionReport, FieldResult};
