//! Error types for the lendoc-core library.

use thiserror::Error;

/// Main error type for the lendoc library.
#[derive(Error, Debug)]
pub enum LendocError {
    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Image decoding or encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The OCR executable could not be started.
    #[error("failed to launch OCR engine `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The OCR engine ran but reported a failure.
    #[error("OCR engine failed ({status}): {stderr}")]
    Engine { status: String, stderr: String },

    /// The OCR engine produced output that is not valid UTF-8.
    #[error("OCR engine produced non UTF-8 output")]
    InvalidOutput,

    /// Writing the preprocessed image for the engine failed.
    #[error("failed to stage image for OCR: {0}")]
    Staging(String),
}

/// Errors related to field templates and review.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A field pattern did not compile.
    #[error("invalid pattern for {field}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    /// A field pattern has no capture group to take the value from.
    #[error("pattern for {field} has no capture group: {pattern}")]
    MissingCaptureGroup { field: String, pattern: String },

    /// A candidate could not be parsed for validation.
    #[error("failed to parse {value:?} as a number")]
    Parse { value: String },

    /// A review override named a field the registry does not know.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// Result type for the lendoc library.
pub type Result<T> = std::result::Result<T, LendocError>;
