//! Configuration structures for the document pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::extract::Validator;

/// Main configuration for the lendoc pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LendocConfig {
    /// OCR engine configuration.
    pub ocr: OcrConfig,

    /// Image preprocessing configuration.
    pub preprocess: PreprocessConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Submission summary export configuration.
    pub export: ExportConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Path or name of the tesseract executable.
    pub tesseract_cmd: PathBuf,

    /// Recognition language(s), e.g. "eng" or "eng+hin".
    pub language: String,

    /// OCR engine mode (3 = default, based on what is available).
    pub engine_mode: u8,

    /// Page segmentation mode (6 = single uniform block of text).
    pub page_segmentation_mode: u8,

    /// Optional tessdata directory passed as `--tessdata-dir`.
    pub tessdata_dir: Option<PathBuf>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_cmd: PathBuf::from("tesseract"),
            language: "eng".to_string(),
            engine_mode: 3,
            page_segmentation_mode: 6,
            tessdata_dir: None,
        }
    }
}

/// Image preprocessing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Median filter window size (odd, 1 disables filtering).
    pub median_window: u32,

    /// Contrast enhancement factor (1.0 leaves the image unchanged).
    pub contrast: f32,

    /// Binarization threshold; pixels below it become black.
    pub threshold: u8,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            median_window: 3,
            contrast: 2.0,
            threshold: 140,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Additional fields appended to the built-in loan document fields.
    /// A custom field reusing a built-in key replaces that field.
    pub custom_fields: Vec<CustomField>,
}

/// A user-defined field template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    /// Field key.
    pub key: String,

    /// Regex patterns, first capture group is the candidate.
    pub patterns: Vec<String>,

    /// Candidate validator.
    pub validator: Validator,
}

/// Submission summary export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory summary files are written to.
    pub output_dir: PathBuf,

    /// Summary file name prefix.
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_prefix: "Loan_Submission".to_string(),
        }
    }
}

impl LendocConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
