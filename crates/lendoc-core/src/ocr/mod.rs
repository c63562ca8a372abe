//! OCR stage: image preprocessing and text recognition backends.

mod preprocessing;
mod tesseract;

pub use preprocessing::ImagePreprocessor;
pub use tesseract::TesseractCli;

use image::GrayImage;

use crate::error::OcrError;

/// Abstraction over an OCR engine.
pub trait OcrBackend {
    /// Recognize the text of a preprocessed page.
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError>;

    /// Short engine name for logs.
    fn name(&self) -> &str;
}

/// Backend returning a fixed text regardless of the image.
///
/// Useful for running the pipeline without an OCR engine installed.
#[derive(Debug, Clone)]
pub struct StaticText {
    text: String,
}

impl StaticText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl OcrBackend for StaticText {
    fn recognize(&self, _image: &GrayImage) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
