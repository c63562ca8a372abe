//! Image to report pipeline: decode, preprocess, OCR, extract.

use std::path::Path;
use std::time::Instant;

use image::{DynamicImage, GenericImageView, GrayImage};
use tracing::{debug, info};

use crate::error::Result;
use crate::extract::{ExtractionReport, FieldExtractor, FieldRegistry};
use crate::models::config::LendocConfig;
use crate::ocr::{ImagePreprocessor, OcrBackend, TesseractCli};

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Binarized page handed to OCR.
    pub preprocessed: GrayImage,
    /// Raw OCR text.
    pub text: String,
    /// Fields extracted from the raw text.
    pub report: ExtractionReport,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Complete document pipeline.
pub struct DocumentPipeline {
    preprocessor: ImagePreprocessor,
    backend: Box<dyn OcrBackend>,
    extractor: FieldExtractor,
}

impl DocumentPipeline {
    /// Create a pipeline from its parts.
    pub fn new(
        preprocessor: ImagePreprocessor,
        backend: Box<dyn OcrBackend>,
        extractor: FieldExtractor,
    ) -> Self {
        Self {
            preprocessor,
            backend,
            extractor,
        }
    }

    /// Build a tesseract-backed pipeline from configuration.
    pub fn from_config(config: &LendocConfig) -> Result<Self> {
        let registry = FieldRegistry::from_config(&config.extraction)?;

        Ok(Self::new(
            ImagePreprocessor::from_config(&config.preprocess),
            Box::new(TesseractCli::new(config.ocr.clone())),
            FieldExtractor::new(registry),
        ))
    }

    pub fn extractor(&self) -> &FieldExtractor {
        &self.extractor
    }

    /// Decode an encoded image (PNG, JPEG, ...) and process it.
    pub fn process_bytes(&self, data: &[u8]) -> Result<PipelineOutput> {
        let image = image::load_from_memory(data)?;
        self.process_image(&image)
    }

    /// Open an image file and process it.
    pub fn process_path(&self, path: &Path) -> Result<PipelineOutput> {
        info!("Processing file: {}", path.display());
        let image = image::open(path)?;
        self.process_image(&image)
    }

    /// Process a decoded image.
    pub fn process_image(&self, image: &DynamicImage) -> Result<PipelineOutput> {
        let start = Instant::now();
        let (width, height) = image.dimensions();
        info!("Processing image: {}x{}", width, height);

        let preprocessed = self.preprocessor.process(image);

        debug!("Running OCR with {}", self.backend.name());
        let text = self.backend.recognize(&preprocessed)?;

        let report = self.extractor.extract(&text);

        let processing_time_ms = start.elapsed().as_millis() as u64;
        info!(
            "Extracted {}/{} fields in {}ms",
            report.len() - report.missing_fields().len(),
            report.len(),
            processing_time_ms
        );

        Ok(PipelineOutput {
            preprocessed,
            text,
            report,
            processing_time_ms,
        })
    }
}
