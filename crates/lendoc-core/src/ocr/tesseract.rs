//! OCR backend driving the `tesseract` command-line tool.

use std::path::Path;
use std::process::Command;
use std::time::Instant;

use image::GrayImage;
use tracing::{debug, info};

use super::OcrBackend;
use crate::error::OcrError;
use crate::models::config::OcrConfig;

/// Runs the tesseract executable named in the configuration.
#[derive(Debug, Clone)]
pub struct TesseractCli {
    config: OcrConfig,
}

impl TesseractCli {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }

    /// Arguments passed after the input image path.
    fn arguments(&self) -> Vec<String> {
        let mut args = vec![
            "stdout".to_string(),
            "--oem".to_string(),
            self.config.engine_mode.to_string(),
            "--psm".to_string(),
            self.config.page_segmentation_mode.to_string(),
            "-l".to_string(),
            self.config.language.clone(),
        ];

        if let Some(dir) = &self.config.tessdata_dir {
            args.push("--tessdata-dir".to_string());
            args.push(dir.display().to_string());
        }

        args
    }

    /// Run tesseract on an image file.
    pub fn recognize_file(&self, path: &Path) -> Result<String, OcrError> {
        let start = Instant::now();
        let command = self.config.tesseract_cmd.display().to_string();
        debug!("Running {} on {}", command, path.display());

        let output = Command::new(&self.config.tesseract_cmd)
            .arg(path)
            .args(self.arguments())
            .output()
            .map_err(|source| OcrError::Launch {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(OcrError::Engine {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| OcrError::InvalidOutput)?;

        info!(
            "OCR recognized {} characters in {}ms",
            text.len(),
            start.elapsed().as_millis()
        );

        Ok(text)
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new(OcrConfig::default())
    }
}

impl OcrBackend for TesseractCli {
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError> {
        let staged = tempfile::Builder::new()
            .prefix("lendoc-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::Staging(e.to_string()))?;

        image
            .save_with_format(staged.path(), image::ImageFormat::Png)
            .map_err(|e| OcrError::Staging(e.to_string()))?;

        self.recognize_file(staged.path())
    }

    fn name(&self) -> &str {
        "tesseract"
    }
}
