//! Image preprocessing for OCR.

use image::{DynamicImage, GenericImageView, GrayImage};
use imageproc::filter;
use tracing::debug;

use crate::models::config::PreprocessConfig;

/// Grayscale, median filter, contrast boost and binarization.
pub struct ImagePreprocessor {
    /// Median filter window size (odd).
    median_window: u32,
    /// Contrast factor around the image mean.
    contrast: f32,
    /// Pixels below this become black, the rest white.
    threshold: u8,
}

impl ImagePreprocessor {
    /// Create a new preprocessor with default settings.
    pub fn new() -> Self {
        Self::from_config(&PreprocessConfig::default())
    }

    pub fn from_config(config: &PreprocessConfig) -> Self {
        Self {
            median_window: config.median_window,
            contrast: config.contrast,
            threshold: config.threshold,
        }
    }

    /// Set the median filter window.
    pub fn with_median_window(mut self, window: u32) -> Self {
        self.median_window = window;
        self
    }

    /// Run the full preprocessing chain.
    pub fn process(&self, image: &DynamicImage) -> GrayImage {
        let (width, height) = image.dimensions();
        debug!("Preprocessing {}x{} image", width, height);

        let gray = image.to_luma8();
        let filtered = self.median_filter(&gray);
        let enhanced = self.enhance_contrast(&filtered);
        self.binarize(&enhanced)
    }

    fn median_filter(&self, image: &GrayImage) -> GrayImage {
        if self.median_window <= 1 {
            return image.clone();
        }

        let radius = self.median_window / 2;
        filter::median_filter(image, radius, radius)
    }

    fn enhance_contrast(&self, image: &GrayImage) -> GrayImage {
        let pixels = image.as_raw();
        if pixels.is_empty() {
            return image.clone();
        }

        let sum: u64 = pixels.iter().map(|&p| p as u64).sum();
        let mean = (sum as f32 / pixels.len() as f32 + 0.5).floor();

        let mut result = image.clone();
        for pixel in result.pixels_mut() {
            let value = mean + self.contrast * (pixel[0] as f32 - mean);
            pixel[0] = value.clamp(0.0, 255.0) as u8;
        }

        result
    }

    fn binarize(&self, image: &GrayImage) -> GrayImage {
        let mut result = image.clone();
        for pixel in result.pixels_mut() {
            pixel[0] = if pixel[0] < self.threshold { 0 } else { 255 };
        }
        result
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}
