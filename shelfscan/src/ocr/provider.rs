use async_trait::async_trait;
use image::{DynamicImage, GrayImage, ImageFormat};
use leptess::{LepTess, Variable};
use tracing::{debug, info, warn};

use crate::config::OcrConfig;
use crate::error::{Result, ShelfScanError};

/// Tesseract page segmentation mode 3: fully automatic page segmentation.
///
/// Covers carry multi-line, multi-size text blocks, so neither single-line
/// nor single-word modes apply.
const FULL_PAGE_SEGMENTATION: &str = "3";

/// Turns a preprocessed image into raw text.
///
/// An `Ok("")` result means the engine ran but found no glyphs; engine
/// failures are reported as errors.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: GrayImage) -> Result<String>;

    fn is_available(&self) -> bool {
        true
    }

    /// Language hint passed to the engine.
    fn languages(&self) -> &str;
}

#[derive(Debug, Clone)]
enum OcrBackend {
    Local,
    Unavailable { reason: String },
}

/// Local Tesseract recognizer backed by `leptess`.
///
/// Every call builds its own engine on the blocking pool, so concurrent
/// scans never share engine state.
#[derive(Debug, Clone)]
pub struct OcrProvider {
    backend: OcrBackend,
    config: OcrConfig,
}

fn create_tesseract(languages: &str) -> std::result::Result<LepTess, String> {
    let mut lt = LepTess::new(None, languages).map_err(|e| e.to_string())?;
    lt.set_variable(Variable::TesseditPagesegMode, FULL_PAGE_SEGMENTATION)
        .map_err(|e| e.to_string())?;
    Ok(lt)
}

fn encode_png(image: GrayImage) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    DynamicImage::ImageLuma8(image)
        .write_to(&mut std::io::Cursor::new(&mut output), ImageFormat::Png)
        .map_err(|e| ShelfScanError::Ocr(format!("Failed to encode image: {e}")))?;
    Ok(output)
}

fn run_tesseract(languages: &str, image: GrayImage) -> Result<String> {
    let bytes = encode_png(image)?;
    let mut lt = create_tesseract(languages)
        .map_err(|e| ShelfScanError::Ocr(format!("Failed to initialize Tesseract: {e}")))?;
    lt.set_image_from_mem(&bytes)
        .map_err(|e| ShelfScanError::Ocr(format!("Failed to set image: {e}")))?;
    lt.get_utf8_text()
        .map_err(|e| ShelfScanError::Ocr(format!("Failed to extract text: {e}")))
}

impl OcrProvider {
    /// Probe Tesseract with the configured languages once.
    ///
    /// A missing engine or language pack leaves the provider unavailable
    /// instead of failing startup.
    pub fn new(config: &OcrConfig) -> Self {
        let backend = match create_tesseract(&config.languages) {
            Ok(_) => {
                info!(languages = %config.languages, "Tesseract OCR initialized");
                OcrBackend::Local
            }
            Err(e) => {
                let reason = format!("Tesseract not available: {e}");
                warn!("{}", reason);
                OcrBackend::Unavailable { reason }
            }
        };

        Self {
            backend,
            config: config.clone(),
        }
    }

    /// Build a provider that rejects every request with `reason`.
    pub fn unavailable(config: &OcrConfig, reason: impl Into<String>) -> Self {
        Self {
            backend: OcrBackend::Unavailable {
                reason: reason.into(),
            },
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &OcrConfig {
        &self.config
    }
}

#[async_trait]
impl TextRecognizer for OcrProvider {
    async fn recognize(&self, image: GrayImage) -> Result<String> {
        match &self.backend {
            OcrBackend::Local => {
                let languages = self.config.languages.clone();
                let (width, height) = image.dimensions();

                let text = tokio::task::spawn_blocking(move || run_tesseract(&languages, image))
                    .await
                    .map_err(|e| ShelfScanError::Ocr(format!("OCR task panicked: {e}")))??;

                let text = text.trim().to_string();
                debug!(width, height, chars = text.len(), "Tesseract recognition finished");
                Ok(text)
            }
            OcrBackend::Unavailable { reason } => {
                Err(ShelfScanError::OcrUnavailable(reason.clone()))
            }
        }
    }

    fn is_available(&self) -> bool {
        matches!(self.backend, OcrBackend::Local)
    }

    fn languages(&self) -> &str {
        &self.config.languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(languages: &str) -> OcrConfig {
        OcrConfig {
            languages: languages.to_string(),
            ..OcrConfig::default()
        }
    }

    #[test]
    fn test_ocr_provider_graceful_degradation() {
        // Either Tesseract is installed or the provider degrades; never panics.
        let provider = OcrProvider::new(&make_config("eng"));
        let _ = provider.is_available();
        assert_eq!(provider.languages(), "eng");
    }

    #[test]
    fn test_missing_language_pack_is_unavailable() {
        let provider = OcrProvider::new(&make_config("zzz_not_a_language"));
        assert!(!provider.is_available());
    }

    #[tokio::test]
    async fn test_ocr_unavailable_returns_error() {
        let provider = OcrProvider::unavailable(&make_config("eng"), "Test unavailable");
        assert!(!provider.is_available());

        let result = provider.recognize(GrayImage::new(10, 10)).await;
        match result {
            Err(ShelfScanError::OcrUnavailable(reason)) => {
                assert_eq!(reason, "Test unavailable");
            }
            other => panic!("Expected OcrUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_image_yields_empty_text() {
        let provider = OcrProvider::new(&make_config("eng"));
        if !provider.is_available() {
            return;
        }

        let blank = GrayImage::from_pixel(200, 100, image::Luma([255]));
        let text = provider.recognize(blank).await.unwrap();
        assert!(text.is_empty(), "Blank image should have no text: {text:?}");
    }

    #[test]
    fn test_provider_clone_keeps_backend() {
        let provider = OcrProvider::unavailable(&make_config("tur+eng"), "nope");
        let cloned = provider.clone();
        assert_eq!(provider.is_available(), cloned.is_available());
        assert_eq!(cloned.languages(), "tur+eng");
    }
}
