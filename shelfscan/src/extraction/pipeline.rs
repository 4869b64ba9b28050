use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use super::heuristics::{extract_candidates, RecognizedText};
use crate::catalog::{CatalogClient, CatalogMatch};
use crate::config::OcrConfig;
use crate::error::{Result, ShelfScanError};
use crate::ocr::{decode_image, preprocess_image, TextRecognizer};

/// OCR-only outcome of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub title: String,
    /// Empty when no second line survived the heuristic.
    pub author: String,
    pub raw_text: String,
}

/// Scan outcome after reconciling with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedScan {
    pub title: String,
    pub author: String,
    /// Whether title and author come from a catalog record.
    pub matched: bool,
    pub catalog_error: Option<String>,
    pub raw_text: String,
}

impl ResolvedScan {
    fn from_ocr(scan: ScanResult, catalog_error: Option<String>) -> Self {
        Self {
            title: scan.title,
            author: scan.author,
            matched: false,
            catalog_error,
            raw_text: scan.raw_text,
        }
    }

    fn from_catalog(found: CatalogMatch, raw_text: String) -> Self {
        Self {
            title: found.title,
            author: found.author,
            matched: true,
            catalog_error: None,
            raw_text,
        }
    }
}

/// Collapse raw OCR text into a single-line search query.
fn fallback_query(raw_text: &str) -> String {
    raw_text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cover photo → (title, author) pipeline.
///
/// Holds only read-only handles; every call is independent of every other.
#[derive(Clone)]
pub struct BookScanner {
    recognizer: Arc<dyn TextRecognizer>,
    catalog: Option<CatalogClient>,
    ocr_config: OcrConfig,
}

impl BookScanner {
    pub fn new(
        recognizer: Arc<dyn TextRecognizer>,
        catalog: Option<CatalogClient>,
        ocr_config: OcrConfig,
    ) -> Self {
        Self {
            recognizer,
            catalog,
            ocr_config,
        }
    }

    pub fn recognizer(&self) -> &dyn TextRecognizer {
        self.recognizer.as_ref()
    }

    pub fn catalog(&self) -> Option<&CatalogClient> {
        self.catalog.as_ref()
    }

    /// Decode, preprocess and recognize an encoded image.
    ///
    /// Decode failures return before the recognizer is touched.
    pub async fn recognize(&self, image: &str) -> Result<String> {
        let raw = decode_image(image)?;
        let gray = preprocess_image(raw, &self.ocr_config);
        let text = self.recognizer.recognize(gray).await?;
        Ok(text.trim().to_string())
    }

    /// Run OCR and the title/author heuristic.
    pub async fn scan(&self, image: &str) -> Result<ScanResult> {
        let raw_text = self.recognize(image).await?;
        if raw_text.is_empty() {
            return Err(ShelfScanError::NoTextDetected);
        }

        let text = RecognizedText::from_raw(&raw_text);
        let candidates = extract_candidates(&text);
        debug!(lines = text.len(), ?candidates, "Heuristic candidates");

        let Some(title) = candidates.title else {
            return Err(ShelfScanError::NoTitleDetected { raw_text });
        };

        info!(title = %title, "Scanned book cover");
        Ok(ScanResult {
            title,
            author: candidates.author.unwrap_or_default(),
            raw_text,
        })
    }

    /// Run [`BookScanner::scan`], then reconcile with the catalog if one is configured.
    ///
    /// A catalog miss or failure keeps the OCR pair. When no title survives the
    /// heuristic, the whole recognized text is tried as the query before
    /// giving up with `NoTitleDetected`.
    pub async fn scan_and_resolve(&self, image: &str) -> Result<ResolvedScan> {
        match self.scan(image).await {
            Ok(scan) => {
                let Some(catalog) = &self.catalog else {
                    return Ok(ResolvedScan::from_ocr(scan, None));
                };

                let found = catalog.lookup(&scan.title).await;
                if found.found {
                    Ok(ResolvedScan::from_catalog(found, scan.raw_text))
                } else {
                    Ok(ResolvedScan::from_ocr(scan, found.error))
                }
            }
            Err(ShelfScanError::NoTitleDetected { raw_text }) => {
                if let Some(catalog) = &self.catalog {
                    let found = catalog.lookup(&fallback_query(&raw_text)).await;
                    if found.found {
                        info!(title = %found.title, "Resolved untitled scan from raw text");
                        return Ok(ResolvedScan::from_catalog(found, raw_text));
                    }
                }
                Err(ShelfScanError::NoTitleDetected { raw_text })
            }
            Err(e) => Err(e),
        }
    }

    /// Look up a free-text query; `None` when no catalog is configured.
    pub async fn lookup(&self, query: &str) -> Option<CatalogMatch> {
        match &self.catalog {
            Some(catalog) => Some(catalog.lookup(query).await),
            None => None,
        }
    }
}
