#![allow(dead_code)]

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, GrayImage, ImageFormat};
use serde_json::json;

use shelfscan::catalog::CatalogClient;
use shelfscan::config::{CatalogConfig, OcrConfig};
use shelfscan::error::Result;
use shelfscan::extraction::BookScanner;
use shelfscan::ocr::TextRecognizer;

pub const VOLUMES_PATH: &str = "/books/v1/volumes";

/// Recognizer that returns canned text and counts invocations.
pub struct StubRecognizer {
    text: String,
    calls: AtomicUsize,
}

impl StubRecognizer {
    pub fn new(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: text.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextRecognizer for StubRecognizer {
    async fn recognize(&self, _image: GrayImage) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.clone())
    }

    fn languages(&self) -> &str {
        "tur+eng"
    }
}

pub fn catalog_config(server_uri: &str) -> CatalogConfig {
    CatalogConfig {
        enabled: true,
        base_url: format!("{server_uri}{VOLUMES_PATH}"),
        api_key: None,
        languages: "tr|en".to_string(),
        timeout_secs: 1,
    }
}

pub fn catalog_client(server_uri: &str) -> CatalogClient {
    CatalogClient::new(&catalog_config(server_uri)).expect("catalog client")
}

pub fn scanner(recognizer: Arc<StubRecognizer>, catalog: Option<CatalogClient>) -> BookScanner {
    BookScanner::new(recognizer, catalog, OcrConfig::default())
}

/// A small white PNG as a data URI.
pub fn encoded_png() -> String {
    let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(40, 20, image::Luma([255])));
    let mut output = Vec::new();
    img.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)
        .expect("encode png");
    format!("data:image/png;base64,{}", STANDARD.encode(output))
}

pub fn volumes_body(title: &str, authors: &[&str]) -> serde_json::Value {
    json!({
        "kind": "books#volumes",
        "totalItems": 1,
        "items": [
            {
                "kind": "books#volume",
                "volumeInfo": {
                    "title": title,
                    "authors": authors,
                }
            }
        ]
    })
}

pub fn empty_volumes_body() -> serde_json::Value {
    json!({ "kind": "books#volumes", "totalItems": 0 })
}
