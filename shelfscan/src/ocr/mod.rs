//! OCR (Optical Character Recognition) Module
//!
//! Turns a transport-encoded cover photo into raw text in three steps:
//! - [`decode_image`] strips an optional data-URI header and decodes the
//!   base64 payload into a [`RawImage`]
//! - [`preprocess_image`] downsizes, boosts contrast and converts to grayscale
//! - a [`TextRecognizer`] runs the engine; [`OcrProvider`] is the local
//!   Tesseract implementation via leptess
//!
//! # Configuration
//!
//! Behavior is controlled via `OcrConfig` (see `config.rs`):
//! - `languages`: Tesseract language hint, e.g. `tur+eng`
//! - `max_image_dimension`: longest side before downscaling
//! - `contrast_factor`: contrast multiplier applied before grayscale
//!
//! # Usage
//!
//! ```rust,ignore
//! let raw = decode_image(&payload)?;
//! let gray = preprocess_image(raw, &config.ocr);
//! let text = OcrProvider::new(&config.ocr).recognize(gray).await?;
//! ```

mod decode;
mod preprocessing;
mod provider;

pub use decode::{decode_image, decode_payload, RawImage};
pub use preprocessing::preprocess_image;
pub use provider::{OcrProvider, TextRecognizer};
