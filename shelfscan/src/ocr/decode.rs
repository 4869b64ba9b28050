use base64::{engine::general_purpose::STANDARD, Engine};
use image::{ColorType, DynamicImage, GenericImageView, ImageReader};

use crate::error::{Result, ShelfScanError};

/// A decoded raster image, owned by a single scan request.
#[derive(Debug, Clone)]
pub struct RawImage {
    image: DynamicImage,
}

impl RawImage {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn color(&self) -> ColorType {
        self.image.color()
    }

    pub fn into_inner(self) -> DynamicImage {
        self.image
    }
}

/// Strip an optional data-URI header (`data:image/png;base64,`) from the payload.
///
/// Everything up to and including the first comma is dropped.
fn strip_data_uri_prefix(payload: &str) -> &str {
    match payload.split_once(',') {
        Some((_, rest)) => rest,
        None => payload,
    }
}

/// Decode the transport encoding of an image payload into raw bytes.
///
/// ASCII whitespace (line-wrapped base64) is ignored.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    let encoded: String = strip_data_uri_prefix(payload)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if encoded.is_empty() {
        return Err(ShelfScanError::Decode("Image payload is empty".to_string()));
    }

    STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| ShelfScanError::Decode(format!("Invalid base64 payload: {e}")))
}

/// Decode a base64 (optionally data-URI prefixed) image into a [`RawImage`].
pub fn decode_image(payload: &str) -> Result<RawImage> {
    let bytes = decode_payload(payload)?;

    let reader = ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ShelfScanError::Decode(format!("Failed to read image: {e}")))?;

    if reader.format().is_none() {
        return Err(ShelfScanError::Decode(
            "Unrecognized image format".to_string(),
        ));
    }

    let image = reader
        .decode()
        .map_err(|e| ShelfScanError::Decode(format!("Failed to decode image: {e}")))?;

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "Decoded image payload"
    );

    Ok(RawImage::new(image))
}
