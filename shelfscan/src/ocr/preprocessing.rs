use image::{DynamicImage, GenericImageView, GrayImage, RgbImage};

use super::decode::RawImage;
use crate::config::OcrConfig;

/// Preprocess a decoded cover photo for OCR
///
/// Applies the following transformations:
/// 1. Resizes images larger than `max_image_dimension` (aspect ratio kept)
/// 2. Drops the alpha channel
/// 3. Stretches contrast around the mean luminance by `contrast_factor`
/// 4. Converts to single-channel grayscale
///
/// Printed cover text is often low-contrast against busy artwork, and
/// color noise confuses Tesseract's glyph segmentation.
pub fn preprocess_image(raw: RawImage, config: &OcrConfig) -> GrayImage {
    let img = resize_if_needed(raw.into_inner(), config.max_image_dimension);
    let rgb = img.to_rgb8();
    let enhanced = enhance_contrast(rgb, config.contrast_factor);
    DynamicImage::ImageRgb8(enhanced).to_luma8()
}

/// Resize image if it exceeds maximum dimension while maintaining aspect ratio
///
/// Uses Lanczos3 filter for high-quality downscaling
fn resize_if_needed(img: DynamicImage, max_dim: u32) -> DynamicImage {
    let (width, height) = img.dimensions();

    if max_dim == 0 || (width <= max_dim && height <= max_dim) {
        return img;
    }

    let ratio = if width > height {
        max_dim as f32 / width as f32
    } else {
        max_dim as f32 / height as f32
    };

    let new_width = ((width as f32 * ratio) as u32).max(1);
    let new_height = ((height as f32 * ratio) as u32).max(1);

    img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3)
}

/// Rounded mean luminance of an RGB image.
fn mean_luminance(rgb: &RgbImage) -> f32 {
    let gray = DynamicImage::ImageRgb8(rgb.clone()).to_luma8();
    let pixel_count = gray.width() as u64 * gray.height() as u64;
    if pixel_count == 0 {
        return 0.0;
    }
    let sum: u64 = gray.pixels().map(|p| p[0] as u64).sum();
    (sum as f64 / pixel_count as f64).round() as f32
}

/// Push every channel away from the mean luminance by `factor`
///
/// `out = clamp(mean + factor * (in - mean))`. A factor of 1.0 leaves the
/// image unchanged.
fn enhance_contrast(mut rgb: RgbImage, factor: f32) -> RgbImage {
    if (factor - 1.0).abs() < f32::EPSILON {
        return rgb;
    }

    let mean = mean_luminance(&rgb);
    for pixel in rgb.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            let value = mean + factor * (*channel as f32 - mean);
            *channel = value.round().clamp(0.0, 255.0) as u8;
        }
    }
    rgb
}
