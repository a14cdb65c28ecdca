// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Image loading and display encoding for uploaded files

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat};
use thiserror::Error;

/// Default maximum size of a single uploaded image (10MB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// MIME type reported for every uploaded image on the result page.
///
/// The real upload type is not sniffed for display; browsers render the
/// common formats regardless of the declared type.
pub const DISPLAY_MIME: &str = "image/png";

/// Largest accepted ratio between the long and short side of an image.
///
/// Preprocessing scales the short side to 256, so this bounds the resize
/// target at 256 x 16384 pixels.
pub const MAX_ASPECT_RATIO: u32 = 64;

/// Errors raised while turning uploaded bytes into pixels
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Image data is too large: {0} bytes (max: {1} bytes)")]
    TooLarge(usize, usize),

    #[error("Unsupported image format")]
    UnsupportedFormat,

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("Image data is empty")]
    EmptyData,

    #[error(
        "Image dimensions {0}x{1} exceed the maximum aspect ratio of {max}:1",
        max = MAX_ASPECT_RATIO
    )]
    DimensionsTooLarge(u32, u32),
}

/// Image information extracted during loading
#[derive(Debug, Clone)]
pub struct ImageInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Format detected from the magic bytes
    pub format: ImageFormat,
    /// Size in bytes
    pub size_bytes: usize,
}

/// Decode raw image bytes from a multipart upload
///
/// # Arguments
/// * `bytes` - Raw image bytes
/// * `max_bytes` - Upper bound on the accepted upload size
///
/// # Returns
/// * `Ok((DynamicImage, ImageInfo))` - The decoded image and metadata
/// * `Err(ImageError)` - If the bytes are not a readable image
pub fn decode_image_bytes(
    bytes: &[u8],
    max_bytes: usize,
) -> Result<(DynamicImage, ImageInfo), ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::EmptyData);
    }

    if bytes.len() > max_bytes {
        return Err(ImageError::TooLarge(bytes.len(), max_bytes));
    }

    // Detect format from magic bytes
    let format = detect_format(bytes)?;

    let img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| ImageError::DecodeFailed(e.to_string()))?;

    check_dimensions(img.width(), img.height())?;

    let info = ImageInfo {
        width: img.width(),
        height: img.height(),
        format,
        size_bytes: bytes.len(),
    };

    Ok((img, info))
}

/// Reject images too elongated to resize for the classifier
///
/// A thin strip compresses to a few bytes but its resize target grows with
/// the aspect ratio, so the byte limit alone does not bound memory.
pub fn check_dimensions(width: u32, height: u32) -> Result<(), ImageError> {
    let (long, short) = (width.max(height) as u64, width.min(height) as u64);
    if short == 0 || long > short * MAX_ASPECT_RATIO as u64 {
        return Err(ImageError::DimensionsTooLarge(width, height));
    }
    Ok(())
}

/// Detect image format from magic bytes
///
/// # Returns
/// * `Ok(ImageFormat)` - Detected format
/// * `Err(ImageError::UnsupportedFormat)` - If format cannot be detected
pub fn detect_format(bytes: &[u8]) -> Result<ImageFormat, ImageError> {
    if bytes.len() < 4 {
        return Err(ImageError::UnsupportedFormat);
    }

    match bytes {
        // PNG: 89 50 4E 47 (0x89 P N G)
        [0x89, 0x50, 0x4E, 0x47, ..] => Ok(ImageFormat::Png),

        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Ok(ImageFormat::Jpeg),

        // WebP: RIFF .... WEBP
        [0x52, 0x49, 0x46, 0x46, _, _, _, _, 0x57, 0x45, 0x42, 0x50, ..] => Ok(ImageFormat::WebP),

        // GIF: GIF87a or GIF89a
        [0x47, 0x49, 0x46, 0x38, x, ..] if *x == 0x37 || *x == 0x39 => Ok(ImageFormat::Gif),

        // BMP: BM
        [0x42, 0x4D, ..] => Ok(ImageFormat::Bmp),

        // TIFF: II (little-endian) or MM (big-endian)
        [0x49, 0x49, 0x2A, 0x00, ..] | [0x4D, 0x4D, 0x00, 0x2A, ..] => Ok(ImageFormat::Tiff),

        _ => Err(ImageError::UnsupportedFormat),
    }
}

/// Short name of a detected format, for logs
pub fn format_name(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "png",
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::WebP => "webp",
        ImageFormat::Gif => "gif",
        ImageFormat::Bmp => "bmp",
        ImageFormat::Tiff => "tiff",
        _ => "unknown",
    }
}

/// Base64-encode the original upload bytes (standard alphabet, padded)
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Build a `data:` URI from a MIME type and a base64 payload
pub fn data_uri(mime: &str, base64_payload: &str) -> String {
    format!("data:{};base64,{}", mime, base64_payload)
}
