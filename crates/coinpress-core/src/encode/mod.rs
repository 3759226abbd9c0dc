//! Image encoding pipeline for Coinpress.
//!
//! This module provides functionality for:
//! - Parsing MIME-style format tags into encode targets
//! - Encoding decoded images to JPEG (quality-controlled) or PNG (lossless)
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be driven by the compression loop:
//! one `encode_image` call per attempt, with the format fixed by the source
//! upload and only the quality varying between attempts. All operations are
//! synchronous and single-threaded within WASM.

mod format;
mod jpeg;
mod png;

pub use format::FormatTag;
pub use jpeg::encode_jpeg;
pub use png::encode_png;

use thiserror::Error;

use crate::decode::DecodedImage;

/// Errors that can occur during image encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The MIME-style tag names a format this pipeline cannot encode
    #[error("Unsupported format tag: {0}")]
    UnsupportedFormat(String),

    /// Encoding backend failure
    #[error("{format} encoding failed: {message}")]
    EncodingFailed {
        format: &'static str,
        message: String,
    },
}

/// Encode a decoded image in the given format.
///
/// `quality` is a percentage (1-100) and only affects formats whose encoder
/// has a quality knob (see [`FormatTag::supports_quality`]); PNG ignores it.
/// JPEG output drops the alpha channel, matching what a canvas export does.
pub fn encode_image(
    image: &DecodedImage,
    format: FormatTag,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    match format {
        FormatTag::Jpeg => encode_jpeg(&image.to_rgb_pixels(), image.width, image.height, quality),
        FormatTag::Png => encode_png(&image.pixels, image.width, image.height),
    }
}
