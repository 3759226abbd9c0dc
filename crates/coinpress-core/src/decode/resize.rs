//! Image resizing for compression iterations and analysis previews.
//!
//! All functions return new `DecodedImage` instances without modifying the
//! input, so a single decode can feed every attempt of the compression loop.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` if either target dimension is zero,
/// `DecodeError::CorruptedFile` if the pixel buffer is inconsistent.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgba_image = image
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgba_image(resized))
}

/// Resize an image so its longest edge fits within `max_edge`, preserving
/// aspect ratio. Images already within the bound are returned unchanged,
/// never upscaled.
pub fn resize_to_fit(
    image: &DecodedImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::EmptyImage);
    }

    let (new_width, new_height) = fit_dimensions(image.width, image.height, max_edge);
    resize(image, new_width, new_height, filter)
}

/// Calculate the dimensions an image takes when constrained so its longer
/// edge is at most `max_dimension`, preserving aspect ratio.
///
/// Images already within the bound keep their dimensions. The scaled edge is
/// rounded half-up and floored at 1 px, so repeated calls on identical input
/// are deterministic.
pub fn fit_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }
    if width <= max_dimension && height <= max_dimension {
        return (width, height);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        // Landscape or square: constrain by width
        let new_height = (max_dimension as f64 / ratio).round() as u32;
        (max_dimension, new_height.max(1))
    } else {
        // Portrait: constrain by height
        let new_width = (max_dimension as f64 * ratio).round() as u32;
        (new_width.max(1), max_dimension)
    }
}
