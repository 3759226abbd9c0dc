//! WASM-compatible wrapper types for compressed images.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Coinpress types, handling the conversion between Rust and JavaScript data
//! representations.

use coinpress_core::CompressedImage;
use wasm_bindgen::prelude::*;

/// A compressed image wrapper for JavaScript.
///
/// Wraps the core `CompressedImage` and exposes the fields the upload flow
/// needs: the encoded bytes, the format tag to label the blob with, the
/// final dimensions, and the upload filename.
///
/// # Memory Management
///
/// The encoded bytes live in WASM memory. Calling `bytes()` copies them to
/// JavaScript memory as a `Uint8Array`; call it once and keep the result.
/// The `free()` method can be called to explicitly release WASM memory, but
/// this is optional as wasm-bindgen's finalizer handles cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsCompressedImage {
    inner: CompressedImage,
}

#[wasm_bindgen]
impl JsCompressedImage {
    /// Get the encoded image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the encoded image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the MIME-style format tag of the encoded bytes
    #[wasm_bindgen(getter)]
    pub fn format_tag(&self) -> String {
        self.inner.format.mime_type().to_string()
    }

    /// Get the size of the encoded image in bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.size_bytes()
    }

    /// Returns the encoded image bytes as a Uint8Array.
    ///
    /// Note: This creates a copy of the data for safe memory management.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    /// Filename to use when appending the bytes to upload form data.
    pub fn upload_filename(&self) -> String {
        self.inner.upload_filename()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsCompressedImage {
    /// Create a JsCompressedImage from a core CompressedImage.
    ///
    /// Internal constructor used by the compress bindings.
    pub(crate) fn from_compressed(inner: CompressedImage) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinpress_core::FormatTag;

    fn sample() -> JsCompressedImage {
        JsCompressedImage::from_compressed(CompressedImage {
            bytes: vec![0xFF, 0xD8, 0xFF, 0xD9],
            format: FormatTag::Jpeg,
            width: 120,
            height: 90,
        })
    }

    #[test]
    fn test_getters() {
        let img = sample();
        assert_eq!(img.width(), 120);
        assert_eq!(img.height(), 90);
        assert_eq!(img.format_tag(), "image/jpeg");
        assert_eq!(img.byte_length(), 4);
    }

    #[test]
    fn test_bytes_copies_data() {
        let img = sample();
        assert_eq!(img.bytes(), vec![0xFF, 0xD8, 0xFF, 0xD9]);
    }

    #[test]
    fn test_upload_filename() {
        assert_eq!(sample().upload_filename(), "coin-image.jpeg");
    }
}
