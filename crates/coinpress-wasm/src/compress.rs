//! Image compression WASM bindings.
//!
//! This module exposes the budget-driven compressor and the analysis
//! preview encoder to JavaScript. Both run synchronously and are intended
//! to be called from a Web Worker so the main thread stays responsive.
//!
//! # Example
//!
//! ```typescript
//! import { compress_to_budget, compress_for_analysis } from '@coinpress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//!
//! // Fit the upload into the 2 MiB pinning budget
//! const compressed = compress_to_budget(bytes, file.type, 2 * 1024 * 1024);
//! const blob = new Blob([compressed.bytes()], { type: compressed.format_tag });
//!
//! // Small JPEG preview for the vision model
//! const preview = compress_for_analysis(bytes, 600, 80);
//! ```

use crate::types::JsCompressedImage;
use coinpress_core::compress;
use wasm_bindgen::prelude::*;

/// Re-encode an uploaded image so it fits within `budget` bytes.
///
/// The output keeps the source's format tag (`image/jpeg`, `image/jpg`, or
/// `image/png`) and aspect ratio. Quality is reduced before resolution, per
/// the upload pipeline's fidelity policy.
///
/// # Arguments
///
/// * `bytes` - The uploaded image bytes as a `Uint8Array`
/// * `format_tag` - MIME-style tag of the upload (e.g. `file.type`)
/// * `budget` - Maximum allowed encoded size in bytes
///
/// # Errors
///
/// Returns an error if:
/// - The bytes cannot be decoded
/// - The format tag names an unsupported format
/// - No candidate fits the budget within the bounded search
#[wasm_bindgen]
pub fn compress_to_budget(
    bytes: &[u8],
    format_tag: &str,
    budget: usize,
) -> Result<JsCompressedImage, JsValue> {
    let start = js_sys::Date::now();

    let compressed = compress::compress_to_budget(bytes, format_tag, budget)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    web_sys::console::log_1(
        &format!(
            "Upload compression completed in {:.2}ms ({}x{}, {} bytes)",
            js_sys::Date::now() - start,
            compressed.width,
            compressed.height,
            compressed.size_bytes(),
        )
        .into(),
    );

    Ok(JsCompressedImage::from_compressed(compressed))
}

/// Produce the downscaled JPEG preview sent to the AI vision endpoint.
///
/// Always encodes JPEG regardless of the source format, fits within
/// `max_edge` pixels without upscaling.
///
/// # Arguments
///
/// * `bytes` - The uploaded image bytes as a `Uint8Array`
/// * `max_edge` - Maximum length of the longest edge in pixels (typically 600)
/// * `quality` - JPEG quality (1-100)
#[wasm_bindgen]
pub fn compress_for_analysis(
    bytes: &[u8],
    max_edge: u32,
    quality: u8,
) -> Result<Vec<u8>, JsValue> {
    let start = js_sys::Date::now();

    let preview = compress::preview_jpeg(bytes, max_edge, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    web_sys::console::log_1(
        &format!(
            "Analysis preview completed in {:.2}ms ({} bytes, JPEG)",
            js_sys::Date::now() - start,
            preview.len(),
        )
        .into(),
    );

    Ok(preview)
}
