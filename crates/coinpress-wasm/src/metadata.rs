//! Coin metadata WASM bindings.
//!
//! The minting flow builds a metadata JSON document referencing the pinned
//! artwork, validates it before spending gas, and uploads the serialized
//! form as `metadata.json`. These bindings expose all three steps.
//!
//! # Example
//!
//! ```typescript
//! import { build_coin_metadata, coin_metadata_json } from '@coinpress/wasm';
//!
//! const metadata = build_coin_metadata(
//!   name, symbol, description, imageUri, compressed.format_tag,
//! );
//!
//! const json = coin_metadata_json(name, symbol, description, imageUri, compressed.format_tag);
//! const blob = new Blob([json], { type: 'application/json' });
//! ```

use coinpress_core::{CoinMetadata, CoinProfile, FormatTag};
use wasm_bindgen::prelude::*;

/// Build and validate a coin metadata document.
///
/// The symbol is sanitized (uppercase alphanumeric, at most 10 chars)
/// before validation, so lightly-malformed input still produces a valid
/// document. Returns the document as a plain JavaScript object.
///
/// # Errors
///
/// Returns an error if the format tag is unsupported or validation fails
/// (empty name, unusable symbol, bad image URI scheme).
#[wasm_bindgen]
pub fn build_coin_metadata(
    name: &str,
    symbol: &str,
    description: &str,
    image_uri: &str,
    format_tag: &str,
) -> Result<JsValue, JsValue> {
    let metadata = build(name, symbol, description, image_uri, format_tag)
        .map_err(|e| JsValue::from_str(&e))?;
    serde_wasm_bindgen::to_value(&metadata).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build, validate, and serialize a coin metadata document to pretty JSON.
///
/// The returned string is the exact `metadata.json` payload to upload.
#[wasm_bindgen]
pub fn coin_metadata_json(
    name: &str,
    symbol: &str,
    description: &str,
    image_uri: &str,
    format_tag: &str,
) -> Result<String, JsValue> {
    let metadata = build(name, symbol, description, image_uri, format_tag)
        .map_err(|e| JsValue::from_str(&e))?;
    metadata
        .to_json_pretty()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate an existing metadata object (e.g. one round-tripped through the
/// host application's state).
#[wasm_bindgen]
pub fn validate_coin_metadata(value: JsValue) -> Result<(), JsValue> {
    let metadata: CoinMetadata =
        serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    metadata
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

// Error type is String rather than JsValue so the helper stays testable on
// native targets; the bindings convert at the boundary.
fn build(
    name: &str,
    symbol: &str,
    description: &str,
    image_uri: &str,
    format_tag: &str,
) -> Result<CoinMetadata, String> {
    let format = FormatTag::parse(format_tag).map_err(|e| e.to_string())?;
    let profile = CoinProfile::new(name, symbol, description);
    let metadata = CoinMetadata::new(&profile, image_uri, format);
    metadata.validate().map_err(|e| e.to_string())?;
    Ok(metadata)
}

/// Tests for metadata bindings.
///
/// The `JsValue`-returning paths only run on wasm32; native tests cover the
/// shared `build` helper.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_valid_document() {
        let metadata = build(
            "Sunset Coin",
            "sun",
            "Golden hour.",
            "ipfs://bafybeigdyrzt5example",
            "image/png",
        )
        .unwrap();

        assert_eq!(metadata.ticker, "SUN");
        assert_eq!(metadata.content.mime, "image/png");
    }

    #[test]
    fn test_build_rejects_bad_format_tag() {
        let result = build("N", "SYM", "D", "ipfs://cid", "image/bmp");
        assert!(result.is_err());
    }

    #[test]
    fn test_build_rejects_bad_image_uri() {
        let result = build("N", "SYM", "D", "file:///tmp/coin.png", "image/png");
        assert!(result.is_err());
    }
}
