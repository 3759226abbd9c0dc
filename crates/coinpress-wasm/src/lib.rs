//! Coinpress WASM - WebAssembly bindings for Coinpress
//!
//! This crate exposes the coinpress-core preparation pipeline to the
//! JavaScript/TypeScript application that drives the minting flow.
//!
//! # Module Structure
//!
//! - `compress` - Budget-driven compression and analysis preview encoding
//! - `types` - WASM-compatible wrapper types for compressed images
//! - `metadata` - Coin metadata document construction and validation
//! - `analysis` - AI reply parsing into a coin profile
//! - `cid` - Content identifier version detection and URL rendering
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_to_budget } from '@coinpress/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const compressed = compress_to_budget(bytes, file.type, 2 * 1024 * 1024);
//! console.log(`Compressed to ${compressed.byte_length} bytes`);
//! ```

use wasm_bindgen::prelude::*;

mod analysis;
mod cid;
mod compress;
mod metadata;
mod types;

// Re-export public types
pub use analysis::parse_analysis_reply;
pub use cid::{cid_version, gateway_url, ipfs_uri};
pub use compress::{compress_for_analysis, compress_to_budget};
pub use metadata::{build_coin_metadata, coin_metadata_json, validate_coin_metadata};
pub use types::JsCompressedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
