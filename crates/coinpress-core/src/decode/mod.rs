//! Image decoding pipeline for Coinpress.
//!
//! This module provides functionality for:
//! - Decoding uploaded JPEG and PNG images with EXIF orientation correction
//! - Image resizing for compression attempts and analysis previews
//!
//! # Architecture
//!
//! Decoding happens exactly once per upload, before the compression loop
//! runs; every loop attempt resizes and re-encodes the already-decoded
//! pixels. All operations are synchronous and single-threaded within WASM,
//! intended to be driven from a Web Worker.

mod raster;
mod resize;
mod types;

pub use raster::{decode_image, get_orientation};
pub use resize::{fit_dimensions, resize, resize_to_fit};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
