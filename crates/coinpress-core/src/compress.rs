//! Budget-driven image compression for upload preparation.
//!
//! The pinning service enforces a byte budget per upload (2 MiB for coin
//! artwork), so the raw upload is re-encoded until it fits. The search is
//! two-phase: quality is walked down first (cheap, keeps geometry), then the
//! resolution is shrunk and quality resets. Quality-of-detail is sacrificed
//! before geometry so the pinned image keeps as much of its original framing
//! as the budget allows.
//!
//! A single decode feeds every attempt; only resize and encode run inside
//! the loop. Each invocation owns its parameters and buffers, so independent
//! uploads can be compressed concurrently without coordination.

use thiserror::Error;

use crate::decode::{self, DecodeError, DecodedImage, FilterType};
use crate::encode::{self, EncodeError, FormatTag};

/// Starting bound for the longer image edge, in pixels.
pub const DEFAULT_MAX_DIMENSION: u32 = 1200;

/// Starting encoder quality, in percent.
pub const INITIAL_QUALITY: u8 = 70;

/// Quality decrement per attempt within a resolution tier.
pub const QUALITY_STEP: u8 = 20;

/// Quality is stepped down only while above this value, giving the
/// sequence 70, 50, 30, 10 within each resolution tier.
pub const QUALITY_FLOOR: u8 = 20;

/// Hard floor for the longer-edge bound. Once a tier reaches this the
/// search is out of knobs and fails rather than looping.
pub const MIN_DIMENSION: u32 = 64;

/// Hard cap on encode attempts across all tiers.
pub const MAX_ATTEMPTS: u32 = 40;

/// Byte budget the pinning service enforces for coin artwork (2 MiB).
pub const UPLOAD_BUDGET_BYTES: usize = 2 * 1024 * 1024;

/// Longest edge of the preview sent to the AI vision endpoint.
pub const ANALYSIS_MAX_EDGE: u32 = 600;

/// Parameters for one compression attempt.
///
/// Mutated between attempts of a single invocation; never shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingParameters {
    /// Upper bound for the longer image edge, in pixels.
    pub max_dimension: u32,
    /// Encoder quality in percent (meaningful for quality-controlled formats).
    pub quality: u8,
}

impl Default for EncodingParameters {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            quality: INITIAL_QUALITY,
        }
    }
}

/// A budget-satisfying (or best-effort) re-encoding of an upload.
#[derive(Debug, Clone)]
pub struct CompressedImage {
    /// The re-encoded image bytes.
    pub bytes: Vec<u8>,
    /// Format of `bytes`, always matching the source upload's tag.
    pub format: FormatTag,
    /// Width of the encoded image in pixels.
    pub width: u32,
    /// Height of the encoded image in pixels.
    pub height: u32,
}

impl CompressedImage {
    /// Size of the encoded bytes.
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Filename used when handing the bytes to the upload service.
    pub fn upload_filename(&self) -> String {
        format!("coin-image.{}", self.format.extension())
    }
}

/// Errors that can occur while compressing an upload to its budget.
#[derive(Debug, Error)]
pub enum CompressError {
    /// The upload could not be decoded. Fatal for this invocation.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// An encode attempt failed, or the format tag is unsupported.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Every knob was exhausted without meeting the budget. Carries the
    /// smallest candidate produced so the caller can choose between
    /// uploading it oversized and aborting.
    #[error("Budget of {budget} bytes not met after {attempts} attempts (smallest candidate: {} bytes)", .best.size_bytes())]
    BudgetExceeded {
        budget: usize,
        attempts: u32,
        best: Box<CompressedImage>,
    },
}

/// Re-encode an uploaded image so it fits within `budget` bytes.
///
/// The output keeps the source's format tag and aspect ratio. See the
/// module docs for the search order; the result of a successful call always
/// satisfies `size_bytes() <= budget`.
///
/// # Errors
///
/// `CompressError::Decode` if the bytes cannot be decoded,
/// `CompressError::Encode` for unsupported tags or encoder failures, and
/// `CompressError::BudgetExceeded` when the attempt cap or the
/// minimum-dimension floor is reached without meeting the budget.
pub fn compress_to_budget(
    bytes: &[u8],
    format_tag: &str,
    budget: usize,
) -> Result<CompressedImage, CompressError> {
    let format = FormatTag::parse(format_tag)?;
    let image = decode::decode_image(bytes)?;
    compress_decoded(&image, format, budget)
}

/// Compress an already-decoded image to `budget` bytes.
///
/// Useful when the caller has decoded once and wants to compress for
/// several targets (upload budget, analysis preview) without re-decoding.
pub fn compress_decoded(
    image: &DecodedImage,
    format: FormatTag,
    budget: usize,
) -> Result<CompressedImage, CompressError> {
    let mut params = EncodingParameters::default();

    let mut best = encode_candidate(image, format, params)?;
    let mut attempts = 1u32;
    if best.size_bytes() <= budget {
        return Ok(best);
    }

    while attempts < MAX_ATTEMPTS && step(&mut params, format) {
        let candidate = encode_candidate(image, format, params)?;
        attempts += 1;

        if candidate.size_bytes() <= budget {
            return Ok(candidate);
        }
        if candidate.size_bytes() < best.size_bytes() {
            best = candidate;
        }
    }

    Err(CompressError::BudgetExceeded {
        budget,
        attempts,
        best: Box::new(best),
    })
}

/// Produce the downscaled JPEG preview sent to the AI vision endpoint.
///
/// Always encodes JPEG regardless of the source format (the vision model
/// neither needs transparency nor lossless detail), fits within `max_edge`
/// without upscaling, and makes a single pass with no budget loop.
pub fn preview_jpeg(bytes: &[u8], max_edge: u32, quality: u8) -> Result<Vec<u8>, CompressError> {
    let image = decode::decode_image(bytes)?;
    let fitted = decode::resize_to_fit(&image, max_edge, FilterType::Bilinear)?;
    let jpeg = encode::encode_jpeg(
        &fitted.to_rgb_pixels(),
        fitted.width,
        fitted.height,
        quality,
    )?;
    Ok(jpeg)
}

/// Advance the search to the next attempt's parameters.
///
/// Quality first (while the format has a knob and quality is above the
/// floor), then a resolution shrink to 4/5 with quality reset. Returns false
/// once the minimum-dimension floor is reached with quality exhausted.
fn step(params: &mut EncodingParameters, format: FormatTag) -> bool {
    if format.supports_quality() && params.quality > QUALITY_FLOOR {
        params.quality -= QUALITY_STEP;
        return true;
    }
    if params.max_dimension <= MIN_DIMENSION {
        return false;
    }
    params.max_dimension = (params.max_dimension * 4 / 5).max(MIN_DIMENSION);
    params.quality = INITIAL_QUALITY;
    true
}

fn encode_candidate(
    image: &DecodedImage,
    format: FormatTag,
    params: EncodingParameters,
) -> Result<CompressedImage, CompressError> {
    let (width, height) = decode::fit_dimensions(image.width, image.height, params.max_dimension);

    let resized;
    let frame = if width == image.width && height == image.height {
        image
    } else {
        resized = decode::resize(image, width, height, FilterType::Bilinear)?;
        &resized
    };

    let bytes = encode::encode_image(frame, format, params.quality)?;
    Ok(CompressedImage {
        bytes,
        format,
        width,
        height,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
