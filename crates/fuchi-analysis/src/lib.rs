//! fuchi-analysis: pure pixel sampling and color distribution analysis
//! (sans-IO).
//!
//! Infers background/fill colors and edge-bleed behavior of arbitrary
//! raster images from their pixel data alone:
//! region enumeration -> sampling (normalize -> filter) ->
//! distribution grouping -> ranked dominant colors, plus an
//! opacity-based edge-bleed heuristic.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! RGBA buffers behind the [`ImageSource`] seam and returns structured
//! data. File and terminal interaction lives in the `fuchi` CLI crate.

pub mod analyzer;
pub mod distribution;
pub mod edge;
pub mod region;
pub mod sample;
pub mod sampler;
pub mod source;
pub mod types;

pub use analyzer::{Analyzer, ColorReport};
pub use distribution::ColorGroup;
pub use edge::EDGE_PROBE_BAND;
pub use region::{DEFAULT_BORDER_BAND, DEFAULT_CORNER_DEPTH, Region};
pub use sample::{PixelSample, TRANSPARENT};
pub use sampler::{FilterKind, NormalizerKind, SampleConfig};
pub use source::{DecodedImage, ImageSource, ReadySignal};
pub use types::{AnalysisError, Dimensions, RgbaImage};

/// Run a full color analysis over raw image bytes with defaults.
///
/// Decodes the image (PNG, JPEG, BMP, WebP), attaches an analyzer with
/// the default sampling config, and collects a [`ColorReport`] at the
/// default border band and corner depth.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyInput`] if `bytes` is empty and
/// [`AnalysisError::ImageDecode`] if the image
/// format is unrecognized.
pub fn analyze(bytes: &[u8]) -> Result<ColorReport, AnalysisError> {
    analyze_with_config(
        bytes,
        SampleConfig::default(),
        DEFAULT_BORDER_BAND,
        DEFAULT_CORNER_DEPTH,
    )
}

/// Run a full color analysis with a custom sampling config, border
/// band, and corner depth.
///
/// # Errors
///
/// Same as [`analyze`].
pub fn analyze_with_config(
    bytes: &[u8],
    config: SampleConfig,
    band: u32,
    depth: u32,
) -> Result<ColorReport, AnalysisError> {
    let source = DecodedImage::from_bytes(bytes)?;
    let mut analyzer = Analyzer::attach_with_config(source, config)?;
    analyzer.report(band, depth)
}
