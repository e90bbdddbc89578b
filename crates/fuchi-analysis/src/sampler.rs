//! Sampling pipeline: turn linear pixel indices into [`PixelSample`]s.
//!
//! Each index is resolved against the RGBA buffer, built into a sample,
//! run through the configured normalizers in order, and then through the
//! configured filters in order. Any filter rejection drops the sample
//! entirely. Output preserves the input index order modulo dropped
//! samples.
//!
//! # Strategy pattern
//!
//! Normalizers and filters are pluggable steps selected at runtime via
//! the [`NormalizerKind`] and [`FilterKind`] enums, so a caller (or a
//! serialized config) can change sampling behavior without new code in
//! the core layer.

use serde::{Deserialize, Serialize};

use crate::sample::PixelSample;
use crate::types::{AnalysisError, Dimensions, RgbaImage};

/// A pure transform applied to a sample before filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NormalizerKind {
    /// Snap alpha to `1.0` when at or above `threshold`, else to `0.0`.
    ///
    /// With the default threshold of `1.0` only fully opaque pixels pass
    /// through as opaque; everything else becomes fully transparent.
    AlphaSnap {
        /// Snap threshold in `[0, 1]`.
        threshold: f32,
    },
}

impl NormalizerKind {
    /// Apply the transform to a sample.
    #[must_use]
    pub fn apply(self, mut sample: PixelSample) -> PixelSample {
        match self {
            Self::AlphaSnap { threshold } => {
                sample.a = if sample.a >= threshold { 1.0 } else { 0.0 };
                sample
            }
        }
    }
}

/// A pure predicate deciding whether a sample is retained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FilterKind {
    /// Keep the sample iff its alpha is at least `threshold`.
    AlphaAtLeast {
        /// Minimum alpha in `[0, 1]`.
        threshold: f32,
    },
}

impl FilterKind {
    /// Whether the sample passes the predicate.
    #[must_use]
    pub fn keep(self, sample: &PixelSample) -> bool {
        match self {
            Self::AlphaAtLeast { threshold } => sample.a >= threshold,
        }
    }
}

/// Configuration for the sampling pipeline.
///
/// The default config snaps alpha at full opacity and then keeps only
/// fully opaque samples, so translucent and transparent pixels never
/// reach the distribution analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleConfig {
    /// Transforms applied to each sample, in order.
    pub normalizers: Vec<NormalizerKind>,
    /// Predicates applied after normalization, in order. The first
    /// rejection drops the sample.
    pub filters: Vec<FilterKind>,
}

impl SampleConfig {
    /// Default alpha threshold for both the snap normalizer and the
    /// keep filter.
    pub const DEFAULT_ALPHA_THRESHOLD: f32 = 1.0;

    /// Config with the default steps at a custom alpha threshold.
    #[must_use]
    pub fn with_alpha_threshold(threshold: f32) -> Self {
        Self {
            normalizers: vec![NormalizerKind::AlphaSnap { threshold }],
            filters: vec![FilterKind::AlphaAtLeast { threshold }],
        }
    }

    /// Config with no normalizers and no filters: every enumerated pixel
    /// is sampled as-is.
    #[must_use]
    pub const fn passthrough() -> Self {
        Self {
            normalizers: Vec::new(),
            filters: Vec::new(),
        }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self::with_alpha_threshold(Self::DEFAULT_ALPHA_THRESHOLD)
    }
}

/// Sample the buffer at the given linear indices.
///
/// For each index the RGBA pixel at `(index mod width, index / width)`
/// is read, normalized, and filtered per `config`.
///
/// # Errors
///
/// Returns [`AnalysisError::IndexOutOfBounds`] if any index is not
/// within `[0, width * height)`. The check happens before any pixel
/// access, so the failure is raised even for indices that would be
/// filtered out.
pub fn sample(
    buffer: &RgbaImage,
    indices: &[usize],
    config: &SampleConfig,
) -> Result<Vec<PixelSample>, AnalysisError> {
    let len = Dimensions::of(buffer).pixel_count();
    #[allow(clippy::cast_possible_truncation)]
    let width = buffer.width() as usize;

    let mut out = Vec::with_capacity(indices.len());
    for &index in indices {
        if index >= len {
            return Err(AnalysisError::IndexOutOfBounds { index, len });
        }
        #[allow(clippy::cast_possible_truncation)]
        let x = (index % width) as u32;
        #[allow(clippy::cast_possible_truncation)]
        let y = (index / width) as u32;

        let mut sample = PixelSample::from_rgba(buffer.get_pixel(x, y).0, x, y);
        for normalizer in &config.normalizers {
            sample = normalizer.apply(sample);
        }
        if config.filters.iter().all(|filter| filter.keep(&sample)) {
            out.push(sample);
        }
    }
    Ok(out)
}
