//! Analyzer facade: ties the image source, the buffer cache, the
//! sampling pipeline, the distribution analysis, and the edge heuristic
//! into one query surface.
//!
//! Attaching waits for the source's one-shot readiness notification, so
//! no query can run against an image that has not finished loading. The
//! decoded buffer is cached lazily and owned exclusively by the
//! analyzer; [`Analyzer::invalidate`] drops the cache without touching
//! the source, and the buffer is re-derived on the next query.

use serde::Serialize;

use crate::distribution::{self, ColorGroup};
use crate::edge;
use crate::region::{DEFAULT_BORDER_BAND, DEFAULT_CORNER_DEPTH, Region};
use crate::sample::PixelSample;
use crate::sampler::{self, SampleConfig};
use crate::source::ImageSource;
use crate::types::{AnalysisError, Dimensions, RgbaImage};

/// Color analysis facade over an [`ImageSource`].
#[derive(Debug)]
pub struct Analyzer<S: ImageSource> {
    source: S,
    config: SampleConfig,
    /// Lazily cached decoded buffer; `None` until first use and after
    /// [`Self::invalidate`].
    buffer: Option<RgbaImage>,
}

impl<S: ImageSource> Analyzer<S> {
    /// Attach to a source with the default sampling config.
    ///
    /// Blocks on the source's readiness notification; returns
    /// immediately when the source is already ready.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::AttachmentFailure`] when the source
    /// refuses the readiness subscription or goes away before
    /// signalling.
    pub fn attach(source: S) -> Result<Self, AnalysisError> {
        Self::attach_with_config(source, SampleConfig::default())
    }

    /// Attach to a source with a custom sampling config.
    ///
    /// # Errors
    ///
    /// Same as [`Self::attach`].
    pub fn attach_with_config(
        mut source: S,
        config: SampleConfig,
    ) -> Result<Self, AnalysisError> {
        source.subscribe_ready()?.wait()?;
        Ok(Self {
            source,
            config,
            buffer: None,
        })
    }

    /// Image dimensions in pixels.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.source.dimensions()
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.dimensions().width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.dimensions().height
    }

    /// Drop the cached decoded buffer.
    ///
    /// The source itself is untouched; the buffer is re-derived from it
    /// on the next query.
    pub fn invalidate(&mut self) {
        self.buffer = None;
    }

    /// Populate the buffer cache if empty.
    fn ensure_buffer(&mut self) -> Result<(), AnalysisError> {
        if self.buffer.is_none() {
            self.buffer = Some(self.source.pixel_buffer()?);
        }
        Ok(())
    }

    /// Sample the pixels of a region through the configured pipeline.
    fn region_pixels(&mut self, region: Region) -> Result<Vec<PixelSample>, AnalysisError> {
        self.ensure_buffer()?;
        let buffer = self.buffer.as_ref().ok_or(AnalysisError::NotReady)?;
        let indices = region.indices(Dimensions::of(buffer));
        sampler::sample(buffer, &indices, &self.config)
    }

    /// Every pixel of the image, normalized and filtered.
    ///
    /// # Errors
    ///
    /// Propagates buffer acquisition failures from the source.
    pub fn all_pixels(&mut self) -> Result<Vec<PixelSample>, AnalysisError> {
        self.region_pixels(Region::Whole)
    }

    /// The pixels within `band` layers of any edge.
    ///
    /// # Errors
    ///
    /// Propagates buffer acquisition failures from the source.
    pub fn border_pixels(&mut self, band: u32) -> Result<Vec<PixelSample>, AnalysisError> {
        self.region_pixels(Region::Border { band })
    }

    /// The pixels of `depth` corner rings.
    ///
    /// # Errors
    ///
    /// Propagates buffer acquisition failures from the source.
    pub fn corner_pixels(&mut self, depth: u32) -> Result<Vec<PixelSample>, AnalysisError> {
        self.region_pixels(Region::Corner { depth })
    }

    /// Sample arbitrary linear pixel indices.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::IndexOutOfBounds`] for any index outside
    /// the buffer, and propagates buffer acquisition failures.
    pub fn pixels(&mut self, indices: &[usize]) -> Result<Vec<PixelSample>, AnalysisError> {
        self.ensure_buffer()?;
        let buffer = self.buffer.as_ref().ok_or(AnalysisError::NotReady)?;
        sampler::sample(buffer, indices, &self.config)
    }

    /// Group arbitrary samples into ranked color clusters.
    #[must_use]
    pub fn distribution(&self, samples: &[PixelSample]) -> Vec<ColorGroup> {
        distribution::distribution(samples)
    }

    /// Dominant colors of the whole image.
    ///
    /// Representative colors of every non-singleton cluster, ranked by
    /// descending cluster size.
    ///
    /// # Errors
    ///
    /// Propagates buffer acquisition failures from the source.
    pub fn colors(&mut self) -> Result<Vec<PixelSample>, AnalysisError> {
        let pixels = self.all_pixels()?;
        Ok(representatives(&pixels))
    }

    /// Dominant colors of the border band.
    ///
    /// # Errors
    ///
    /// Propagates buffer acquisition failures from the source.
    pub fn border_colors(&mut self, band: u32) -> Result<Vec<PixelSample>, AnalysisError> {
        let pixels = self.border_pixels(band)?;
        Ok(representatives(&pixels))
    }

    /// Dominant colors of the corner wedges.
    ///
    /// # Errors
    ///
    /// Propagates buffer acquisition failures from the source.
    pub fn corner_colors(&mut self, depth: u32) -> Result<Vec<PixelSample>, AnalysisError> {
        let pixels = self.corner_pixels(depth)?;
        Ok(representatives(&pixels))
    }

    /// Whether the image content likely bleeds past its boundary.
    ///
    /// # Errors
    ///
    /// Propagates buffer acquisition failures from the source.
    pub fn has_edge(&mut self) -> Result<bool, AnalysisError> {
        self.ensure_buffer()?;
        let buffer = self.buffer.as_ref().ok_or(AnalysisError::NotReady)?;
        edge::has_edge(buffer, &self.config)
    }

    /// Run every query once and collect the results.
    ///
    /// # Errors
    ///
    /// Propagates buffer acquisition failures from the source.
    pub fn report(&mut self, band: u32, depth: u32) -> Result<ColorReport, AnalysisError> {
        Ok(ColorReport {
            dimensions: self.dimensions(),
            colors: self.colors()?,
            border_colors: self.border_colors(band)?,
            corner_colors: self.corner_colors(depth)?,
            has_edge: self.has_edge()?,
        })
    }

    /// [`Self::report`] with the default band and depth.
    ///
    /// # Errors
    ///
    /// Propagates buffer acquisition failures from the source.
    pub fn default_report(&mut self) -> Result<ColorReport, AnalysisError> {
        self.report(DEFAULT_BORDER_BAND, DEFAULT_CORNER_DEPTH)
    }
}

/// Project ranked groups down to their representative colors.
fn representatives(pixels: &[PixelSample]) -> Vec<PixelSample> {
    distribution::distribution(pixels)
        .into_iter()
        .map(|group| group.representative)
        .collect()
}

/// Results of a full analysis pass over one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport {
    /// Source image dimensions in pixels.
    pub dimensions: Dimensions,
    /// Dominant colors of the whole image, ranked.
    pub colors: Vec<PixelSample>,
    /// Dominant colors of the border band, ranked.
    pub border_colors: Vec<PixelSample>,
    /// Dominant colors of the corner wedges, ranked.
    pub corner_colors: Vec<PixelSample>,
    /// Whether the content likely bleeds past the boundary.
    pub has_edge: bool,
}
