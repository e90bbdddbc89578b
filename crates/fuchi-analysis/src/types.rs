//! Shared types for the fuchi analysis crate.

use serde::{Deserialize, Serialize};

/// Re-export `RgbaImage` so downstream crates can reference the decoded
/// pixel buffer without depending on `image` directly.
///
/// The buffer is row-major with a top-left origin; its raw byte length is
/// always `4 * width * height`.
pub use image::RgbaImage;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create new dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels (`width * height`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Dimensions of an existing RGBA buffer.
    #[must_use]
    pub fn of(buffer: &RgbaImage) -> Self {
        Self::new(buffer.width(), buffer.height())
    }
}

/// Errors that can occur during image analysis.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// A requested linear pixel index lies outside the buffer.
    #[error("pixel index {index} out of bounds for buffer of {len} pixels")]
    IndexOutOfBounds {
        /// The offending linear index.
        index: usize,
        /// Number of pixels in the buffer.
        len: usize,
    },

    /// The image source exposed no usable readiness notification.
    #[error("could not attach readiness listener to image source")]
    AttachmentFailure,

    /// The pixel buffer was requested before the source signalled readiness.
    #[error("image source is not ready")]
    NotReady,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn pixel_count_multiplies_dimensions() {
        assert_eq!(Dimensions::new(4, 3).pixel_count(), 12);
        assert_eq!(Dimensions::new(0, 7).pixel_count(), 0);
    }

    #[test]
    fn dimensions_of_buffer() {
        let buffer = RgbaImage::new(5, 2);
        assert_eq!(Dimensions::of(&buffer), Dimensions::new(5, 2));
    }

    #[test]
    fn error_index_out_of_bounds_display() {
        let err = AnalysisError::IndexOutOfBounds { index: 20, len: 16 };
        assert_eq!(
            err.to_string(),
            "pixel index 20 out of bounds for buffer of 16 pixels",
        );
    }

    #[test]
    fn error_empty_input_display() {
        assert_eq!(
            AnalysisError::EmptyInput.to_string(),
            "input image data is empty",
        );
    }

    #[test]
    fn error_attachment_failure_display() {
        assert_eq!(
            AnalysisError::AttachmentFailure.to_string(),
            "could not attach readiness listener to image source",
        );
    }

    #[test]
    fn dimensions_serde_round_trip() {
        let d = Dimensions::new(640, 480);
        let json = serde_json::to_string(&d).unwrap();
        let deserialized: Dimensions = serde_json::from_str(&json).unwrap();
        assert_eq!(d, deserialized);
    }
}
