//! Pixel samples: one pixel's normalized color tied to its coordinate.
//!
//! A [`PixelSample`] is produced by the sampling pipeline from one linear
//! buffer index. Color channels stay as 8-bit integers; alpha is
//! normalized to `[0, 1]`. Samples are value types: once the pipeline has
//! applied its normalize/filter decisions they are never mutated.

use serde::{Deserialize, Serialize};

/// The textual form shared by every fully transparent color.
///
/// Transparent pixels carry no meaningful RGB information, so all samples
/// with `a == 0` collapse onto this single key instead of scattering
/// across per-RGB `rgba(...)` strings.
pub const TRANSPARENT: &str = "transparent";

/// One sampled pixel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSample {
    /// Red channel (0-255).
    pub r: u8,
    /// Green channel (0-255).
    pub g: u8,
    /// Blue channel (0-255).
    pub b: u8,
    /// Alpha, normalized to `[0, 1]` (raw byte / 255).
    pub a: f32,
    /// Horizontal coordinate (pixels from the left edge).
    pub x: u32,
    /// Vertical coordinate (pixels from the top edge).
    pub y: u32,
}

impl PixelSample {
    /// Build a sample from raw RGBA bytes and a coordinate.
    ///
    /// The alpha byte is normalized to `[0, 1]`; byte 255 yields exactly
    /// `1.0` and byte 0 exactly `0.0`.
    #[must_use]
    pub fn from_rgba(rgba: [u8; 4], x: u32, y: u32) -> Self {
        Self {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: f32::from(rgba[3]) / 255.0,
            x,
            y,
        }
    }

    /// Hex form of the color: `#rrggbb`, or `"transparent"` when `a == 0`.
    #[must_use]
    pub fn hex(&self) -> String {
        if self.is_transparent() {
            return TRANSPARENT.to_owned();
        }
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Functional rgba form of the color: `rgba(r,g,b,a)`.
    #[must_use]
    pub fn rgba_string(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }

    /// Canonical grouping key derived from `(r, g, b, a)`.
    ///
    /// Two samples with identical channels produce identical keys
    /// regardless of coordinate. Fully transparent samples all share the
    /// distinguished [`TRANSPARENT`] key.
    #[must_use]
    pub fn key(&self) -> String {
        if self.is_transparent() {
            return TRANSPARENT.to_owned();
        }
        self.rgba_string()
    }

    /// Whether the sample is fully opaque (`a == 1`).
    ///
    /// Exact comparison is intended: 255/255 and the alpha-snap
    /// normalizer both produce exactly `1.0`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }

    /// Whether the sample is fully transparent (`a == 0`).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_byte_255_normalizes_to_one() {
        let s = PixelSample::from_rgba([10, 20, 30, 255], 0, 0);
        assert!(s.is_opaque());
        assert!(!s.is_transparent());
    }

    #[test]
    fn alpha_byte_zero_normalizes_to_zero() {
        let s = PixelSample::from_rgba([10, 20, 30, 0], 0, 0);
        assert!(s.is_transparent());
        assert!(!s.is_opaque());
    }

    #[test]
    fn intermediate_alpha_is_neither_opaque_nor_transparent() {
        let s = PixelSample::from_rgba([0, 0, 0, 128], 0, 0);
        assert!(!s.is_opaque());
        assert!(!s.is_transparent());
        assert!(s.a > 0.0 && s.a < 1.0);
    }

    #[test]
    fn hex_pads_channels_to_two_digits() {
        let s = PixelSample::from_rgba([255, 0, 10, 255], 3, 7);
        assert_eq!(s.hex(), "#ff000a");
    }

    #[test]
    fn hex_of_transparent_sample_is_the_literal() {
        let s = PixelSample::from_rgba([255, 0, 0, 0], 0, 0);
        assert_eq!(s.hex(), "transparent");
    }

    #[test]
    fn rgba_string_formats_unit_alpha_without_decimals() {
        let s = PixelSample::from_rgba([255, 0, 0, 255], 0, 0);
        assert_eq!(s.rgba_string(), "rgba(255,0,0,1)");
    }

    #[test]
    fn key_ignores_coordinates() {
        let a = PixelSample::from_rgba([1, 2, 3, 255], 0, 0);
        let b = PixelSample::from_rgba([1, 2, 3, 255], 9, 9);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn transparent_samples_share_one_key() {
        let a = PixelSample::from_rgba([255, 0, 0, 0], 0, 0);
        let b = PixelSample::from_rgba([0, 255, 0, 0], 1, 1);
        assert_eq!(a.key(), b.key());
        assert_eq!(a.key(), TRANSPARENT);
    }

    #[test]
    fn opaque_key_is_the_rgba_string() {
        let s = PixelSample::from_rgba([12, 34, 56, 255], 0, 0);
        assert_eq!(s.key(), "rgba(12,34,56,1)");
    }
}
