//! Coordinate enumeration: map an image's dimensions and a region
//! descriptor to linear pixel indices.
//!
//! Every enumeration produces a deduplicated, ascending sequence of
//! indices `y * width + x`, each within `[0, width * height)`. This is
//! the first step of every query: region in, indices out, no pixel data
//! touched yet.

use serde::{Deserialize, Serialize};

use crate::types::Dimensions;

/// Default border band width in pixels.
pub const DEFAULT_BORDER_BAND: u32 = 1;

/// Default corner sampling depth in rings.
pub const DEFAULT_CORNER_DEPTH: u32 = 3;

/// Selects which part of the image to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    /// Every pixel of the image.
    Whole,
    /// A band of `band` pixel layers along each edge.
    Border {
        /// Number of pixel layers from each edge.
        band: u32,
    },
    /// `depth` concentric L-shaped rings growing from each of the four
    /// corners.
    Corner {
        /// Number of rings per corner.
        depth: u32,
    },
}

impl Region {
    /// Enumerate the linear pixel indices of this region.
    ///
    /// The result is deduplicated and sorted ascending; re-running with
    /// the same inputs yields the same sequence. Degenerate images
    /// (zero width or height) enumerate to an empty set.
    #[must_use]
    pub fn indices(self, dimensions: Dimensions) -> Vec<usize> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Vec::new();
        }
        match self {
            Self::Whole => whole(dimensions),
            Self::Border { band } => border(dimensions, band),
            Self::Corner { depth } => corner(dimensions, depth),
        }
    }
}

/// All pixel indices, ascending.
fn whole(dimensions: Dimensions) -> Vec<usize> {
    (0..dimensions.pixel_count()).collect()
}

/// Indices within `band` pixel layers of any edge.
///
/// A pixel `(x, y)` is in the border iff `x < band`, `x >= width - band`,
/// `y < band`, or `y >= height - band`. A band of at least half the
/// shorter dimension selects every pixel. The row-major scan yields
/// ascending indices with no duplicates.
fn border(dimensions: Dimensions, band: u32) -> Vec<usize> {
    let Dimensions { width, height } = dimensions;
    let band = u64::from(band);
    let w = u64::from(width);
    let h = u64::from(height);

    let mut indices = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if x < band || x + band >= w || y < band || y + band >= h {
                #[allow(clippy::cast_possible_truncation)]
                indices.push((y * w + x) as usize);
            }
        }
    }
    indices
}

/// Indices of `depth` concentric rings at each of the four corners.
///
/// Ring `i` contributes, for each offset `j in 0..=i`:
///
/// - top-left     `i + j*(w-1)`
/// - top-right    `(w-1-i) + j*(w+1)`
/// - bottom-left  `(h-1-i)*w + j*(w+1)`
/// - bottom-right `(w-1-i) + (h-1)*w - j*(w-1)`
///
/// Overlapping rings on small images produce coinciding candidates, and
/// deep rings can leave the buffer entirely; candidates outside
/// `[0, w*h)` are discarded and the rest deduplicated. The depth is
/// clamped to the shorter image dimension so nonsensically deep requests
/// terminate without wrapping across rows.
fn corner(dimensions: Dimensions, depth: u32) -> Vec<usize> {
    let w = i64::from(dimensions.width);
    let h = i64::from(dimensions.height);
    let len = dimensions.pixel_count();
    let depth = i64::from(depth.min(dimensions.width.min(dimensions.height)));

    let mut indices = Vec::new();
    for i in 0..depth {
        for j in 0..=i {
            let top_left = i + j * (w - 1);
            let top_right = (w - 1 - i) + j * (w + 1);
            let bottom_left = (h - 1 - i) * w + j * (w + 1);
            let bottom_right = (w - 1 - i) + (h - 1) * w - j * (w - 1);
            for candidate in [top_left, top_right, bottom_left, bottom_right] {
                if let Ok(index) = usize::try_from(candidate)
                    && index < len
                {
                    indices.push(index);
                }
            }
        }
    }
    indices.sort_unstable();
    indices.dedup();
    indices
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dims(width: u32, height: u32) -> Dimensions {
        Dimensions::new(width, height)
    }

    // --- Whole ---

    #[test]
    fn whole_enumerates_every_index_ascending() {
        let indices = Region::Whole.indices(dims(4, 3));
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn whole_of_degenerate_image_is_empty() {
        assert!(Region::Whole.indices(dims(0, 5)).is_empty());
        assert!(Region::Whole.indices(dims(5, 0)).is_empty());
    }

    // --- Border ---

    #[test]
    fn border_band_one_on_3x3_selects_all_nine() {
        let indices = Region::Border { band: 1 }.indices(dims(3, 3));
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn border_band_one_on_4x4_excludes_the_interior() {
        let indices = Region::Border { band: 1 }.indices(dims(4, 4));
        // Interior of a 4x4 is the 2x2 block at indices 5, 6, 9, 10.
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 7, 8, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn border_matches_ring_area_formula() {
        // |border(b)| == w*h - max(0, w-2b) * max(0, h-2b)
        for &(w, h) in &[(1u32, 1u32), (3, 3), (4, 4), (5, 3), (7, 2), (10, 6)] {
            for band in 1..=5u32 {
                let indices = Region::Border { band }.indices(dims(w, h));
                let inner_w = w.saturating_sub(2 * band) as usize;
                let inner_h = h.saturating_sub(2 * band) as usize;
                let expected = (w as usize * h as usize) - inner_w * inner_h;
                assert_eq!(
                    indices.len(),
                    expected,
                    "ring area mismatch for {w}x{h} band {band}",
                );
                let len = w as usize * h as usize;
                assert!(indices.iter().all(|&i| i < len));
            }
        }
    }

    #[test]
    fn border_indices_are_ascending_and_unique() {
        let indices = Region::Border { band: 2 }.indices(dims(7, 5));
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn oversized_band_selects_every_pixel() {
        let indices = Region::Border { band: 100 }.indices(dims(4, 4));
        assert_eq!(indices, (0..16).collect::<Vec<_>>());
    }

    // --- Corner ---

    #[test]
    fn corner_depth_one_yields_the_four_outermost_pixels() {
        let indices = Region::Corner { depth: 1 }.indices(dims(5, 4));
        // (0,0), (4,0), (0,3), (4,3) -> 0, 4, 15, 19
        assert_eq!(indices, vec![0, 4, 15, 19]);
    }

    #[test]
    fn corner_depth_one_on_1x1_is_the_single_pixel() {
        let indices = Region::Corner { depth: 1 }.indices(dims(1, 1));
        assert_eq!(indices, vec![0]);
    }

    #[test]
    fn corner_depth_three_default_shape_on_8x8() {
        let indices = Region::Corner { depth: 3 }.indices(dims(8, 8));
        // Each corner contributes a triangular wedge of 1 + 2 + 3 pixels.
        assert_eq!(indices.len(), 24);
        // Top-left wedge: (0,0), (1,0), (2,0), (0,1), (1,1), (0,2).
        for expected in [0, 1, 2, 8, 9, 16] {
            assert!(indices.contains(&expected), "missing index {expected}");
        }
    }

    #[test]
    fn corner_enumeration_is_deduplicated_ascending_and_idempotent() {
        for &(w, h, depth) in &[(2u32, 2u32, 3u32), (3, 3, 3), (4, 4, 2), (5, 3, 4)] {
            let first = Region::Corner { depth }.indices(dims(w, h));
            let mut sorted = first.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(first, sorted, "not sorted/unique for {w}x{h} depth {depth}");

            let second = Region::Corner { depth }.indices(dims(w, h));
            assert_eq!(first, second, "not idempotent for {w}x{h} depth {depth}");

            let len = w as usize * h as usize;
            assert!(first.iter().all(|&i| i < len));
        }
    }

    #[test]
    fn overlapping_rings_on_2x2_cover_exactly_the_image() {
        // Depth 3 on a 2x2: rings overlap heavily; dedup must collapse
        // them to the four existing pixels.
        let indices = Region::Corner { depth: 3 }.indices(dims(2, 2));
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn region_serde_round_trip() {
        for region in [
            Region::Whole,
            Region::Border { band: 2 },
            Region::Corner { depth: 3 },
        ] {
            let json = serde_json::to_string(&region).unwrap();
            let deserialized: Region = serde_json::from_str(&json).unwrap();
            assert_eq!(region, deserialized);
        }
    }
}
