//! Edge-bleed heuristic: does the image content likely continue past
//! the visible boundary?
//!
//! The decision looks only at opacity. Content that reaches all four
//! corners is assumed to bleed past the canvas; content reaching at most
//! one corner is assumed to be contained. In between, a border probe
//! settles the question.

use crate::region::Region;
use crate::sampler::{self, SampleConfig};
use crate::types::{AnalysisError, Dimensions, RgbaImage};

/// Border band width used by the ambiguous-case probe.
pub const EDGE_PROBE_BAND: u32 = 2;

/// Decide whether the image content likely bleeds past its boundary.
///
/// 1. Sample the four outermost corner pixels (depth 1) through the
///    configured pipeline and count the fully opaque ones.
/// 2. All four opaque: content reaches every corner, edge-continuing.
/// 3. Zero or one opaque: contained.
/// 4. Two or three opaque: sample the border at band
///    [`EDGE_PROBE_BAND`] and report true iff the opaque count exceeds
///    `height * 2 * EDGE_PROBE_BAND`. The threshold is a deliberate
///    height-based proxy for "more than half the border ring is
///    opaque", not an exact perimeter fraction; it is kept as-is as a
///    policy constant.
///
/// # Errors
///
/// Propagates [`AnalysisError`] from the sampling pipeline; enumeration
/// itself only produces in-range indices.
pub fn has_edge(buffer: &RgbaImage, config: &SampleConfig) -> Result<bool, AnalysisError> {
    let dimensions = Dimensions::of(buffer);

    let corner_indices = Region::Corner { depth: 1 }.indices(dimensions);
    let corners = sampler::sample(buffer, &corner_indices, config)?;
    let opaque_corners = corners.iter().filter(|s| s.is_opaque()).count();

    if opaque_corners > 3 {
        return Ok(true);
    }
    if opaque_corners < 2 {
        return Ok(false);
    }

    let border_indices = Region::Border {
        band: EDGE_PROBE_BAND,
    }
    .indices(dimensions);
    let border = sampler::sample(buffer, &border_indices, config)?;
    let opaque_border = border.iter().filter(|s| s.is_opaque()).count();

    #[allow(clippy::cast_possible_truncation)]
    let threshold = dimensions.height as usize * 2 * EDGE_PROBE_BAND as usize;
    Ok(opaque_border > threshold)
}
