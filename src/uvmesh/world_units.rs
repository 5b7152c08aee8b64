use bevy_math::Vec2;

use crate::{
    error::{DegenerateReason, GeometryError, GeometryResult},
    quad::Quad,
};

/// UVs measured in world units: `(0, 0), (w, 0), (w, h), (0, h)`.
///
/// `w` is the mean length of the `v0 -> v1` and `v3 -> v2` edges, `h` the mean of `v0 -> v3` and `v1 -> v2`.
/// Parallelograms tile exactly. Other quads get their texture squeezed a little along
/// whichever edge deviates from the mean, since one width/height pair cannot follow four independent edges.
///
/// An edge no longer than `epsilon` times the longest edge counts as collapsed.
pub(crate) fn measured(quad: &Quad, epsilon: f32) -> GeometryResult<[Vec2; 4]> {
    let lengths = quad.edge_lengths();
    let tolerance = epsilon * quad.longest_edge();
    if let Some(edge) = lengths.iter().position(|length| !(*length > tolerance && length.is_finite())) {
        return Err(GeometryError::degenerate(0, DegenerateReason::ZeroLengthEdge { edge }));
    }
    let [top, left, bottom, right] = lengths;
    let width = 0.5 * (top + bottom);
    let height = 0.5 * (left + right);
    Ok([
        Vec2::ZERO,
        Vec2 { x: width, y: 0.0 },
        Vec2 { x: width, y: height },
        Vec2 { x: 0.0, y: height },
    ])
}
