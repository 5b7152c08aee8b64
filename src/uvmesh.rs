use bevy_math::Vec2;

use crate::{error::GeometryResult, quad::Quad};

mod stretch;
mod world_units;

/// How texture coordinates are laid over each quad.
///
/// UVs are always handed out per corner, in `v0, v1, v2, v3` order, with `v0` at the UV origin,
/// `u` running towards `v1` and `v` running towards `v3`. With the usual top right, top left,
/// bottom left, bottom right winding this means `u` grows from right to left, so textures show
/// up mirrored left-to-right when seen from the front. Tileable textures hide this; for anything
/// with a handedness (lettering, arrows) flip the image or enter the corners starting top left.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UvMode {
    /// One full texture per quad, whatever its shape. Non-square quads show the texture skewed.
    #[default]
    StretchToFit,
    /// One texture repeat per world unit along each edge. Tileable textures stay seamless
    /// and unstretched on large or irregular surfaces.
    SizeToWorldUnits,
}

impl UvMode {
    pub fn quad_uvs(self, quad: &Quad, epsilon: f32) -> GeometryResult<[Vec2; 4]> {
        match self {
            UvMode::StretchToFit => Ok(stretch::unit_square()),
            UvMode::SizeToWorldUnits => world_units::measured(quad, epsilon),
        }
    }
}
