use bevy_math::{primitives::Cuboid, Vec3};

use crate::{error::GeometryResult, quad::Quad, DEGENERATE_EPSILON};

/// A trait used for shapes that can be fed to a [`GeometryBuilder`](crate::GeometryBuilder) as a list of quads
pub trait QuadSource {
    /// Faces of the shape, wound so that their normals point outwards
    fn quads(&self) -> Vec<Quad>;
}

impl QuadSource for Quad {
    fn quads(&self) -> Vec<Quad> {
        vec![*self]
    }
}

impl QuadSource for [Quad] {
    fn quads(&self) -> Vec<Quad> {
        self.to_vec()
    }
}

/// A closed six-sided solid spanned by 8 corners, e.g. a box or a slanted prism.
///
/// Both rings follow the [`Quad`] convention as seen from the front (top right, top left,
/// bottom left, bottom right), and `back.vN` is the corner behind `front.vN`.
/// ```text
///     b1 -------- b0
///    /|          /|
///  f1 -------- f0 |
///   | b2 ------|- b3
///   |/         |/
///  f2 -------- f3
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hexahedron {
    pub front: Quad,
    pub back: Quad,
}

impl Hexahedron {
    pub fn new(front: Quad, back: Quad) -> Self {
        Self { front, back }
    }

    /// Front ring in the first four corners, back ring in the last four
    pub fn from_corners(corners: [Vec3; 8]) -> Self {
        let [f0, f1, f2, f3, b0, b1, b2, b3] = corners;
        Self::new(Quad::new(f0, f1, f2, f3), Quad::new(b0, b1, b2, b3))
    }

    /// Prism made by pushing `front` back along its normal by `depth`.
    /// A negative depth turns the solid inside out.
    pub fn extrude(front: Quad, depth: f32) -> GeometryResult<Self> {
        let shift = -depth * front.normal(DEGENERATE_EPSILON)?;
        Ok(Self::new(front, front.translated(shift)))
    }
}

impl QuadSource for Hexahedron {
    fn quads(&self) -> Vec<Quad> {
        let Quad { v0: f0, v1: f1, v2: f2, v3: f3 } = self.front;
        let Quad { v0: b0, v1: b1, v2: b2, v3: b3 } = self.back;
        vec![
            self.front,
            Quad::new(b1, b0, b3, b2), // back
            Quad::new(b0, b1, f1, f0), // top
            Quad::new(f1, b1, b2, f2), // left
            Quad::new(b0, f0, f3, b3), // right
            Quad::new(f3, f2, b2, b3), // bottom
        ]
    }
}

impl QuadSource for Cuboid {
    fn quads(&self) -> Vec<Quad> {
        let Vec3 { x, y, z } = self.half_size;
        let front = Quad::new(
            Vec3::new(x, y, z),
            Vec3::new(-x, y, z),
            Vec3::new(-x, -y, z),
            Vec3::new(x, -y, z),
        );
        Hexahedron::new(front, front.translated(Vec3::new(0.0, 0.0, -2.0 * z))).quads()
    }
}
