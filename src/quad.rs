use bevy_math::Vec3;
use bevy_transform::components::Transform;
use itertools::Itertools;

use crate::error::{DegenerateReason, GeometryError, GeometryResult};

/// Local corner indices of the two triangles a quad is split into, along the `v0 - v2` diagonal.
pub const QUAD_TRIANGLES: [[u32; 3]; 2] = [[0, 1, 2], [0, 2, 3]];

#[derive(Copy, Clone, Debug, PartialEq)]
/// One four-cornered face. Corners need not be planar, rectangular or evenly sized.
///
/// Faces are single-sided, so the winding decides which side is visible.
/// Looking at the front, enter the corners like drawing the letter C:
/// top right, top left, bottom left, bottom right.
/// ```text
///  v1 --------------v0
///  |             __/ |
///  |          __/    |
///  |       __/       |
///  |    __/          |
///  | __/             |
///  v2 ------------- v3
/// ```
pub struct Quad {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub v3: Vec3,
}

impl Quad {
    pub const fn new(v0: Vec3, v1: Vec3, v2: Vec3, v3: Vec3) -> Self {
        Self { v0, v1, v2, v3 }
    }

    pub const fn from_array([v0, v1, v2, v3]: [Vec3; 4]) -> Self {
        Self { v0, v1, v2, v3 }
    }

    #[inline]
    pub fn corners(&self) -> [Vec3; 4] {
        [self.v0, self.v1, self.v2, self.v3]
    }

    /// Boundary edges as `(start, end)` pairs: `v0 -> v1`, `v1 -> v2`, `v2 -> v3`, `v3 -> v0`
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> {
        self.corners().into_iter().circular_tuple_windows()
    }

    /// Lengths of [`Quad::edges`], in the same order
    pub fn edge_lengths(&self) -> [f32; 4] {
        let mut lengths = [0.0; 4];
        for (length, (start, end)) in lengths.iter_mut().zip(self.edges()) {
            *length = start.distance(end);
        }
        lengths
    }

    pub fn longest_edge(&self) -> f32 {
        self.edge_lengths().into_iter().fold(0.0, f32::max)
    }

    /// Flat face normal taken from the first triangle, `normalize((v1 - v0) x (v2 - v0))`.
    ///
    /// Fails when `|a x b| <= epsilon * |a| * |b|` (the sine of the angle at `v0`), so the
    /// test does not depend on the size of the quad or its distance from the origin.
    /// A quad on its own reports itself as index 0.
    pub fn normal(&self, epsilon: f32) -> GeometryResult<Vec3> {
        let a = self.v1 - self.v0;
        let b = self.v2 - self.v0;
        let cross = a.cross(b);
        let length = cross.length();
        if length > epsilon * a.length() * b.length() && length.is_finite() {
            Ok(cross / length)
        } else {
            Err(GeometryError::degenerate(0, DegenerateReason::ZeroNormal))
        }
    }

    /// How far `v3` sits off the plane through `v0`, `v1` and `v2`.
    /// `None` when that plane is undefined under `epsilon`.
    pub fn planarity_deviation(&self, epsilon: f32) -> Option<f32> {
        let normal = self.normal(epsilon).ok()?;
        Some(normal.dot(self.v3 - self.v0).abs())
    }

    /// Both triangles, as corner positions
    pub fn triangles(&self) -> [[Vec3; 3]; 2] {
        let corners = self.corners();
        QUAD_TRIANGLES.map(|triangle| triangle.map(|idx| corners[idx as usize]))
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self::from_array(self.corners().map(|corner| corner + offset))
    }

    /// Bake a placement into the corners, e.g. to merge several placed shapes into one mesh
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self::from_array(self.corners().map(|corner| transform.transform_point(corner)))
    }
}

impl From<[Vec3; 4]> for Quad {
    fn from(value: [Vec3; 4]) -> Self {
        Self::from_array(value)
    }
}
