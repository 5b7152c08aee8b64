use bevy_math::Vec2;

/// Corners of the texture square for `v0, v1, v2, v3`. No measuring involved.
pub(crate) const UNIT_SQUARE: [Vec2; 4] = [
    Vec2 { x: 0.0, y: 0.0 },
    Vec2 { x: 1.0, y: 0.0 },
    Vec2 { x: 1.0, y: 1.0 },
    Vec2 { x: 0.0, y: 1.0 },
];

#[inline]
pub(crate) fn unit_square() -> [Vec2; 4] {
    UNIT_SQUARE
}
