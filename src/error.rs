//! Errors produced while compiling quads into a [`Mesh`](crate::Mesh).

use thiserror::Error;

pub type GeometryResult<T> = Result<T, GeometryError>;

/// Why a quad could not be turned into mesh data.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DegenerateReason {
    /// `(v1 - v0) x (v2 - v0)` vanished: the first three corners are collinear or coincide.
    ZeroNormal,
    /// A boundary edge has no length. `edge` counts from `v0 -> v1` as edge 0.
    ZeroLengthEdge { edge: usize },
}

impl std::fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroNormal => f.write_str("corners v0, v1, v2 are collinear"),
            Self::ZeroLengthEdge { edge } => write!(f, "edge {edge} has zero length"),
        }
    }
}

#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// A quad has zero area, or a zero-length edge where a UV mode needs to measure one.
    #[error("Degenerate quad #{index}: {reason}")]
    DegenerateQuad { index: usize, reason: DegenerateReason },

    /// `build` was called before any quad was added.
    #[error("Cannot build a mesh without quads")]
    EmptyMesh,
}

impl GeometryError {
    pub fn degenerate(index: usize, reason: DegenerateReason) -> Self {
        Self::DegenerateQuad { index, reason }
    }

    /// Attach the builder index of the failing quad. Errors raised by a lone [`Quad`](crate::Quad) use index 0.
    pub(crate) fn at_quad(self, index: usize) -> Self {
        match self {
            Self::DegenerateQuad { reason, .. } => Self::DegenerateQuad { index, reason },
            other => other,
        }
    }
}
