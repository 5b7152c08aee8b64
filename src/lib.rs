pub mod builder;
pub mod error;
pub mod material;
pub mod mesh;
pub mod mesh_builders;
pub mod quad;
pub mod uvmesh;

pub use builder::GeometryBuilder;
pub use error::{DegenerateReason, GeometryError, GeometryResult};
pub use mesh::Mesh;
pub use quad::Quad;
pub use uvmesh::UvMode;

/// Relative tolerance for degenerate quads. The sine of the corner angle at `v0`, and an edge's length
/// measured against the longest edge, count as zero at or below this.
pub const DEGENERATE_EPSILON: f32 = 1e-5;
