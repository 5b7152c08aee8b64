use bevy_math::{Vec2, Vec3};
use tracing::{debug, trace, warn};

use crate::{
    error::{GeometryError, GeometryResult},
    mesh::Mesh,
    mesh_builders::QuadSource,
    quad::Quad,
    uvmesh::UvMode,
    DEGENERATE_EPSILON,
};

/// Collects quads and compiles them into a flat-shaded, textured [`Mesh`].
///
/// A builder is single-use: [`GeometryBuilder::build`] consumes it. Quads are emitted in insertion order.
///
/// ```rust
/// use bevy_math::Vec3;
/// use bevy_quad_geometry::{GeometryBuilder, Quad, UvMode};
///
/// let mut builder = GeometryBuilder::new(UvMode::SizeToWorldUnits);
/// builder.add_quad(Quad::new(
///     Vec3::new(6.0, 6.0, 0.0),
///     Vec3::new(0.0, 6.0, 0.0),
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(6.0, 0.0, 0.0),
/// ));
/// let mesh = builder.build().unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.indices().len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct GeometryBuilder {
    uv_mode: UvMode,
    epsilon: f32,
    quads: Vec<Quad>,
}

impl GeometryBuilder {
    pub fn new(uv_mode: UvMode) -> Self {
        Self { uv_mode, epsilon: DEGENERATE_EPSILON, quads: Vec::new() }
    }

    /// Override the relative tolerance under which normals and edges count as zero-length
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[inline]
    pub fn uv_mode(&self) -> UvMode {
        self.uv_mode
    }

    pub fn add_quad(&mut self, quad: Quad) -> &mut Self {
        self.quads.push(quad);
        self
    }

    pub fn add_quads(&mut self, quads: impl IntoIterator<Item = Quad>) -> &mut Self {
        self.quads.extend(quads);
        self
    }

    /// Add every quad of a procedural shape
    pub fn add_shape(&mut self, shape: &impl QuadSource) -> &mut Self {
        self.add_quads(shape.quads())
    }

    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Triangulate every quad, give it a flat normal and UVs, and pack the result.
    ///
    /// Any degenerate quad aborts the whole build; no partial mesh is returned.
    pub fn build(self) -> GeometryResult<Mesh> {
        if self.quads.is_empty() {
            return Err(GeometryError::EmptyMesh);
        }
        let mut mesh = Mesh::with_quad_capacity(self.quads.len());
        for (index, quad) in self.quads.iter().enumerate() {
            let (normal, uvs) = self.compile_quad(quad).map_err(|err| {
                let err = err.at_quad(index);
                debug!("Aborting mesh build: {err}");
                err
            })?;
            trace!(index, ?normal, "Quad compiled");
            mesh.push_quad(quad, normal, uvs);
        }
        debug!(
            quads = self.quads.len(),
            uv_mode = ?self.uv_mode,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "Built quad mesh"
        );
        Ok(mesh)
    }

    fn compile_quad(&self, quad: &Quad) -> GeometryResult<(Vec3, [Vec2; 4])> {
        let normal = quad.normal(self.epsilon)?;
        let tolerance = self.epsilon * quad.longest_edge();
        if let Some(fold) = quad.planarity_deviation(self.epsilon).filter(|fold| *fold > tolerance) {
            // The second triangle leans away from the shared normal
            warn!(fold, "Non-planar quad is shaded with a single normal");
        }
        let uvs = self.uv_mode.quad_uvs(quad, self.epsilon)?;
        Ok((normal, uvs))
    }
}
