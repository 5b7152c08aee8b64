use bevy_math::{Vec2, Vec3};
use bevy_render::{
    mesh::{Indices, Mesh as BevyMesh, PrimitiveTopology},
    render_asset::RenderAssetUsages,
};

use crate::quad::{Quad, QUAD_TRIANGLES};

/// Compiled triangle mesh, the output of [`GeometryBuilder::build`](crate::GeometryBuilder::build).
///
/// `positions`, `normals` and `uvs` are index-aligned: entry `i` of each describes the same vertex.
/// Every quad owns four consecutive vertices and six consecutive indices. Vertices are never shared
/// between quads since each quad carries its own normal and UVs.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    indices: Vec<u32>,
}

impl Mesh {
    pub(crate) fn with_quad_capacity(quads: usize) -> Self {
        Self {
            positions: Vec::with_capacity(4 * quads),
            normals: Vec::with_capacity(4 * quads),
            uvs: Vec::with_capacity(4 * quads),
            indices: Vec::with_capacity(6 * quads),
        }
    }

    /// Append one flat-shaded quad. Both triangles reuse its four vertices.
    pub(crate) fn push_quad(&mut self, quad: &Quad, normal: Vec3, uvs: [Vec2; 4]) {
        let first_index = self.positions.len() as u32;
        self.positions.extend(quad.corners());
        self.normals.extend([normal; 4]);
        self.uvs.extend(uvs);
        self.indices
            .extend(QUAD_TRIANGLES.iter().flatten().map(|local| first_index + local));
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    #[inline]
    pub fn uvs(&self) -> &[Vec2] {
        &self.uvs
    }

    /// Triangle list, three indices per triangle
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn quad_count(&self) -> usize {
        self.positions.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl From<&Mesh> for BevyMesh {
    fn from(mesh: &Mesh) -> Self {
        let positions: Vec<[f32; 3]> = mesh.positions.iter().map(|p| p.to_array()).collect();
        let normals: Vec<[f32; 3]> = mesh.normals.iter().map(|n| n.to_array()).collect();
        let uvs: Vec<[f32; 2]> = mesh.uvs.iter().map(|uv| uv.to_array()).collect();
        BevyMesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(BevyMesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(BevyMesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(BevyMesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(mesh.indices.clone()))
    }
}

impl From<Mesh> for BevyMesh {
    fn from(mesh: Mesh) -> Self {
        (&mesh).into()
    }
}
