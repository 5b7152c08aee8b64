use bevy_math::{Vec2, Vec3};
use bevy_quad_geometry::{
    mesh_builders::{Hexahedron, QuadSource},
    DegenerateReason, GeometryBuilder, GeometryError, Mesh, Quad, UvMode,
};

fn square() -> Quad {
    Quad::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(0.0, 6.0, 0.0),
        Vec3::new(6.0, 6.0, 0.0),
        Vec3::new(6.0, 0.0, 0.0),
    )
}

fn build(uv_mode: UvMode, quads: impl IntoIterator<Item = Quad>) -> Result<Mesh, GeometryError> {
    let mut builder = GeometryBuilder::new(uv_mode);
    builder.add_quads(quads);
    builder.build()
}

fn uv_span(uvs: &[Vec2]) -> Vec2 {
    let min = uvs.iter().copied().fold(Vec2::splat(f32::MAX), Vec2::min);
    let max = uvs.iter().copied().fold(Vec2::splat(f32::MIN), Vec2::max);
    max - min
}

#[test]
fn square_stretched_to_fit() {
    let mesh = build(UvMode::StretchToFit, [square()]).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 2);
    assert_eq!(mesh.uvs(), &[Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y]);
    for normal in mesh.normals() {
        assert!(normal.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }
}

#[test]
fn square_sized_to_world_units() {
    let mesh = build(UvMode::SizeToWorldUnits, [square()]).unwrap();
    assert_eq!(uv_span(mesh.uvs()), Vec2::splat(6.0));
}

#[test]
fn uv_span_scales_with_quad() {
    let k = 3.0;
    let scaled = Quad::from_array(square().corners().map(|c| c * k));
    let small = build(UvMode::SizeToWorldUnits, [square()]).unwrap();
    let large = build(UvMode::SizeToWorldUnits, [scaled]).unwrap();
    assert!((uv_span(small.uvs()) * k).abs_diff_eq(uv_span(large.uvs()), 1e-5));
}

#[test]
fn closed_box_from_eight_corners() {
    let f = [
        Vec3::new(6.0, 6.0, 2.0),
        Vec3::new(1.0, 4.0, 2.0),
        Vec3::new(2.0, 0.0, 2.0),
        Vec3::new(5.0, -2.0, 2.0),
    ];
    let b = f.map(|corner| corner - Vec3::new(0.0, 0.0, 2.0));
    let quads = [
        Quad::new(f[0], f[1], f[2], f[3]), // front
        Quad::new(b[1], b[0], b[3], b[2]), // back
        Quad::new(b[0], b[1], f[1], f[0]), // top
        Quad::new(f[1], b[1], b[2], f[2]), // left
        Quad::new(b[0], f[0], f[3], b[3]), // right
        Quad::new(f[3], f[2], b[2], b[3]), // bottom
    ];
    assert_eq!(Hexahedron::from_corners([f, b].concat().try_into().unwrap()).quads(), quads);

    let mesh = build(UvMode::SizeToWorldUnits, quads).unwrap();
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.indices().len(), 36);
    assert!(mesh.indices().iter().all(|&i| (i as usize) < mesh.vertex_count()));

    let center = mesh.positions().iter().copied().sum::<Vec3>() / mesh.vertex_count() as f32;
    for (positions, normals) in mesh.positions().chunks_exact(4).zip(mesh.normals().chunks_exact(4)) {
        let face_center = positions.iter().copied().sum::<Vec3>() / 4.0;
        assert!(normals.iter().all(|n| *n == normals[0]));
        assert!(normals[0].dot(face_center - center) > 0.0);
    }
}

#[test]
fn collapsed_quad_yields_no_mesh() {
    let collapsed = Quad::new(Vec3::ONE, Vec3::ONE, Vec3::ONE, Vec3::new(2.0, 1.0, 1.0));
    for uv_mode in [UvMode::StretchToFit, UvMode::SizeToWorldUnits] {
        assert_eq!(
            build(uv_mode, [square(), collapsed]),
            Err(GeometryError::DegenerateQuad { index: 1, reason: DegenerateReason::ZeroNormal })
        );
    }
}

#[test]
fn same_input_same_bytes() {
    let quads = Hexahedron::extrude(square(), 1.0).unwrap().quads();
    let a = build(UvMode::SizeToWorldUnits, quads.clone()).unwrap();
    let b = build(UvMode::SizeToWorldUnits, quads).unwrap();
    assert_eq!(a, b);
    let bits = |mesh: &Mesh| mesh.uvs().iter().flat_map(|uv| uv.to_array().map(f32::to_bits)).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}
