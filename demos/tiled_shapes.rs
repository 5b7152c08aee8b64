//! Three hand-entered shapes: a stretched square, a stretched irregular quad and a tiled slanted prism.

use bevy::{
    image::{ImageAddressMode, ImageSamplerDescriptor},
    prelude::*,
    render::mesh::GenerateTangentsError,
};
use bevy_quad_geometry::{
    material::{MaterialResolver, TextureSet},
    mesh_builders::Hexahedron,
    GeometryBuilder, GeometryError, Quad, UvMode,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(ImagePlugin {
            // World-unit UVs run past 1.0, so textures have to repeat
            default_sampler: ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..default()
            },
        }))
        .insert_resource(AmbientLight {
            color: Color::srgb(0.25, 0.25, 0.25),
            brightness: 200.0,
        })
        .add_systems(Startup, setup)
        .run();
}

struct StandardMaterialResolver<'a> {
    asset_server: &'a AssetServer,
    materials: &'a mut Assets<StandardMaterial>,
}

impl MaterialResolver for StandardMaterialResolver<'_> {
    type Handle = Handle<StandardMaterial>;

    fn resolve(&mut self, textures: &TextureSet) -> Self::Handle {
        self.materials.add(StandardMaterial {
            base_color_texture: Some(self.asset_server.load(textures.diffuse_path())),
            normal_map_texture: textures.normal_path().map(|path| self.asset_server.load(path)),
            ..default()
        })
    }
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    // StandardMaterial has no specular map slot, so only diffuse and normal maps are named
    let bricks = TextureSet::new("textures/brickTexture", "diffuse.jpg").with_normal("normal.jpg");
    let mut resolver = StandardMaterialResolver { asset_server: &asset_server, materials: &mut materials };
    let material = resolver.resolve(&bricks);

    let shapes = [
        (stretched_square(), Vec3::new(5.0, 2.0, 0.0)),
        (stretched_irregular(), Vec3::new(5.0, -6.0, 0.0)),
        (tiled_prism(), Vec3::new(-5.0, 2.0, 0.0)),
    ];
    for (shape, position) in shapes {
        match shape {
            Ok(mesh) => {
                commands.spawn((
                    Mesh3d(meshes.add(mesh)),
                    MeshMaterial3d(material.clone()),
                    Transform::from_translation(position),
                ));
            }
            Err(err) => error!("Skipping shape at {position}: {err}"),
        }
    }

    commands.spawn((
        PointLight::default(),
        Transform::from_xyz(0.0, 10.0, 10.0),
    ));
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 0.0, 15.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

#[derive(Debug, thiserror::Error)]
enum ShapeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error(transparent)]
    Tangents(#[from] GenerateTangentsError),
}

fn into_render_mesh(builder: GeometryBuilder) -> Result<Mesh, ShapeError> {
    let mesh = Mesh::from(&builder.build()?);
    // Normal maps need tangents
    Ok(mesh.with_generated_tangents()?)
}

/// A 6x6 square with one copy of the texture on it
fn stretched_square() -> Result<Mesh, ShapeError> {
    let mut builder = GeometryBuilder::new(UvMode::StretchToFit);
    builder.add_quad(Quad::new(
        Vec3::new(6.0, 6.0, 0.0),
        Vec3::new(0.0, 6.0, 0.0),
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(6.0, 0.0, 0.0),
    ));
    into_render_mesh(builder)
}

/// Non-parallel sides, so the single texture copy is visibly skewed
fn stretched_irregular() -> Result<Mesh, ShapeError> {
    let mut builder = GeometryBuilder::new(UvMode::StretchToFit);
    builder.add_quad(Quad::new(
        Vec3::new(6.0, 6.0, 6.0),
        Vec3::new(1.0, 4.0, 1.0),
        Vec3::new(2.0, 0.0, 2.0),
        Vec3::new(5.0, -2.0, 5.0),
    ));
    into_render_mesh(builder)
}

/// Every face tiles one texture per world unit, whatever its size
fn tiled_prism() -> Result<Mesh, ShapeError> {
    let front = Quad::new(
        Vec3::new(6.0, 6.0, 2.0),
        Vec3::new(1.0, 4.0, 2.0),
        Vec3::new(2.0, 0.0, 2.0),
        Vec3::new(5.0, -2.0, 2.0),
    );
    let mut builder = GeometryBuilder::new(UvMode::SizeToWorldUnits);
    builder.add_shape(&Hexahedron::extrude(front, 2.0)?);
    into_render_mesh(builder)
}
