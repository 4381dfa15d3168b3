//! Mesh and material attachment for gameplay entities.
//!
//! Spawning only adds logic and physics components; this plugin dresses newly spawned
//! entities once the asset stores exist. Shapes follow the collider sizes.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;

use crate::core::components::{BodyRadius, Cloud, Glider, Star};
use crate::core::config::GameConfig;

pub const GLIDER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
pub const STAR_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);
pub const CLOUD_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.8);

/// Shared material handles so every star / cloud reuses one material.
#[derive(Resource, Debug, Clone)]
pub struct SceneMaterials {
    pub glider: Handle<StandardMaterial>,
    pub star: Handle<StandardMaterial>,
    pub cloud: Handle<StandardMaterial>,
}

pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_materials)
            .add_systems(PostUpdate, (attach_glider_mesh, attach_sphere_meshes));
    }
}

/// Square-based pyramid: `size.x` wide, `size.z` long, apex `size.y` above the base.
/// Centred on the origin so it sits inside the glider's cuboid collider.
pub fn glider_mesh(size: Vec3) -> Mesh {
    let h = size * 0.5;
    let b0 = [-h.x, -h.y, -h.z];
    let b1 = [h.x, -h.y, -h.z];
    let b2 = [h.x, -h.y, h.z];
    let b3 = [-h.x, -h.y, h.z];
    let apex = [0.0, h.y, 0.0];
    // Counter-clockwise seen from outside; flat normals need unindexed triangles.
    let positions: Vec<[f32; 3]> = vec![
        b3, b2, apex,
        b2, b1, apex,
        b1, b0, apex,
        b0, b3, apex,
        b0, b1, b2,
        b0, b2, b3,
    ];
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_computed_flat_normals()
}

fn setup_materials(mut commands: Commands, mut materials: ResMut<Assets<StandardMaterial>>) {
    let glider = materials.add(StandardMaterial::from(GLIDER_COLOR));
    let star = materials.add(StandardMaterial {
        base_color: STAR_COLOR,
        emissive: LinearRgba::rgb(0.6, 0.6, 0.0),
        ..default()
    });
    let cloud = materials.add(StandardMaterial {
        base_color: CLOUD_COLOR,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    commands.insert_resource(SceneMaterials { glider, star, cloud });
}

fn attach_glider_mesh(
    mut commands: Commands,
    cfg: Option<Res<GameConfig>>,
    mats: Option<Res<SceneMaterials>>,
    mut meshes: ResMut<Assets<Mesh>>,
    q: Query<Entity, Added<Glider>>,
) {
    let Some(mats) = mats else { return };
    let size: Vec3 = cfg.map(|c| c.glider.size.into()).unwrap_or(Vec3::new(1.0, 0.5, 2.0));
    for e in q.iter() {
        commands.entity(e).insert((
            Mesh3d(meshes.add(glider_mesh(size))),
            MeshMaterial3d(mats.glider.clone()),
        ));
    }
}

fn attach_sphere_meshes(
    mut commands: Commands,
    mats: Option<Res<SceneMaterials>>,
    mut meshes: ResMut<Assets<Mesh>>,
    stars: Query<(Entity, &BodyRadius), Added<Star>>,
    clouds: Query<(Entity, &BodyRadius), Added<Cloud>>,
) {
    let Some(mats) = mats else { return };
    for (e, r) in stars.iter() {
        commands
            .entity(e)
            .insert((Mesh3d(meshes.add(Sphere::new(r.0))), MeshMaterial3d(mats.star.clone())));
    }
    for (e, r) in clouds.iter() {
        commands
            .entity(e)
            .insert((Mesh3d(meshes.add(Sphere::new(r.0))), MeshMaterial3d(mats.cloud.clone())));
    }
}
