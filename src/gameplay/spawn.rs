//! Startup population of the play area: one glider, a handful of drifting clouds and the
//! stars to collect. Only logic/physics components are spawned here; meshes and materials
//! are attached by `rendering::visuals` so headless apps can run the same spawn path.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::components::{BodyRadius, Category, Cloud, CloudDrift, Glider, RngSeed, Star};
use crate::core::config::{CloudSpawnConfig, GameConfig, GliderConfig, SpawnRange, StarSpawnConfig};

pub struct SceneSpawnPlugin;

impl Plugin for SceneSpawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_scene_entities);
    }
}

/// Uniform sample inside `r`; tolerates reversed or degenerate ranges.
pub fn sample_range<R: Rng>(rng: &mut R, r: &SpawnRange<f32>) -> f32 {
    let (lo, hi) = if r.min <= r.max { (r.min, r.max) } else { (r.max, r.min) };
    if hi - lo < f32::EPSILON {
        lo
    } else {
        rng.gen_range(lo..hi)
    }
}

pub fn glider_bundle(cfg: &GliderConfig) -> impl Bundle {
    let half = Vec3::from(cfg.size) * 0.5;
    (
        Glider,
        Category::Glider,
        Name::new("glider"),
        Transform::from_translation(cfg.start.into()),
        RigidBody::KinematicPositionBased,
        Collider::cuboid(half.x, half.y, half.z),
        Category::Glider.collision_groups(),
        ActiveEvents::COLLISION_EVENTS,
        // Stars are fixed and clouds kinematic; Rapier skips both pairings by default.
        ActiveCollisionTypes::default()
            | ActiveCollisionTypes::KINEMATIC_STATIC
            | ActiveCollisionTypes::KINEMATIC_KINEMATIC,
    )
}

pub fn star_bundle(cfg: &StarSpawnConfig, position: Vec3) -> impl Bundle {
    (
        Star,
        Category::Star,
        Name::new("star"),
        BodyRadius(cfg.radius),
        Transform::from_translation(position),
        RigidBody::Fixed,
        Collider::ball(cfg.radius),
        Sensor,
        Category::Star.collision_groups(),
    )
}

pub fn cloud_bundle(cfg: &CloudSpawnConfig, position: Vec3) -> impl Bundle {
    (
        Cloud,
        Category::Cloud,
        Name::new("cloud"),
        BodyRadius(cfg.radius),
        Transform::from_translation(position),
        RigidBody::KinematicPositionBased,
        Collider::ball(cfg.radius),
        Sensor,
        Category::Cloud.collision_groups(),
        CloudDrift::new(Vec3::Y * cfg.drift.offset_y, cfg.drift.duration),
    )
}

/// Accepts optional GameConfig and RngSeed so tests can run without either.
/// Seed priority: `RngSeed` resource, then `GameConfig::rng_seed`, then entropy.
pub fn spawn_scene_entities(
    mut commands: Commands,
    cfg: Option<Res<GameConfig>>,
    rng_seed: Option<Res<RngSeed>>,
) {
    let cfg = cfg.map(|c| c.clone()).unwrap_or_default();
    let seed = rng_seed.map(|s| s.0).or(cfg.rng_seed);
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    commands.spawn(glider_bundle(&cfg.glider));

    let c = &cfg.clouds;
    for _ in 0..c.count {
        let pos = Vec3::new(sample_range(&mut rng, &c.x_range), c.height, sample_range(&mut rng, &c.z_range));
        commands.spawn(cloud_bundle(c, pos));
    }

    let s = &cfg.stars;
    for _ in 0..s.count {
        let pos = Vec3::new(
            sample_range(&mut rng, &s.x_range),
            sample_range(&mut rng, &s.y_range),
            sample_range(&mut rng, &s.z_range),
        );
        commands.spawn(star_bundle(s, pos));
    }

    info!(
        seed = ?seed,
        clouds = c.count,
        stars = s.count,
        "Scene spawned: glider at {:?}",
        Vec3::from(cfg.glider.start)
    );
}
