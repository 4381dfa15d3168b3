use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Sky blue behind everything.
pub const SKY_COLOR: Color = Color::srgb(0.0, 0.0, 1.0);

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SKY_COLOR))
            .add_systems(Startup, setup_camera_and_light);
    }
}

#[derive(Component, Debug)]
pub struct MainCamera;

fn setup_camera_and_light(mut commands: Commands, cfg: Option<Res<GameConfig>>) {
    let cfg = cfg.map(|c| c.clone()).unwrap_or_default();
    // Bevy 0.16: Camera3d / PointLight pull in their required components.
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(cfg.camera.position.into()).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
    commands.spawn((
        PointLight {
            intensity: cfg.light.intensity,
            range: 100.0,
            ..default()
        },
        Transform::from_translation(cfg.light.position.into()),
    ));
}
