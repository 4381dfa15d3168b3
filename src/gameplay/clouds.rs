use bevy::prelude::*;

use crate::core::components::{Cloud, CloudDrift};
use crate::core::system::system_order::PrePhysicsSet;

/// Moves every cloud along its repeating drift before Rapier syncs kinematic bodies.
pub struct CloudDriftPlugin;

impl Plugin for CloudDriftPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, drift_clouds.in_set(PrePhysicsSet));
    }
}

pub fn drift_clouds(time: Res<Time>, mut q: Query<(&mut Transform, &mut CloudDrift), With<Cloud>>) {
    let dt = time.delta_secs();
    for (mut tf, mut drift) in q.iter_mut() {
        tf.translation += drift.step(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::{Glider, Star};
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    #[test]
    fn only_clouds_drift() {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_millis(500));
        world.insert_resource(time);
        let cloud = world
            .spawn((Cloud, CloudDrift::new(Vec3::new(0.0, -10.0, 0.0), 5.0), Transform::from_xyz(1.0, 5.0, 2.0)))
            .id();
        let star = world.spawn((Star, Transform::from_xyz(0.0, 3.0, 0.0))).id();
        let glider = world.spawn((Glider, Transform::from_xyz(0.0, 0.0, -5.0))).id();

        world.run_system_once(drift_clouds).unwrap();

        let cloud_pos = world.get::<Transform>(cloud).unwrap().translation;
        assert!((cloud_pos.y - 4.0).abs() < 1e-4, "cloud y = {}", cloud_pos.y);
        assert_eq!(cloud_pos.x, 1.0);
        assert_eq!(cloud_pos.z, 2.0);
        assert_eq!(world.get::<Transform>(star).unwrap().translation, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(world.get::<Transform>(glider).unwrap().translation, Vec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn drift_keeps_descending_across_cycles() {
        let mut drift = CloudDrift::new(Vec3::new(0.0, -10.0, 0.0), 5.0);
        let mut total = Vec3::ZERO;
        for _ in 0..20 {
            total += drift.step(0.5);
        }
        assert!((total.y + 20.0).abs() < 1e-3, "two full cycles move 20 units down, got {}", total.y);
    }
}
