#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::core::components::{Glider, Star};
#[cfg(feature = "debug")]
use crate::gameplay::session::Session;
#[cfg(feature = "debug")]
use crate::interaction::contact::StarCollected;

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default, Clone)]
pub struct DebugStats {
    pub frame_counter: u64,
    pub fps: f32,
    pub score: u32,
    pub stars_remaining: usize,
    pub stars_collected: u32,
    pub glider_position: Option<Vec3>,
    pub last_collected: Option<Vec3>,
}

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    session: Option<Res<Session>>,
    q_stars: Query<(), With<Star>>,
    q_glider: Query<&Transform, With<Glider>>,
) {
    stats.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    stats.fps = if stats.fps == 0.0 { inst_fps } else { stats.fps * 0.9 + inst_fps * 0.1 };
    if let Some(s) = session {
        stats.score = s.score();
        stats.stars_collected = s.stars_collected();
    }
    stats.stars_remaining = q_stars.iter().count();
    stats.glider_position = q_glider.single().ok().map(|t| t.translation);
}

#[cfg(feature = "debug")]
pub fn debug_star_collected_system(mut stats: ResMut<DebugStats>, mut collected: EventReader<StarCollected>) {
    for ev in collected.read() {
        stats.last_collected = Some(ev.position);
        debug!(target: "score", "star {:?} taken at {:?} (score {})", ev.star, ev.position, ev.score);
    }
}
