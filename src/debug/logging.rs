#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::stats::DebugStats;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugLogState {
    pub log_interval: f32,
    pub time_accum: f32,
}

#[cfg(feature = "debug")]
impl Default for DebugLogState {
    fn default() -> Self {
        Self { log_interval: 1.0, time_accum: 0.0 }
    }
}

#[cfg(feature = "debug")]
pub fn debug_logging_system(time: Res<Time>, mut state: ResMut<DebugLogState>, stats: Res<DebugStats>) {
    state.time_accum += time.delta_secs();
    if state.time_accum >= state.log_interval {
        state.time_accum = 0.0;
        info!("SIM frame={} t={:.3}s fps={:.1} score={} collected={} stars_left={} glider={:?} last_star={:?}",
            stats.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.score,
            stats.stars_collected,
            stats.stars_remaining,
            stats.glider_position,
            stats.last_collected);
    }
}
