//! Debug module: feature gated periodic stats logging.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
pub mod stats; // pub for testing

#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use crate::interaction::contact::{ContactHandlingSet, StarCollected};

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use logging::{debug_logging_system, DebugLogState};
        use stats::{debug_star_collected_system, debug_stats_collect_system, DebugStats};

        app.add_event::<StarCollected>()
            .init_resource::<DebugStats>()
            .init_resource::<DebugLogState>()
            .add_systems(
                Update,
                (debug_star_collected_system, debug_stats_collect_system, debug_logging_system)
                    .chain()
                    .after(ContactHandlingSet),
            );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
