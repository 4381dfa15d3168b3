use bevy::prelude::*;

use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::debug::DebugPlugin;
use crate::gameplay::clouds::CloudDriftPlugin;
use crate::gameplay::session::SessionPlugin;
use crate::gameplay::spawn::SceneSpawnPlugin;
use crate::interaction::contact::ContactPlugin;
#[cfg(feature = "debug")]
use crate::interaction::inputmap::hot_reload::InputMapHotReloadPlugin;
use crate::interaction::inputmap::plugin::InputActionsPlugin;
use crate::interaction::movement::MovementPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::physics::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::hud::HudPlugin;
use crate::rendering::scene::ScenePlugin;
use crate::rendering::visuals::VisualsPlugin;

/// Everything except the windowing/render defaults, which `main` supplies.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            ScenePlugin,
            VisualsPlugin,
            PhysicsSetupPlugin,
            SessionPlugin,
            SceneSpawnPlugin,
            CloudDriftPlugin,
            InputActionsPlugin,
            MovementPlugin,
            ContactPlugin,
            HudPlugin,

            DebugPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
            #[cfg(feature = "debug")]
            InputMapHotReloadPlugin,
        ));
    }
}
