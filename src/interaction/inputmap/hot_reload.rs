#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use std::time::SystemTime;
#[cfg(feature = "debug")]
use crate::interaction::inputmap::parse::parse_input_toml;
#[cfg(feature = "debug")]
use crate::interaction::inputmap::types::{InputConfigPath, InputMap};

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
struct InputReloadState { last_modified: Option<SystemTime>, timer: Timer }
#[cfg(feature = "debug")]
impl Default for InputReloadState { fn default() -> Self { Self { last_modified: None, timer: Timer::from_seconds(0.5, TimerMode::Repeating) } } }

#[cfg(feature = "debug")]
pub struct InputMapHotReloadPlugin;
#[cfg(feature = "debug")]
impl Plugin for InputMapHotReloadPlugin { fn build(&self, app: &mut App) { #[cfg(not(target_arch = "wasm32"))] app.init_resource::<InputReloadState>().init_resource::<InputConfigPath>().add_systems(Update, poll_input_map_reload); } }

// The first poll only records the timestamp; the startup loader already parsed this file.
#[cfg(feature = "debug")]
fn poll_input_map_reload(time: Res<Time>, path: Res<InputConfigPath>, mut state: ResMut<InputReloadState>, mut input_map: ResMut<InputMap>) {
    if !state.timer.tick(time.delta()).finished() { return; }
    use std::fs;
    let Ok(mod_time) = fs::metadata(&path.0).and_then(|m| m.modified()) else { return; };
    let Some(prev) = state.last_modified.replace(mod_time) else { return; };
    if mod_time <= prev { return; }
    let Ok(raw) = fs::read_to_string(&path.0) else { return; };
    let parsed = parse_input_toml(&raw, true);
    if !parsed.errors.is_empty() { for e in parsed.errors { warn!("INPUT HOT-RELOAD parse error: {e}"); } } else { *input_map = parsed.input_map; info!("Input map hot-reloaded"); }
}
