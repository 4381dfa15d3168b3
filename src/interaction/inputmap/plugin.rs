use bevy::input::InputSystem;
use bevy::prelude::*;

use super::parse::{parse_input_toml, DEFAULT_INPUT_TOML};
use super::systems::system_evaluate_bindings;
use super::types::{InputConfigPath, InputMap};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputActionUpdateSet;

pub struct InputActionsPlugin;
impl Plugin for InputActionsPlugin { fn build(&self, app: &mut App) { app
        .init_resource::<InputMap>()
        .init_resource::<InputConfigPath>()
        .configure_sets(PreUpdate, InputActionUpdateSet.after(InputSystem))
        .add_systems(PreStartup, load_initial_input_map)
        .add_systems(PreUpdate, system_evaluate_bindings.in_set(InputActionUpdateSet)); } }

/// Read the binding file, falling back to the embedded defaults when it is missing (always on wasm).
pub fn load_input_source(path: &InputConfigPath) -> String {
    if cfg!(target_arch = "wasm32") { return DEFAULT_INPUT_TOML.to_string(); }
    match std::fs::read_to_string(&path.0) {
        Ok(raw) => raw,
        Err(e) => { warn!("Input config {} unreadable ({e}); using built-in bindings", path.0.display()); DEFAULT_INPUT_TOML.to_string() }
    }
}

fn load_initial_input_map(mut commands: Commands, path: Res<InputConfigPath>) {
    let raw = load_input_source(&path);
    let parsed = parse_input_toml(&raw, cfg!(feature = "debug"));
    if !parsed.errors.is_empty() { for e in parsed.errors { error!("INPUT MAP ERROR: {e}"); } } else { info!("Input map loaded: {} actions, {} bindings", parsed.input_map.actions.len(), parsed.input_map.bindings.len()); }
    commands.insert_resource(parsed.input_map);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_embedded_bindings() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(InputConfigPath("does/not/exist/input.toml".into()));
        app.add_plugins(InputActionsPlugin);
        app.update();
        let im = app.world().resource::<InputMap>();
        assert!(im.name_to_id.contains_key("MoveUp"));
        assert!(im.bindings_for("MoveLeft").next().is_some());
    }
}
