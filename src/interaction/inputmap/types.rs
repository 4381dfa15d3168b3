use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u16); // internal index (array position)

#[derive(Debug, Clone)]
pub struct ActionMeta { pub id: ActionId, pub name: String, pub description: String }

#[derive(Default, Debug, Clone, Copy)]
pub struct ActionStateBinary { pub pressed: bool, pub just_pressed: bool, pub just_released: bool }
impl ActionStateBinary { pub fn clear_transitions(&mut self) { self.just_pressed = false; self.just_released = false; } }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawBindingToken { Key(KeyCode) }

/// All tokens must be held together (chord); single-key bindings have one token.
#[derive(Debug, Clone)]
pub struct Binding { pub id: u32, pub tokens: SmallVec<[RawBindingToken; 2]> }

#[derive(Debug, Default, Clone)]
pub struct BindingRuntime { pub active: bool, pub just_pressed: bool, pub just_released: bool }

/// Where the binding TOML is read from (CLI / env override of the default asset path).
#[derive(Resource, Debug, Clone)]
pub struct InputConfigPath(pub PathBuf);
impl Default for InputConfigPath {
    fn default() -> Self {
        Self(PathBuf::from(std::env::var("INPUT_CONFIG_PATH").unwrap_or_else(|_| "assets/config/input.toml".into())))
    }
}

#[derive(Resource, Debug, Default)]
pub struct InputMap {
    pub actions: Vec<ActionMeta>,
    pub name_to_id: HashMap<String, ActionId>,
    pub bindings_index: HashMap<ActionId, Vec<u32>>, // mapping to binding ids
    pub bindings: Vec<Binding>,
    pub bindings_runtime: Vec<BindingRuntime>,
    pub chord_map: HashMap<SmallVec<[RawBindingToken; 2]>, u32>,
    pub dynamic_states: Vec<ActionStateBinary>,
    pub frame_counter: u64,
}

impl InputMap {
    pub fn get_state(&self, name: &str) -> Option<&ActionStateBinary> { self.name_to_id.get(name).and_then(|id| self.dynamic_states.get(id.0 as usize)) }
    pub fn pressed(&self, name: &str) -> bool { self.get_state(name).is_some_and(|b| b.pressed) }
    pub fn just_pressed(&self, name: &str) -> bool { self.get_state(name).is_some_and(|b| b.just_pressed) }
    pub fn just_released(&self, name: &str) -> bool { self.get_state(name).is_some_and(|b| b.just_released) }
    pub fn bindings_for(&self, name: &str) -> impl Iterator<Item = &Binding> + '_ {
        self.name_to_id
            .get(name)
            .and_then(|id| self.bindings_index.get(id))
            .into_iter()
            .flatten()
            .filter_map(|bid| self.bindings.get(*bid as usize))
    }
}
