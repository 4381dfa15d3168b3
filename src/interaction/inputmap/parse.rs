use super::types::*;
use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Bindings shipped with the binary; used when no input file is found on disk.
pub const DEFAULT_INPUT_TOML: &str = include_str!("../../../assets/config/input.toml");

#[derive(Debug, Default)]
pub struct ParsedInputConfig { pub input_map: InputMap, pub errors: Vec<String> }

#[derive(Debug, serde::Deserialize)]
struct ActionDecl { description: Option<String> }

// BTreeMap keeps action ids stable across runs (sorted by name).
#[derive(Debug, serde::Deserialize)]
struct RootToml { actions: Option<BTreeMap<String, ActionDecl>>, bindings: Option<BTreeMap<String, Vec<String>>>, #[serde(rename = "debug.bindings")] debug_bindings: Option<BTreeMap<String, Vec<String>>> }

pub fn parse_input_toml(raw: &str, debug_layer: bool) -> ParsedInputConfig {
    let mut result = ParsedInputConfig::default();
    let root: RootToml = match toml::from_str(raw) { Ok(r) => r, Err(e) => { result.errors.push(format!("Top-level parse: {e}")); return result; } };
    let mut actions: Vec<ActionMeta> = Vec::new();
    let mut name_to_id = HashMap::new();
    for (name, decl) in root.actions.unwrap_or_default() {
        if !validate_action_name(&name) { result.errors.push(format!("Invalid action name '{name}': must be PascalCase")); continue; }
        let id = ActionId(actions.len() as u16);
        actions.push(ActionMeta { id, name: name.clone(), description: decl.description.unwrap_or_default() });
        name_to_id.insert(name, id);
    }

    let dynamic_states = vec![ActionStateBinary::default(); actions.len()];
    let mut input_map = InputMap { actions, name_to_id, dynamic_states, ..Default::default() };

    // Merge bindings (normal + debug overlay if allowed)
    let mut all_bindings: BTreeMap<String, Vec<String>> = BTreeMap::new();
    if let Some(b) = root.bindings { for (k, v) in b { all_bindings.entry(k).or_default().extend(v); } }
    if debug_layer { if let Some(db) = root.debug_bindings { for (k, v) in db { all_bindings.entry(k).or_default().extend(v); } } }

    let mut binding_id: u32 = 0;
    for (action_name, list) in all_bindings {
        let Some(aid) = input_map.name_to_id.get(&action_name).copied() else { result.errors.push(format!("Binding references unknown action '{action_name}'")); continue; };
        for spec in &list {
            match parse_binding(spec) {
                Ok(mut tokens) => {
                    canonical_sort_tokens(&mut tokens);
                    if let Some(prev) = input_map.chord_map.get(&tokens) { result.errors.push(format!("[binding {action_name} '{spec}'] chord already bound (binding #{prev})")); continue; }
                    input_map.bindings_index.entry(aid).or_default().push(binding_id);
                    input_map.chord_map.insert(tokens.clone(), binding_id);
                    input_map.bindings.push(Binding { id: binding_id, tokens });
                    binding_id += 1;
                }
                Err(err) => result.errors.push(format!("[binding {action_name} '{spec}'] {err}")),
            }
        }
    }
    input_map.bindings_runtime = vec![BindingRuntime::default(); input_map.bindings.len()];
    result.input_map = input_map;
    result
}

fn validate_action_name(name: &str) -> bool { let bytes = name.as_bytes(); if bytes.is_empty() { return false; } if !bytes[0].is_ascii_uppercase() { return false; } name.chars().all(|c| c.is_ascii_alphanumeric()) }

fn canonical_sort_tokens(tokens: &mut SmallVec<[RawBindingToken; 2]>) { tokens.sort_by_key(token_sort_key); }

fn token_sort_key(t: &RawBindingToken) -> (u8, u16) { match t { RawBindingToken::Key(k) => (0, keycode_rank(*k)) } }

fn keycode_rank(k: KeyCode) -> u16 { use bevy::input::keyboard::KeyCode::*; match k { ShiftLeft => 1, ControlLeft => 2, AltLeft => 3, ArrowUp => 10, ArrowDown => 11, ArrowLeft => 12, ArrowRight => 13, KeyW => 20, KeyA => 21, KeyS => 22, KeyD => 23, Numpad8 => 30, Numpad2 => 31, Numpad4 => 32, Numpad6 => 33, Space => 40, Escape => 41, F1 => 50, _ => 1000 } }

fn parse_binding(spec: &str) -> Result<SmallVec<[RawBindingToken; 2]>, String> {
    let mut tokens: SmallVec<[RawBindingToken; 2]> = SmallVec::new();
    let mut seen: HashSet<RawBindingToken> = HashSet::new();
    for part in spec.split('+') {
        let p = part.trim();
        if p.is_empty() { continue; }
        let token = parse_token(p)?;
        if !seen.insert(token) { return Err(format!("Duplicate token in chord: {token:?}")); }
        tokens.push(token);
    }
    if tokens.is_empty() { return Err("Empty binding".into()); }
    Ok(tokens)
}

fn parse_token(s: &str) -> Result<RawBindingToken, String> { if let Some(rest) = s.strip_prefix("Key:") { return parse_keycode(rest); } Err(format!("Unrecognized token '{s}'")) }

fn parse_keycode(name: &str) -> Result<RawBindingToken, String> {
    let kc = match name {
        "ArrowUp" | "Up" => KeyCode::ArrowUp, "ArrowDown" | "Down" => KeyCode::ArrowDown, "ArrowLeft" | "Left" => KeyCode::ArrowLeft, "ArrowRight" | "Right" => KeyCode::ArrowRight,
        "W" | "KeyW" => KeyCode::KeyW, "A" | "KeyA" => KeyCode::KeyA, "S" | "KeyS" => KeyCode::KeyS, "D" | "KeyD" => KeyCode::KeyD,
        "Numpad8" => KeyCode::Numpad8, "Numpad2" => KeyCode::Numpad2, "Numpad4" => KeyCode::Numpad4, "Numpad6" => KeyCode::Numpad6,
        "ShiftLeft" => KeyCode::ShiftLeft, "ControlLeft" => KeyCode::ControlLeft, "AltLeft" => KeyCode::AltLeft,
        "Space" => KeyCode::Space, "Escape" => KeyCode::Escape, "F1" => KeyCode::F1,
        other => return Err(format!("Unsupported KeyCode '{other}' (extend parser)")),
    };
    Ok(RawBindingToken::Key(kc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_parse_cleanly() {
        let parsed = parse_input_toml(DEFAULT_INPUT_TOML, false);
        assert!(parsed.errors.is_empty(), "errors: {:?}", parsed.errors);
        for name in ["MoveUp", "MoveDown", "MoveLeft", "MoveRight"] {
            assert!(parsed.input_map.name_to_id.contains_key(name), "missing action {name}");
            assert!(parsed.input_map.bindings_for(name).next().is_some(), "{name} has no binding");
        }
        let up: Vec<_> = parsed.input_map.bindings_for("MoveUp").collect();
        assert!(up.iter().any(|b| b.tokens.as_slice() == [RawBindingToken::Key(KeyCode::ArrowUp)]));
    }

    #[test]
    fn reports_unknown_action_and_key() {
        let raw = r#"
            [actions]
            MoveUp = { description = "up" }
            [bindings]
            MoveUp = ["Key:ArrowUp", "Key:Banana"]
            Fly = ["Key:Space"]
        "#;
        let parsed = parse_input_toml(raw, false);
        let joined = parsed.errors.join("\n");
        assert!(joined.contains("Unsupported KeyCode 'Banana'"), "{joined}");
        assert!(joined.contains("unknown action 'Fly'"), "{joined}");
        assert_eq!(parsed.input_map.bindings.len(), 1);
    }

    #[test]
    fn rejects_bad_action_names_and_duplicate_chords() {
        let raw = r#"
            [actions]
            moveUp = {}
            MoveDown = {}
            MoveLeft = {}
            [bindings]
            MoveDown = ["Key:ShiftLeft + Key:S", "Key:S+Key:S"]
            MoveLeft = ["Key:S + Key:ShiftLeft"]
        "#;
        let parsed = parse_input_toml(raw, false);
        let joined = parsed.errors.join("\n");
        assert!(joined.contains("Invalid action name 'moveUp'"), "{joined}");
        assert!(joined.contains("Duplicate token"), "{joined}");
        assert!(joined.contains("chord already bound"), "{joined}");
        let down: Vec<_> = parsed.input_map.bindings_for("MoveDown").collect();
        assert_eq!(down.len(), 1);
        assert_eq!(down[0].tokens.len(), 2);
    }

    #[test]
    fn debug_layer_only_merged_when_enabled() {
        let raw = r#"
            [actions]
            MoveUp = {}
            [bindings]
            MoveUp = ["Key:ArrowUp"]
            ["debug.bindings"]
            MoveUp = ["Key:Numpad8"]
        "#;
        assert_eq!(parse_input_toml(raw, false).input_map.bindings.len(), 1);
        assert_eq!(parse_input_toml(raw, true).input_map.bindings.len(), 2);
    }

    #[test]
    fn malformed_toml_is_an_error_not_a_panic() {
        let parsed = parse_input_toml("[actions\nMoveUp = ", false);
        assert_eq!(parsed.errors.len(), 1);
        assert!(parsed.input_map.actions.is_empty());
    }
}
