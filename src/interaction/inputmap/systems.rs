//! Systems for input action evaluation.
use bevy::prelude::*;
use super::types::*;

/// Evaluate every chord against the keyboard and fold binding edges into action states.
/// Edges are derived from `pressed` so each physical press yields one `just_pressed` frame,
/// regardless of how long the key is held. Single-key taps shorter than a frame still count.
pub fn system_evaluate_bindings(keyboard: Option<Res<ButtonInput<KeyCode>>>, mut input_map: ResMut<InputMap>) {
    input_map.frame_counter += 1;
    for st in &mut input_map.dynamic_states { st.clear_transitions(); }
    let Some(keyboard) = keyboard else { return; };
    // Ensure runtime sized without simultaneous immutable+mutable borrow
    let total_bindings = input_map.bindings.len();
    if input_map.bindings_runtime.len() < total_bindings { input_map.bindings_runtime.resize(total_bindings, BindingRuntime::default()); }
    let map = &mut *input_map;
    for binding in &map.bindings {
        let all_active = binding.tokens.iter().all(|token| match token { RawBindingToken::Key(k) => keyboard.pressed(*k) });
        // A single key pressed and released between two frames is never seen as `pressed`.
        let tapped = matches!(binding.tokens.as_slice(), [RawBindingToken::Key(k)] if keyboard.just_pressed(*k));
        let rt = &mut map.bindings_runtime[binding.id as usize];
        rt.just_pressed = false;
        rt.just_released = false;
        if all_active { if !rt.active { rt.active = true; rt.just_pressed = true; } }
        else if rt.active { rt.active = false; rt.just_released = true; }
        else if tapped { rt.just_pressed = true; rt.just_released = true; }
    }
    for (aid, bids) in &map.bindings_index {
        let Some(state) = map.dynamic_states.get_mut(aid.0 as usize) else { continue; };
        let mut any_active = false;
        for bid in bids {
            let rt = &map.bindings_runtime[*bid as usize];
            if rt.just_pressed { state.just_pressed = true; }
            if rt.just_released { state.just_released = true; }
            any_active |= rt.active;
        }
        state.pressed = any_active;
    }
}
