//! Discrete glider movement. One key press moves the glider one step along one axis;
//! there is no velocity, no key repeat and no clamping to the play area.

use bevy::prelude::*;

use crate::core::components::Glider;
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::interaction::inputmap::types::InputMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Up,
        MoveDirection::Down,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// Platform virtual key codes for the arrow keys (126 up, 125 down, 123 left, 124 right).
    pub fn from_platform_code(code: u16) -> Option<Self> {
        match code {
            126 => Some(MoveDirection::Up),
            125 => Some(MoveDirection::Down),
            123 => Some(MoveDirection::Left),
            124 => Some(MoveDirection::Right),
            _ => None,
        }
    }

    /// Input-map action driving this direction.
    pub const fn action_name(self) -> &'static str {
        match self {
            MoveDirection::Up => "MoveUp",
            MoveDirection::Down => "MoveDown",
            MoveDirection::Left => "MoveLeft",
            MoveDirection::Right => "MoveRight",
        }
    }

    pub fn from_action(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.action_name() == name)
    }

    /// Translation for one press: Up/Down on Y, Left/Right on X.
    pub fn delta(self, step: f32) -> Vec3 {
        match self {
            MoveDirection::Up => Vec3::Y * step,
            MoveDirection::Down => Vec3::NEG_Y * step,
            MoveDirection::Left => Vec3::NEG_X * step,
            MoveDirection::Right => Vec3::X * step,
        }
    }
}

/// One discrete move request for the glider.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveGlider {
    pub direction: MoveDirection,
}

/// Raw key press from a platform input source that reports virtual key codes.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformKeyPress(pub u16);

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct GliderMoveSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MoveGlider>()
            .add_event::<PlatformKeyPress>()
            .configure_sets(Update, GliderMoveSet.in_set(PrePhysicsSet))
            .add_systems(
                Update,
                (
                    emit_moves_from_actions,
                    translate_platform_keys,
                    apply_glider_moves,
                )
                    .chain()
                    .in_set(GliderMoveSet),
            );
    }
}

/// Each freshly pressed move action becomes exactly one [`MoveGlider`].
pub fn emit_moves_from_actions(input_map: Option<Res<InputMap>>, mut moves: EventWriter<MoveGlider>) {
    let Some(input_map) = input_map else { return };
    for action in &input_map.actions {
        let Some(direction) = MoveDirection::from_action(&action.name) else { continue };
        if input_map.just_pressed(&action.name) {
            moves.write(MoveGlider { direction });
        }
    }
}

/// Unknown key codes are dropped silently.
pub fn translate_platform_keys(
    mut keys: EventReader<PlatformKeyPress>,
    mut moves: EventWriter<MoveGlider>,
) {
    for PlatformKeyPress(code) in keys.read() {
        match MoveDirection::from_platform_code(*code) {
            Some(direction) => {
                moves.write(MoveGlider { direction });
            }
            None => trace!(target: "input", code, "unmapped platform key ignored"),
        }
    }
}

pub fn apply_glider_moves(
    mut moves: EventReader<MoveGlider>,
    cfg: Option<Res<GameConfig>>,
    mut q: Query<&mut Transform, With<Glider>>,
) {
    let Ok(mut tf) = q.single_mut() else {
        moves.clear();
        return;
    };
    let step = cfg.map(|c| c.glider.step).unwrap_or(1.0);
    for MoveGlider { direction } in moves.read() {
        tf.translation += direction.delta(step);
        debug!(target: "input", ?direction, pos = ?tf.translation, "glider moved");
    }
}
