use bevy::prelude::*;

use cloud_drift::core::components::{Category, Glider, Star};
use cloud_drift::core::config::GameConfig;
use cloud_drift::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use cloud_drift::interaction::inputmap::plugin::InputActionsPlugin;
use cloud_drift::interaction::inputmap::types::InputConfigPath;
use cloud_drift::interaction::movement::{MovementPlugin, PlatformKeyPress};

fn movement_app() -> (App, Entity, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.configure_sets(Update, (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(InputConfigPath("assets/config/input.toml".into()));
    app.add_plugins((InputActionsPlugin, MovementPlugin));
    let glider = app
        .world_mut()
        .spawn((Glider, Category::Glider, Transform::from_xyz(0.0, 0.0, -5.0)))
        .id();
    let star = app
        .world_mut()
        .spawn((Star, Category::Star, Transform::from_xyz(3.0, 3.0, 3.0)))
        .id();
    app.update();
    (app, glider, star)
}

/// One frame, then drop this frame's key edges the way the input plugin does.
fn tick(app: &mut App) {
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

fn glider_pos(app: &App, glider: Entity) -> Vec3 {
    app.world().get::<Transform>(glider).unwrap().translation
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(key);
}

#[test]
fn arrow_keys_move_one_unit_per_press() {
    let (mut app, glider, _) = movement_app();
    let start = glider_pos(&app, glider);

    press(&mut app, KeyCode::ArrowUp);
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), start + Vec3::Y);

    // Held keys do not repeat.
    tick(&mut app);
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), start + Vec3::Y);

    release(&mut app, KeyCode::ArrowUp);
    tick(&mut app);
    press(&mut app, KeyCode::ArrowUp);
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), start + Vec3::Y * 2.0);

    release(&mut app, KeyCode::ArrowUp);
    press(&mut app, KeyCode::ArrowLeft);
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), start + Vec3::new(-1.0, 2.0, 0.0));

    release(&mut app, KeyCode::ArrowLeft);
    press(&mut app, KeyCode::ArrowDown);
    press(&mut app, KeyCode::ArrowRight);
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), start + Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn tap_released_before_the_frame_still_moves() {
    let (mut app, glider, _) = movement_app();
    press(&mut app, KeyCode::ArrowUp);
    release(&mut app, KeyCode::ArrowUp);
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), Vec3::new(0.0, 1.0, -5.0));

    // No further movement once the tap has been consumed.
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), Vec3::new(0.0, 1.0, -5.0));

    press(&mut app, KeyCode::ArrowRight);
    release(&mut app, KeyCode::ArrowRight);
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), Vec3::new(1.0, 1.0, -5.0));
}

#[test]
fn wasd_is_an_alternate_binding() {
    let (mut app, glider, _) = movement_app();
    press(&mut app, KeyCode::KeyD);
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), Vec3::new(1.0, 0.0, -5.0));
}

#[test]
fn platform_codes_drive_the_glider() {
    let (mut app, glider, star) = movement_app();
    for code in [126u16, 126, 123, 124, 124, 125] {
        app.world_mut().send_event(PlatformKeyPress(code));
    }
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), Vec3::new(1.0, 1.0, -5.0));
    assert_eq!(
        app.world().get::<Transform>(star).unwrap().translation,
        Vec3::new(3.0, 3.0, 3.0),
        "only the glider moves"
    );
}

#[test]
fn unknown_platform_codes_are_ignored() {
    let (mut app, glider, _) = movement_app();
    for code in [0u16, 49, 122, 127, u16::MAX] {
        app.world_mut().send_event(PlatformKeyPress(code));
    }
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), Vec3::new(0.0, 0.0, -5.0));
}

#[test]
fn step_comes_from_config() {
    let (mut app, glider, _) = movement_app();
    let mut cfg = GameConfig::default();
    cfg.glider.step = 2.5;
    app.insert_resource(cfg);
    app.world_mut().send_event(PlatformKeyPress(124));
    tick(&mut app);
    assert_eq!(glider_pos(&app, glider), Vec3::new(2.5, 0.0, -5.0));
}
