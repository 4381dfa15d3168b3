use bevy::prelude::*;

use crate::gameplay::session::Session;
use crate::interaction::contact::ContactHandlingSet;

#[derive(Component, Debug)]
pub struct ScoreLabel;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_score_label)
            .add_systems(Update, update_score_label.after(ContactHandlingSet));
    }
}

// Bevy 0.16 UI text: Text + TextFont + TextColor on an absolutely positioned Node.
fn spawn_score_label(mut commands: Commands) {
    commands.spawn((
        Text::new(Session::default().label()),
        TextFont {
            font_size: 24.0,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        },
        ScoreLabel,
    ));
}

pub fn update_score_label(session: Option<Res<Session>>, mut q_text: Query<&mut Text, With<ScoreLabel>>) {
    let Some(session) = session else { return };
    if !session.is_changed() {
        return;
    }
    let label = session.label();
    for mut text in q_text.iter_mut() {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_session_score() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(Session::new(10));
        app.add_plugins(HudPlugin);
        app.update();
        let read = |app: &mut App| {
            let world = app.world_mut();
            world.query_filtered::<&Text, With<ScoreLabel>>().single(world).map(|t| t.0.clone()).unwrap()
        };
        assert_eq!(read(&mut app), "Score: 0");
        app.world_mut().resource_mut::<Session>().collect_star();
        app.update();
        assert_eq!(read(&mut app), "Score: 10");
    }
}
