use crate::core::config::GameConfig;
use crate::gameplay::session::Session;
use bevy::prelude::*;

#[derive(Resource, Deref, DerefMut)]
struct AutoCloseTimer(Timer);

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<GameConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(seconds = secs, "AutoClose: will exit after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    mut timer: Option<ResMut<AutoCloseTimer>>,
    session: Option<Res<Session>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    if let Some(t) = timer.as_mut() {
        t.tick(time.delta());
        if t.finished() {
            let score = session.map(|s| s.score()).unwrap_or(0);
            info!(score, "AutoClose: timer finished, requesting app exit");
            ev_exit.write(AppExit::Success);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn no_timer_when_disabled() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(GameConfig::default());
        app.add_plugins(AutoClosePlugin);
        app.update();
        assert!(!app.world().contains_resource::<AutoCloseTimer>());
    }

    #[test]
    fn exits_after_configured_delay() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        let mut cfg = GameConfig::default();
        cfg.window.auto_close = 0.05;
        app.insert_resource(cfg);
        app.add_plugins(AutoClosePlugin);
        app.update();
        assert!(app.world().contains_resource::<AutoCloseTimer>());
        assert!(app.should_exit().is_none());
        app.world_mut()
            .resource_mut::<AutoCloseTimer>()
            .tick(Duration::from_millis(60));
        app.update();
        assert_eq!(app.should_exit(), Some(AppExit::Success));
    }
}
