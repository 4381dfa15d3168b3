use bevy::prelude::*;
use std::{collections::HashMap, path::{Path, PathBuf}, time::SystemTime};

use crate::core::config::GameConfig;
use crate::gameplay::session::Session;

/// Files polled for changes, in layering order (later overrides earlier).
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from("assets/config/game.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Startup, record_startup_mod_times)
                .add_systems(Update, poll_and_reload_config);
        }
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

// The running config was loaded from these files just before startup; only later edits count.
fn record_startup_mod_times(settings: Res<ConfigReloadSettings>, mut state: ResMut<ConfigReloadState>) {
    for path in &settings.paths {
        if let Some(t) = modified_time(path) {
            state.last_mod.insert(path.clone(), t);
        }
    }
}

/// Values resolved once at startup (CLI `--seed` included) survive a reload.
pub fn carry_startup_overrides(current: &GameConfig, mut loaded: GameConfig) -> GameConfig {
    loaded.rng_seed = current.rng_seed;
    loaded
}

/// Copy the live-tunable parts of a freshly loaded config into running state.
/// Spawn counts and ranges only matter at startup and are left alone.
pub fn apply_reloaded_config(new_cfg: &GameConfig, session: Option<&mut Session>, window: Option<&mut Window>) {
    if let Some(session) = session {
        if session.star_reward != new_cfg.scoring.star_reward {
            info!(target: "score", "star reward {} -> {}", session.star_reward, new_cfg.scoring.star_reward);
            session.star_reward = new_cfg.scoring.star_reward;
        }
    }
    if let Some(window) = window {
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window.resolution.set(new_cfg.window.width, new_cfg.window.height);
        }
    }
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    mut session: Option<ResMut<Session>>,
    mut windows: Query<&mut Window>,
) {
    let interval = settings.interval_secs.max(0.05);
    if (state.timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        state.timer.set_duration(std::time::Duration::from_secs_f32(interval));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    use std::time::UNIX_EPOCH;
    let mut dirty = false;
    for path in &settings.paths {
        if let Some(mod_time) = modified_time(path) {
            let entry = state.last_mod.entry(path.clone()).or_insert(UNIX_EPOCH);
            if mod_time > *entry {
                *entry = mod_time;
                dirty = true;
            }
        }
    }
    if !dirty {
        return;
    }
    let (new_cfg, _used, errors) = GameConfig::load_layered(settings.paths.iter());
    for e in errors {
        // Missing optional layers (game.local.ron) are expected.
        if !e.contains("read error") {
            warn!("CONFIG HOT-RELOAD issue: {e}");
        }
    }
    let new_cfg = carry_startup_overrides(&cfg_res, new_cfg);
    if *cfg_res != new_cfg {
        for w in new_cfg.validate() {
            warn!("CONFIG WARNING: {w}");
        }
        info!("Config hot-reload applied");
        let mut window = windows.single_mut().ok();
        apply_reloaded_config(&new_cfg, session.as_deref_mut(), window.as_deref_mut());
        *cfg_res = new_cfg;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        use std::io::Write;
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn untouched_files_do_not_replace_startup_config() {
        let file = write_temp("(scoring: (star_reward: 10))");
        let path = file.path().to_path_buf();
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(Duration::from_secs(1));
        world.insert_resource(time);
        world.insert_resource(ConfigReloadSettings { paths: vec![path.clone()], interval_secs: 0.05 });
        world.init_resource::<ConfigReloadState>();
        // As if `main` had applied `--seed 42` and a wider window on top of the file.
        let mut startup = GameConfig::default();
        startup.rng_seed = Some(42);
        startup.window.width = 1600.0;
        world.insert_resource(startup.clone());

        world.run_system_once(record_startup_mod_times).unwrap();
        assert!(world.resource::<ConfigReloadState>().last_mod.contains_key(&path));
        world.run_system_once(poll_and_reload_config).unwrap();

        assert_eq!(*world.resource::<GameConfig>(), startup);
    }

    #[test]
    fn reload_keeps_startup_seed() {
        let mut current = GameConfig::default();
        current.rng_seed = Some(42);
        let mut loaded = GameConfig::default();
        loaded.scoring.star_reward = 20;
        let merged = carry_startup_overrides(&current, loaded);
        assert_eq!(merged.rng_seed, Some(42));
        assert_eq!(merged.scoring.star_reward, 20);
    }

    #[test]
    fn reward_and_title_follow_new_config() {
        let mut cfg = GameConfig::default();
        cfg.scoring.star_reward = 50;
        cfg.window.title = "Reloaded".into();
        let mut session = Session::new(10);
        session.award(30);
        let mut window = Window::default();
        apply_reloaded_config(&cfg, Some(&mut session), Some(&mut window));
        assert_eq!(session.star_reward, 50);
        // Reload never touches the accumulated score.
        assert_eq!(session.score(), 30);
        assert_eq!(window.title, "Reloaded");
    }
}
