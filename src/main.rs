use std::path::PathBuf;

use anyhow::{bail, Result};
use bevy::prelude::*;
use clap::Parser;

use cloud_drift::core::components::RngSeed;
use cloud_drift::core::config::GameConfig;
use cloud_drift::interaction::inputmap::types::InputConfigPath;
use cloud_drift::interaction::session::config_hot_reload::ConfigReloadSettings;
use cloud_drift::GamePlugin;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fly the glider, collect the stars", long_about = None)]
struct Args {
    /// Config layers in merge order; later files override earlier ones.
    #[arg(long = "config", default_values = ["assets/config/game.ron", "assets/config/game.local.ron"])]
    configs: Vec<PathBuf>,
    #[arg(long)]
    input_config: Option<PathBuf>,
    /// Overrides `rng_seed` from the config files.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (mut cfg, used, errors) = GameConfig::load_layered(args.configs.iter());
    // Missing layers are fine (game.local.ron is optional); broken ones are not.
    let (fatal, missing): (Vec<String>, Vec<String>) = errors.into_iter().partition(|e| !e.contains("read error"));
    if !fatal.is_empty() {
        bail!("invalid config: {}", fatal.join("; "));
    }
    if let Some(seed) = args.seed {
        cfg.rng_seed = Some(seed);
    }

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }));

    // LogPlugin is installed above, so these reach the subscriber.
    if used.is_empty() {
        warn!("No config layer found; running with defaults");
    } else {
        info!("Config layers loaded: {}", used.join(", "));
    }
    for e in missing {
        debug!("Config layer skipped: {e}");
    }
    for w in cfg.validate() {
        warn!("CONFIG WARNING: {w}");
    }

    if let Some(seed) = cfg.rng_seed {
        app.insert_resource(RngSeed(seed));
    }
    if let Some(path) = args.input_config {
        app.insert_resource(InputConfigPath(path));
    }
    app.insert_resource(ConfigReloadSettings {
        paths: args.configs,
        ..default()
    })
    .insert_resource(cfg)
    .add_plugins(GamePlugin)
    .run();
    Ok(())
}
