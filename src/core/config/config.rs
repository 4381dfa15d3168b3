use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Serialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Cloud Drift".into(),
            auto_close: 0.0,
        }
    }
}

/// Plain world-space point; kept separate from `Vec3` so the RON stays `(x: .., y: .., z: ..)`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq)]
#[serde(default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}
impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnRange<T> {
    pub min: T,
    pub max: T,
}
impl<T: Default> Default for SpawnRange<T> {
    fn default() -> Self {
        Self {
            min: Default::default(),
            max: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Point3,
}
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 5.0, 15.0),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LightConfig {
    pub position: Point3,
    pub intensity: f32,
}
impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 10.0, 10.0),
            intensity: 2_000_000.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct GliderConfig {
    pub start: Point3,
    /// Distance moved per directional key press.
    pub step: f32,
    /// Full extents of the glider body (width, height, length).
    pub size: Point3,
}
impl Default for GliderConfig {
    fn default() -> Self {
        Self {
            start: Point3::new(0.0, 0.0, -5.0),
            step: 1.0,
            size: Point3::new(1.0, 0.5, 2.0),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct StarSpawnConfig {
    pub count: usize,
    pub radius: f32,
    pub x_range: SpawnRange<f32>,
    pub y_range: SpawnRange<f32>,
    pub z_range: SpawnRange<f32>,
}
impl Default for StarSpawnConfig {
    fn default() -> Self {
        Self {
            count: 10,
            radius: 0.5,
            x_range: SpawnRange { min: -10.0, max: 10.0 },
            y_range: SpawnRange { min: 1.0, max: 10.0 },
            z_range: SpawnRange { min: -10.0, max: 10.0 },
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CloudDriftConfig {
    /// Vertical displacement applied over one `duration` cycle; the cycle repeats forever.
    pub offset_y: f32,
    pub duration: f32,
}
impl Default for CloudDriftConfig {
    fn default() -> Self {
        Self {
            offset_y: -10.0,
            duration: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct CloudSpawnConfig {
    pub count: usize,
    pub radius: f32,
    pub x_range: SpawnRange<f32>,
    pub height: f32,
    pub z_range: SpawnRange<f32>,
    pub drift: CloudDriftConfig,
}
impl Default for CloudSpawnConfig {
    fn default() -> Self {
        Self {
            count: 5,
            radius: 2.0,
            x_range: SpawnRange { min: -10.0, max: 10.0 },
            height: 5.0,
            z_range: SpawnRange { min: -10.0, max: 10.0 },
            drift: Default::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points awarded per collected star.
    pub star_reward: u32,
}
impl Default for ScoringConfig {
    fn default() -> Self {
        Self { star_reward: 10 }
    }
}

#[derive(Debug, Deserialize, Serialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub glider: GliderConfig,
    pub stars: StarSpawnConfig,
    pub clouds: CloudSpawnConfig,
    pub scoring: ScoringConfig,
    pub rapier_debug: bool,
    /// Fixed seed for entity placement; `None` draws from entropy.
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    /// Load from a single RON file (errors contain human-readable context).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Load multiple layers; later overrides earlier (deep merge).
    /// Skips missing files; returns (config, used_paths, errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        match existing {
                            Some(ev) => merge_value(ev, v),
                            None => {
                                bm.insert(k, v);
                            }
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        if let Some(val) = merged {
            match val.into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    let mut evec = errors;
                    evec.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (GameConfig::default(), used, evec)
                }
            }
        } else {
            (GameConfig::default(), used, errors)
        }
    }

    /// Produce validation warnings (non-fatal) for suspicious values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.glider.step <= 0.0 {
            w.push(format!(
                "glider.step {} must be > 0; key presses will not move the glider forward",
                self.glider.step
            ));
        }
        if self.glider.size.x <= 0.0 || self.glider.size.y <= 0.0 || self.glider.size.z <= 0.0 {
            w.push("glider.size components must be > 0".into());
        }
        if self.stars.count == 0 {
            w.push("stars.count is 0; nothing to collect".into());
        }
        if self.stars.radius <= 0.0 {
            w.push("stars.radius must be > 0".into());
        }
        if self.clouds.radius <= 0.0 {
            w.push("clouds.radius must be > 0".into());
        }
        if self.clouds.drift.duration <= 0.0 {
            w.push(format!(
                "clouds.drift.duration {} must be > 0 -> drift disabled",
                self.clouds.drift.duration
            ));
        }
        if self.scoring.star_reward == 0 {
            w.push("scoring.star_reward is 0; collecting stars will not change the score".into());
        }
        fn check_range_f32(w: &mut Vec<String>, label: &str, r: &SpawnRange<f32>) {
            if r.min > r.max {
                w.push(format!("{label} min ({}) greater than max ({})", r.min, r.max));
            }
        }
        check_range_f32(&mut w, "stars.x_range", &self.stars.x_range);
        check_range_f32(&mut w, "stars.y_range", &self.stars.y_range);
        check_range_f32(&mut w, "stars.z_range", &self.stars.z_range);
        check_range_f32(&mut w, "clouds.x_range", &self.clouds.x_range);
        check_range_f32(&mut w, "clouds.z_range", &self.clouds.z_range);
        w
    }
}
