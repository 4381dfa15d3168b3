pub mod config;

pub use config::{
    CameraConfig, CloudDriftConfig, CloudSpawnConfig, GameConfig, GliderConfig, LightConfig,
    Point3, ScoringConfig, SpawnRange, StarSpawnConfig, WindowConfig,
};
