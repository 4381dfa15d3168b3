pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::GamePlugin;
pub use crate::core::components::{Category, Cloud, Glider, RngSeed, Star};
pub use crate::core::config::{config::GameConfig, config::WindowConfig};
pub use crate::gameplay::session::Session;
pub use crate::interaction::contact::{ContactEvent, StarCollected};
pub use crate::interaction::movement::{MoveDirection, MoveGlider, PlatformKeyPress};
