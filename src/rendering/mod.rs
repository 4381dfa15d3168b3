pub mod hud;
pub mod scene;
pub mod visuals;
