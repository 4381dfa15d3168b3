use bevy::prelude::*;

/// Marker component for the single player-controlled glider.
#[derive(Component, Debug)]
pub struct Glider;

/// Marker component for a collectible star.
#[derive(Component, Debug)]
pub struct Star;

/// Marker component for a drifting cloud obstacle.
#[derive(Component, Debug)]
pub struct Cloud;

/// Collision category of a scene entity. Every collidable entity carries exactly one.
/// Bit values live in `physics::categories`.
#[derive(Component, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Glider,
    Star,
    Cloud,
}

/// Logical collider radius (stars and clouds); also drives the visual sphere size.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BodyRadius(pub f32);

/// Repeating vertical motion owned by each cloud.
/// Each cycle moves the cloud by `offset` over `duration` seconds, then starts again from where it is.
#[derive(Component, Debug, Copy, Clone)]
pub struct CloudDrift {
    pub offset: Vec3,
    pub duration: f32,
    pub elapsed: f32,
}
impl CloudDrift {
    pub fn new(offset: Vec3, duration: f32) -> Self {
        Self {
            offset,
            duration,
            elapsed: 0.0,
        }
    }

    /// Displacement for `dt` seconds of motion, advancing the cycle clock.
    pub fn step(&mut self, dt: f32) -> Vec3 {
        if self.duration <= 0.0 || dt <= 0.0 {
            return Vec3::ZERO;
        }
        self.elapsed = (self.elapsed + dt) % self.duration;
        self.offset * (dt / self.duration)
    }
}

/// Deterministic RNG seed resource (set once at startup / tests for reproducible spawning).
#[derive(Resource, Debug, Copy, Clone, Default)]
pub struct RngSeed(pub u64);
