//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (glider moves, cloud drift: direct transform edits before Rapier)
//! 2. Rapier (handled by plugin in PostUpdate)
//! 3. PostPhysicsAdjust (contact bridging, star collection, score label refresh)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // transform edits applied before physics simulation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // contact reactions after physics
