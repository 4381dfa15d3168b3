use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Score state for one game session. Lives as a resource for the lifetime of the `App`;
/// a fresh `App` is a fresh session.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Session {
    score: u32,
    /// Points granted per collected star.
    pub star_reward: u32,
    stars_collected: u32,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Session {
    pub fn new(star_reward: u32) -> Self {
        Self {
            score: 0,
            star_reward,
            stars_collected: 0,
        }
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn stars_collected(&self) -> u32 {
        self.stars_collected
    }

    /// Add `points` to the running total. The score never decreases.
    pub fn award(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);
        self.score
    }

    /// Record one collected star and grant the configured reward.
    pub fn collect_star(&mut self) -> u32 {
        self.stars_collected += 1;
        self.award(self.star_reward)
    }

    /// Text shown by the score label.
    pub fn label(&self) -> String {
        format!("Score: {}", self.score)
    }
}

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, init_session);
    }
}

fn init_session(mut commands: Commands, cfg: Option<Res<GameConfig>>) {
    let reward = cfg.map(|c| c.scoring.star_reward).unwrap_or(10);
    info!(target: "score", reward, "Session started: Score: 0");
    commands.insert_resource(Session::new(reward));
}
