//! Difficulty policies
//!
//! Each [`Difficulty`] is an immutable set of tuning formulas parameterized
//! by level. The [`DifficultyContext`] holds the one in effect for a session
//! and applies it to the live entities.

use serde::{Deserialize, Serialize};

use crate::direction_sign;

use super::ball::Ball;
use super::state::GameSession;

/// Difficulty levels, ordered by increasing challenge
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Perfect for learning | +Lives +Power-ups",
            Difficulty::Normal => "Balanced experience | Standard challenge",
            Difficulty::Hard => "For experts | -Lives +Speed +Points",
            Difficulty::Extreme => "ONE LIFE | Top speed | No power-ups",
        }
    }

    pub fn initial_lives(&self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Normal => 3,
            Difficulty::Hard => 2,
            Difficulty::Extreme => 1,
        }
    }

    /// Ball speed (pixels per tick) at a level
    pub fn ball_speed(&self, level: u32) -> f32 {
        let level = level as f32;
        match self {
            Difficulty::Easy => 4.0 + 0.3 * level,
            Difficulty::Normal => 5.0 + 0.5 * level,
            Difficulty::Hard => 6.5 + 0.7 * level,
            Difficulty::Extreme => 8.0 + 1.0 * level,
        }
    }

    pub fn points_per_hit(&self, level: u32) -> u64 {
        let level = u64::from(level);
        match self {
            Difficulty::Easy => 15 * level,
            Difficulty::Normal => 10 * level,
            Difficulty::Hard => 20 * level,
            Difficulty::Extreme => 50 * level,
        }
    }

    /// Special ball probability (percent)
    pub fn special_prob(&self, level: u32) -> u32 {
        match self {
            Difficulty::Easy => (50 + level * 5).min(80),
            Difficulty::Normal => (30 + level * 5).min(60),
            Difficulty::Hard => (15 + level * 3).min(40),
            Difficulty::Extreme => 0,
        }
    }
}

/// Holds the difficulty in effect for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DifficultyContext {
    strategy: Difficulty,
}

impl DifficultyContext {
    pub fn new(strategy: Difficulty) -> Self {
        log::info!("Difficulty: {}", strategy.name());
        Self { strategy }
    }

    pub fn strategy(&self) -> Difficulty {
        self.strategy
    }

    /// Swap the active strategy, returning the previous one
    pub fn switch(&mut self, strategy: Difficulty) -> Difficulty {
        log::info!("Difficulty: {} -> {}", self.strategy.name(), strategy.name());
        std::mem::replace(&mut self.strategy, strategy)
    }

    /// Apply tuning for `level`: lives reset at level 1, ball speed always
    pub fn apply(&self, session: &mut GameSession, level: u32) {
        if level == 1 {
            session.lives = self.strategy.initial_lives();
        }
        self.tune_ball(&mut session.ball, level);
        log::debug!("Applied {} tuning for level {}", self.strategy.name(), level);
    }

    /// Set both ball speed components to the strategy speed for `level`,
    /// keeping their direction signs. A zero component counts as positive.
    ///
    /// Depends on the level only, so repeated calls never compound.
    pub fn tune_ball(&self, ball: &mut Ball, level: u32) {
        let speed = self.strategy.ball_speed(level);
        ball.vel.x = direction_sign(ball.vel.x) * speed;
        ball.vel.y = direction_sign(ball.vel.y) * speed;
    }
}
