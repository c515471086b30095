//! Game session state
//!
//! Everything a single play-through mutates lives in [`GameSession`]. It is
//! created when play starts and dropped when the playing state goes away.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::difficulty::{Difficulty, DifficultyContext};
use super::factory::BallFactory;
use super::paddle::Paddle;

/// Temporary score multiplier, counted down in ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Multiplier {
    pub active: bool,
    pub remaining_ticks: u32,
}

impl Multiplier {
    /// Activate (or restart) for `ticks` ticks
    pub fn activate(&mut self, ticks: u32) {
        self.active = ticks > 0;
        self.remaining_ticks = ticks;
    }

    /// Count down one tick, deactivating at zero
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            self.active = false;
            log::debug!("Score multiplier expired");
        }
    }

    /// Apply to a point value
    pub fn apply(&self, points: u64) -> u64 {
        if self.active { points * 2 } else { points }
    }

    /// Whole seconds left at the given tick rate
    pub fn remaining_secs(&self, fps: u32) -> u32 {
        if fps == 0 { 0 } else { self.remaining_ticks / fps }
    }
}

/// Complete mutable state of one play-through
#[derive(Debug, Clone)]
pub struct GameSession {
    pub score: u64,
    /// Current level (starts at 1)
    pub level: u32,
    pub lives: u32,
    pub multiplier: Multiplier,
    pub paddle: Paddle,
    pub ball: Ball,
    pub difficulty: DifficultyContext,
    /// Session RNG (ball variants)
    rng: Pcg32,
}

impl GameSession {
    /// Start a new session at level 1 with the strategy's tuning applied
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = BallFactory::create_random(1, &mut rng);
        let mut session = Self {
            score: 0,
            level: 1,
            lives: difficulty.initial_lives(),
            multiplier: Multiplier::default(),
            paddle: Paddle::default(),
            ball,
            difficulty: DifficultyContext::new(difficulty),
            rng,
        };

        let context = session.difficulty;
        context.apply(&mut session, 1);
        session
    }

    pub fn strategy(&self) -> Difficulty {
        self.difficulty.strategy()
    }

    /// Score needed to leave the current level
    pub fn level_threshold(&self) -> u64 {
        u64::from(self.level) * crate::consts::POINTS_PER_LEVEL
    }

    /// Replace the (dead) ball with a fresh random one tuned for this level
    pub fn respawn_ball(&mut self) {
        let mut ball = BallFactory::create_random(self.level, &mut self.rng);
        self.difficulty.tune_ball(&mut ball, self.level);
        self.ball = ball;
    }
}
