//! Squash - a pong-against-a-wall arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, commands, events, difficulty)
//! - `states`: Stack-based screen state machine (menu, playing, paused, game over)
//! - `platform`: Input adaptation at the platform boundary
//! - `settings`: Immutable process-wide configuration
//! - `highscores`: In-memory leaderboard

pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod states;

pub use highscores::HighScores;
pub use settings::Settings;
pub use states::{StateStack, View};

/// RGB colour triple, surfaced to the render target as-is
pub type Rgb = [u8; 3];

/// Game configuration constants
pub mod consts {
    /// Fixed tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Default playfield dimensions
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 700.0;

    /// Paddle defaults
    pub const PADDLE_START_X: f32 = 450.0;
    pub const PADDLE_Y: f32 = 650.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPAWN_X: f32 = 500.0;
    pub const BALL_SPAWN_Y: f32 = 350.0;

    /// Magnet mode: horizontal reach, activation line and pull strength
    pub const MAGNET_RANGE: f32 = 150.0;
    pub const MAGNET_MIN_Y: f32 = 300.0;
    pub const MAGNET_PULL: f32 = 0.05;

    /// Vertical speed multiplier on a Shield-mode hit
    pub const SHIELD_BOOST: f32 = 1.2;
    /// Horizontal redirect per pixel of offset from paddle center
    pub const PADDLE_ENGLISH: f32 = 0.1;
    /// Paddle speed multiplier granted by a Slow ball hit
    pub const SLOW_BALL_PADDLE_BOOST: f32 = 1.5;

    /// Score needed per level (level N ends at N * POINTS_PER_LEVEL)
    pub const POINTS_PER_LEVEL: u64 = 100;

    /// Number of paddle mode-select keys
    pub const MODE_KEY_COUNT: usize = 5;
}

/// Sign of a velocity component, treating zero as positive
#[inline]
pub fn direction_sign(v: f32) -> f32 {
    if v < 0.0 { -1.0 } else { 1.0 }
}
