//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod command;
pub mod difficulty;
pub mod events;
pub mod factory;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallVariant, SideEffect};
pub use collision::{Rect, bounce_off_wall, circle_rect_overlap, reflect_velocity};
pub use command::{Command, CommandHistory, DEFAULT_HISTORY_LIMIT};
pub use difficulty::{Difficulty, DifficultyContext};
pub use events::{
    Achievement, AchievementTracker, EventBus, GameEvent, Observer, ScoreTracker, SoundCue,
    SoundTracker, StatsTracker,
};
pub use factory::BallFactory;
pub use paddle::{ModeProfile, Paddle, PaddleMode};
pub use state::{GameSession, Multiplier};
pub use tick::{FinalStats, MODE_KEY_MODES, Simulation, TickInput, TickOutcome};
